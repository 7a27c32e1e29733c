//! Crouton - interactive toast notifications for Windows 10
//!
//! A [`Toast`] is assembled from typed parts: visible content ([`Visual`]
//! holding [`Text`] lines and [`VisualImage`]s), an optional sound
//! ([`Audio`]), and interactive elements ([`ToastAction`] buttons and
//! [`ToastInput`] controls). [`Toast::to_xml`] renders the document the
//! platform's `ToastGeneric` template expects; on Windows,
//! [`platform::win32`] loads it and hands it to the notification manager.
//!
//! The model and serializer have no Windows dependency, so everything up
//! to the XML string builds and tests on any platform.
//!
//! Values are copied into the XML verbatim - nothing is escaped. A caller
//! that puts `<`, `&`, or `"` into content or attribute values produces a
//! document the platform loader will reject.
//!
//! ```
//! use crouton::{Text, Toast, Visual};
//!
//! let mut visual = Visual::new();
//! visual.add_text(Text::new("Spicy Heaven"));
//!
//! let mut toast = Toast::new();
//! toast.set_visual(visual);
//! assert!(toast.to_xml().contains("<text>Spicy Heaven</text>"));
//! ```

pub mod actions;
pub mod audio;
pub mod platform;
pub mod toast;
pub mod types;
pub mod visual;

mod xml;

pub use actions::{ActionItem, Selection, ToastAction, ToastInput};
pub use audio::Audio;
pub use toast::Toast;
pub use types::{
    ActivationType, Branding, ImageCropping, ImagePlacement, ParseTokenError, Scenario,
    ToastInputType,
};
pub use visual::{BindingItem, Text, Visual, VisualImage};
