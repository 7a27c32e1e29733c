//! Wire-level enumerations of the toast schema
//!
//! Each enum maps onto a fixed set of attribute tokens understood by the
//! notification platform. `as_token` gives the canonical spelling used in
//! the serialized document; `FromStr` accepts exactly that spelling.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseTokenError {
    #[error("unknown activation type: {0}")]
    ActivationType(String),
    #[error("unknown scenario: {0}")]
    Scenario(String),
    #[error("unknown branding: {0}")]
    Branding(String),
    #[error("unknown image placement: {0}")]
    ImagePlacement(String),
    #[error("unknown image cropping: {0}")]
    ImageCropping(String),
    #[error("unknown input type: {0}")]
    InputType(String),
}

/// How tapping the toast body or an action button activates the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationType {
    /// Launch the app in the foreground (the default platform behavior).
    Foreground,
    /// Trigger the app's background task without bringing it forward.
    Background,
    /// Launch another app through a protocol URI.
    Protocol,
    /// Reserved for system actions such as snooze/dismiss.
    System,
}

impl ActivationType {
    pub fn as_token(self) -> &'static str {
        match self {
            ActivationType::Foreground => "foreground",
            ActivationType::Background => "background",
            ActivationType::Protocol => "protocol",
            ActivationType::System => "system",
        }
    }
}

impl fmt::Display for ActivationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for ActivationType {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "foreground" => Ok(ActivationType::Foreground),
            "background" => Ok(ActivationType::Background),
            "protocol" => Ok(ActivationType::Protocol),
            "system" => Ok(ActivationType::System),
            _ => Err(ParseTokenError::ActivationType(s.to_string())),
        }
    }
}

/// Presentation scenario controlling sound, persistence, and urgency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    Default,
    /// Stays on screen and loops its audio until dismissed.
    Alarm,
    Reminder,
    IncomingCall,
}

impl Scenario {
    pub fn as_token(self) -> &'static str {
        match self {
            Scenario::Default => "default",
            Scenario::Alarm => "alarm",
            Scenario::Reminder => "reminder",
            Scenario::IncomingCall => "incomingcall",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for Scenario {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Scenario::Default),
            "alarm" => Ok(Scenario::Alarm),
            "reminder" => Ok(Scenario::Reminder),
            "incomingcall" => Ok(Scenario::IncomingCall),
            _ => Err(ParseTokenError::Scenario(s.to_string())),
        }
    }
}

/// Whether the app's logo and name are shown on the toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Branding {
    None,
    Logo,
    Name,
}

impl Branding {
    pub fn as_token(self) -> &'static str {
        match self {
            Branding::None => "none",
            Branding::Logo => "logo",
            Branding::Name => "name",
        }
    }
}

impl fmt::Display for Branding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for Branding {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Branding::None),
            "logo" => Ok(Branding::Logo),
            "name" => Ok(Branding::Name),
            _ => Err(ParseTokenError::Branding(s.to_string())),
        }
    }
}

/// Where an image is placed on the toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImagePlacement {
    /// In the toast body, below the text lines.
    Inline,
    /// Replaces the app logo in the top-left corner.
    AppLogoOverride,
}

impl ImagePlacement {
    pub fn as_token(self) -> &'static str {
        match self {
            ImagePlacement::Inline => "inline",
            ImagePlacement::AppLogoOverride => "appLogoOverride",
        }
    }
}

impl fmt::Display for ImagePlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for ImagePlacement {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inline" => Ok(ImagePlacement::Inline),
            "appLogoOverride" => Ok(ImagePlacement::AppLogoOverride),
            _ => Err(ParseTokenError::ImagePlacement(s.to_string())),
        }
    }
}

/// Crop applied to an image (the `hint-crop` attribute).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageCropping {
    None,
    Circle,
}

impl ImageCropping {
    pub fn as_token(self) -> &'static str {
        match self {
            ImageCropping::None => "none",
            ImageCropping::Circle => "circle",
        }
    }
}

impl fmt::Display for ImageCropping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for ImageCropping {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ImageCropping::None),
            "circle" => Ok(ImageCropping::Circle),
            _ => Err(ParseTokenError::ImageCropping(s.to_string())),
        }
    }
}

/// Kind of input control rendered on the toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastInputType {
    /// A free-text box.
    Text,
    /// A drop-down list of selections.
    Selection,
}

impl ToastInputType {
    pub fn as_token(self) -> &'static str {
        match self {
            ToastInputType::Text => "text",
            ToastInputType::Selection => "selection",
        }
    }
}

impl fmt::Display for ToastInputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for ToastInputType {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ToastInputType::Text),
            "selection" => Ok(ToastInputType::Selection),
            _ => Err(ParseTokenError::InputType(s.to_string())),
        }
    }
}
