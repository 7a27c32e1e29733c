//! Visible toast content: text lines and images
//!
//! A [`Visual`] holds one ordered list of binding items. When the list is
//! non-empty, serialization wraps it in a `<binding template="ToastGeneric">`
//! element carrying the same shared attributes as the `<visual>` tag itself.

use crate::types::{Branding, ImageCropping, ImagePlacement};
use crate::xml;

/// Template token of the generic toast binding.
const TOAST_GENERIC: &str = "ToastGeneric";

/// A line of text in the toast body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Text {
    /// Text shown on the toast. Copied into the document verbatim.
    pub content: String,
    /// BCP-47 language tag for the `lang` attribute.
    pub language: Option<String>,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            language: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Render `<text lang="…">content</text>`.
    pub(crate) fn to_xml(&self) -> String {
        let mut out = String::from("<text");
        xml::opt_attr(&mut out, "lang", self.language.as_deref());
        out.push('>');
        out.push_str(&self.content);
        out.push_str("</text>");
        out
    }
}

/// An image in the toast body, or one replacing the app logo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualImage {
    /// Image URI (`ms-appx:///`, `ms-appdata:///`, or `http(s)://`).
    pub source: String,
    /// Alternate text for accessibility.
    pub alt: Option<String>,
    pub placement: Option<ImagePlacement>,
    /// Crop shape, rendered as the `hint-crop` attribute.
    pub cropping: Option<ImageCropping>,
    /// Allow the platform to append scale/contrast/language query strings
    /// to the image URI, for servers that can serve variants.
    pub add_image_query: Option<bool>,
}

impl VisualImage {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt: None,
            placement: None,
            cropping: None,
            add_image_query: None,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    pub fn with_placement(mut self, placement: ImagePlacement) -> Self {
        self.placement = Some(placement);
        self
    }

    pub fn with_cropping(mut self, cropping: ImageCropping) -> Self {
        self.cropping = Some(cropping);
        self
    }

    pub fn with_add_image_query(mut self, add_image_query: bool) -> Self {
        self.add_image_query = Some(add_image_query);
        self
    }

    /// Render a self-closing `<image … />`.
    pub(crate) fn to_xml(&self) -> String {
        let mut out = String::from("<image");
        xml::attr(&mut out, "src", &self.source);
        xml::opt_attr(&mut out, "alt", self.alt.as_deref());
        xml::opt_token_attr(&mut out, "placement", self.placement.map(ImagePlacement::as_token));
        xml::opt_token_attr(&mut out, "hint-crop", self.cropping.map(ImageCropping::as_token));
        xml::opt_bool_attr(&mut out, "addImageQuery", self.add_image_query);
        out.push_str(" />");
        out
    }
}

/// Item in the visual binding, kept in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindingItem {
    Text(Text),
    Image(VisualImage),
}

impl BindingItem {
    pub(crate) fn to_xml(&self) -> String {
        match self {
            BindingItem::Text(text) => text.to_xml(),
            BindingItem::Image(image) => image.to_xml(),
        }
    }
}

impl From<Text> for BindingItem {
    fn from(text: Text) -> Self {
        BindingItem::Text(text)
    }
}

impl From<VisualImage> for BindingItem {
    fn from(image: VisualImage) -> Self {
        BindingItem::Image(image)
    }
}

/// The visible part of a toast.
///
/// Text and image items share one ordered sequence; their relative order at
/// insertion time is the order they appear in the document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Visual {
    /// BCP-47 language tag applied to the `<visual>` and `<binding>` tags.
    pub language: Option<String>,
    /// Base URI prepended by the platform to relative image sources.
    pub base_uri: Option<String>,
    /// Allow the platform to append scale/contrast/language query strings
    /// to image URIs inside this visual.
    pub add_image_query: Option<bool>,
    pub branding: Option<Branding>,
    items: Vec<BindingItem>,
}

impl Visual {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = Some(base_uri.into());
        self
    }

    pub fn with_add_image_query(mut self, add_image_query: bool) -> Self {
        self.add_image_query = Some(add_image_query);
        self
    }

    pub fn with_branding(mut self, branding: Branding) -> Self {
        self.branding = Some(branding);
        self
    }

    /// Append a text line to the item sequence.
    pub fn add_text(&mut self, text: Text) {
        self.items.push(BindingItem::Text(text));
    }

    /// Remove the first text item equal to `text`. No-op when absent.
    pub fn remove_text(&mut self, text: &Text) {
        if let Some(pos) = self
            .items
            .iter()
            .position(|item| matches!(item, BindingItem::Text(t) if t == text))
        {
            self.items.remove(pos);
        }
    }

    /// Append an image to the item sequence.
    pub fn add_image(&mut self, image: VisualImage) {
        self.items.push(BindingItem::Image(image));
    }

    /// Remove the first image item equal to `image`. No-op when absent.
    pub fn remove_image(&mut self, image: &VisualImage) {
        if let Some(pos) = self
            .items
            .iter()
            .position(|item| matches!(item, BindingItem::Image(i) if i == image))
        {
            self.items.remove(pos);
        }
    }

    /// Binding items in document order.
    pub fn items(&self) -> &[BindingItem] {
        &self.items
    }

    // lang, baseUri, addImageQuery go on both <visual> and <binding>.
    fn push_shared_attrs(&self, out: &mut String) {
        xml::opt_attr(out, "lang", self.language.as_deref());
        xml::opt_attr(out, "baseUri", self.base_uri.as_deref());
        xml::opt_bool_attr(out, "addImageQuery", self.add_image_query);
    }

    /// Render `<visual …>` with its binding. An empty item sequence
    /// produces no `<binding>` element at all.
    pub(crate) fn to_xml(&self) -> String {
        let mut out = String::from("<visual");
        self.push_shared_attrs(&mut out);
        xml::opt_token_attr(&mut out, "branding", self.branding.map(Branding::as_token));
        out.push('>');

        if !self.items.is_empty() {
            out.push('\n');
            out.push_str(&self.binding_xml());
        }

        out.push('\n');
        out.push_str("</visual>");
        out
    }

    fn binding_xml(&self) -> String {
        let mut out = String::from("<binding template=\"");
        out.push_str(TOAST_GENERIC);
        out.push('"');
        self.push_shared_attrs(&mut out);
        out.push('>');

        for item in &self.items {
            out.push('\n');
            out.push_str(&item.to_xml());
        }

        out.push('\n');
        out.push_str("</binding>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_renders_content() {
        assert_eq!(Text::new("Title").to_xml(), "<text>Title</text>");
    }

    #[test]
    fn test_text_with_language() {
        let text = Text::new("Bonjour").with_language("fr-FR");
        assert_eq!(text.to_xml(), "<text lang=\"fr-FR\">Bonjour</text>");
    }

    #[test]
    fn test_image_source_only() {
        let image = VisualImage::new("ms-appx:///Assets/logo.png");
        assert_eq!(image.to_xml(), "<image src=\"ms-appx:///Assets/logo.png\" />");
    }

    #[test]
    fn test_image_attribute_order() {
        let image = VisualImage::new("img.png")
            .with_alt("a logo")
            .with_placement(ImagePlacement::AppLogoOverride)
            .with_cropping(ImageCropping::Circle)
            .with_add_image_query(true);
        assert_eq!(
            image.to_xml(),
            "<image src=\"img.png\" alt=\"a logo\" placement=\"appLogoOverride\" \
             hint-crop=\"circle\" addImageQuery=\"true\" />"
        );
    }

    #[test]
    fn test_empty_visual_has_no_binding() {
        let visual = Visual::new();
        assert_eq!(visual.to_xml(), "<visual>\n</visual>");
    }

    #[test]
    fn test_single_text_creates_binding_wrapper() {
        let mut visual = Visual::new();
        visual.add_text(Text::new("Title"));
        assert_eq!(
            visual.to_xml(),
            "<visual>\n<binding template=\"ToastGeneric\">\n<text>Title</text>\n</binding>\n</visual>"
        );
    }

    #[test]
    fn test_shared_attrs_on_both_tags() {
        let mut visual = Visual::new().with_language("en-US").with_branding(Branding::Logo);
        visual.add_text(Text::new("Hi"));
        let xml = visual.to_xml();
        assert!(xml.starts_with("<visual lang=\"en-US\" branding=\"logo\">"));
        assert!(xml.contains("<binding template=\"ToastGeneric\" lang=\"en-US\">"));
    }

    #[test]
    fn test_items_keep_insertion_order() {
        let mut visual = Visual::new();
        visual.add_text(Text::new("first"));
        visual.add_image(VisualImage::new("mid.png"));
        visual.add_text(Text::new("last"));

        let xml = visual.to_xml();
        let first = xml.find("<text>first</text>").unwrap();
        let mid = xml.find("<image src=\"mid.png\" />").unwrap();
        let last = xml.find("<text>last</text>").unwrap();
        assert!(first < mid && mid < last);
    }

    #[test]
    fn test_remove_text_first_match_only() {
        let mut visual = Visual::new();
        visual.add_text(Text::new("dup"));
        visual.add_text(Text::new("dup"));
        visual.remove_text(&Text::new("dup"));
        assert_eq!(visual.items().len(), 1);
    }

    #[test]
    fn test_remove_absent_item_is_noop() {
        let mut visual = Visual::new();
        visual.add_text(Text::new("keep"));
        visual.remove_text(&Text::new("missing"));
        visual.remove_image(&VisualImage::new("missing.png"));
        assert_eq!(visual.items().len(), 1);
    }

    #[test]
    fn test_remove_text_does_not_touch_images() {
        // A text and an image with colliding payloads are distinct items.
        let mut visual = Visual::new();
        visual.add_image(VisualImage::new("x"));
        visual.remove_text(&Text::new("x"));
        assert_eq!(visual.items().len(), 1);
    }
}
