//! Interactive toast elements: action buttons and inputs

use crate::types::{ActivationType, ToastInputType};
use crate::xml;

/// A clickable button on the toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastAction {
    /// Button label. Always serialized, even when empty.
    pub content: String,
    /// Arguments handed back to the app on activation. Always serialized.
    pub arguments: String,
    pub activation_type: Option<ActivationType>,
    /// Icon shown on the button.
    pub image_uri: Option<String>,
    /// Id of the input element this button belongs to (quick-reply layout,
    /// rendered as `hint-inputId`). Not checked against the toast's inputs;
    /// a dangling id is passed through as-is.
    pub input_id: Option<String>,
}

impl ToastAction {
    pub fn new(content: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            arguments: arguments.into(),
            activation_type: None,
            image_uri: None,
            input_id: None,
        }
    }

    pub fn with_activation_type(mut self, activation_type: ActivationType) -> Self {
        self.activation_type = Some(activation_type);
        self
    }

    pub fn with_image_uri(mut self, image_uri: impl Into<String>) -> Self {
        self.image_uri = Some(image_uri.into());
        self
    }

    pub fn with_input_id(mut self, input_id: impl Into<String>) -> Self {
        self.input_id = Some(input_id.into());
        self
    }

    /// Render a self-closing `<action … />`.
    pub(crate) fn to_xml(&self) -> String {
        let mut out = String::from("<action");
        xml::attr(&mut out, "content", &self.content);
        xml::attr(&mut out, "arguments", &self.arguments);
        xml::opt_token_attr(
            &mut out,
            "activationType",
            self.activation_type.map(ActivationType::as_token),
        );
        xml::opt_attr(&mut out, "imageUri", self.image_uri.as_deref());
        xml::opt_attr(&mut out, "hint-inputId", self.input_id.as_deref());
        out.push_str(" />");
        out
    }
}

/// One choice inside a selection input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub id: String,
    pub content: String,
}

impl Selection {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    /// Render `<selection id="…" content="…" />`. Both attributes are
    /// required and always present.
    pub(crate) fn to_xml(&self) -> String {
        let mut out = String::from("<selection");
        xml::attr(&mut out, "id", &self.id);
        xml::attr(&mut out, "content", &self.content);
        out.push_str(" />");
        out
    }
}

/// An input control on the toast: a text box or a selection list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastInput {
    pub id: String,
    pub input_type: ToastInputType,
    /// Caption shown above the control.
    pub title: Option<String>,
    /// Hint text for a text box. Only rendered when `input_type` is
    /// [`ToastInputType::Text`]; silently dropped for selection inputs.
    pub placeholder_content: Option<String>,
    /// Prefilled value. For a text input this is literal text; for a
    /// selection input the platform expects the id of one of the contained
    /// selections. The platform interprets it either way; nothing is
    /// validated here.
    pub default_input: Option<String>,
    selections: Vec<Selection>,
}

impl ToastInput {
    pub fn new(id: impl Into<String>, input_type: ToastInputType) -> Self {
        Self {
            id: id.into(),
            input_type,
            title: None,
            placeholder_content: None,
            default_input: None,
            selections: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_placeholder_content(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder_content = Some(placeholder.into());
        self
    }

    pub fn with_default_input(mut self, default_input: impl Into<String>) -> Self {
        self.default_input = Some(default_input.into());
        self
    }

    /// Append a choice. Only meaningful for selection inputs; a text input
    /// keeps the choices in the model but never serializes them.
    pub fn add_selection(&mut self, id: impl Into<String>, content: impl Into<String>) {
        self.selections.push(Selection::new(id, content));
    }

    /// Choices in document order.
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Render `<input …>`. A text input self-closes; a selection input
    /// opens a body listing its selections and closes with `</input>`.
    pub(crate) fn to_xml(&self) -> String {
        let mut out = String::from("<input");
        xml::attr(&mut out, "id", &self.id);
        xml::attr(&mut out, "type", self.input_type.as_token());
        xml::opt_attr(&mut out, "title", self.title.as_deref());

        // placeHolderContent only applies to text boxes, so a placeholder on
        // a selection input is dropped here rather than serialized.
        if self.input_type == ToastInputType::Text {
            xml::opt_attr(&mut out, "placeHolderContent", self.placeholder_content.as_deref());
        }

        xml::opt_attr(&mut out, "defaultInput", self.default_input.as_deref());

        match self.input_type {
            ToastInputType::Text => out.push_str(" />"),
            ToastInputType::Selection => {
                out.push('>');
                for selection in &self.selections {
                    out.push('\n');
                    out.push_str(&selection.to_xml());
                }
                out.push('\n');
                out.push_str("</input>");
            }
        }

        out
    }
}

/// Entry in the toast's `<actions>` block, kept in insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionItem {
    Action(ToastAction),
    Input(ToastInput),
}

impl ActionItem {
    pub(crate) fn to_xml(&self) -> String {
        match self {
            ActionItem::Action(action) => action.to_xml(),
            ActionItem::Input(input) => input.to_xml(),
        }
    }
}

impl From<ToastAction> for ActionItem {
    fn from(action: ToastAction) -> Self {
        ActionItem::Action(action)
    }
}

impl From<ToastInput> for ActionItem {
    fn from(input: ToastInput) -> Self {
        ActionItem::Input(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_minimal() {
        let action = ToastAction::new("Reserve", "reserve");
        assert_eq!(
            action.to_xml(),
            "<action content=\"Reserve\" arguments=\"reserve\" />"
        );
    }

    #[test]
    fn test_action_attribute_order() {
        let action = ToastAction::new("Reply", "reply")
            .with_activation_type(ActivationType::Background)
            .with_image_uri("ms-appx:///Assets/reply.png")
            .with_input_id("message");
        assert_eq!(
            action.to_xml(),
            "<action content=\"Reply\" arguments=\"reply\" activationType=\"background\" \
             imageUri=\"ms-appx:///Assets/reply.png\" hint-inputId=\"message\" />"
        );
    }

    #[test]
    fn test_action_empty_required_fields_serialized() {
        let action = ToastAction::new("", "");
        assert_eq!(action.to_xml(), "<action content=\"\" arguments=\"\" />");
    }

    #[test]
    fn test_action_dangling_input_id_accepted() {
        // No referential integrity: the id need not name a real input.
        let action = ToastAction::new("Send", "send").with_input_id("no-such-input");
        assert!(action.to_xml().contains("hint-inputId=\"no-such-input\""));
    }

    #[test]
    fn test_selection_always_has_both_attributes() {
        assert_eq!(
            Selection::new("1", "Breakfast").to_xml(),
            "<selection id=\"1\" content=\"Breakfast\" />"
        );
    }

    #[test]
    fn test_text_input_self_closes() {
        let input = ToastInput::new("message", ToastInputType::Text);
        assert_eq!(input.to_xml(), "<input id=\"message\" type=\"text\" />");
    }

    #[test]
    fn test_text_input_full_attribute_order() {
        let input = ToastInput::new("message", ToastInputType::Text)
            .with_title("Reply")
            .with_placeholder_content("Type a reply")
            .with_default_input("On my way");
        assert_eq!(
            input.to_xml(),
            "<input id=\"message\" type=\"text\" title=\"Reply\" \
             placeHolderContent=\"Type a reply\" defaultInput=\"On my way\" />"
        );
    }

    #[test]
    fn test_selection_input_drops_placeholder() {
        let placeholder = "pick one";

        let mut selection_input = ToastInput::new("time", ToastInputType::Selection)
            .with_placeholder_content(placeholder);
        selection_input.add_selection("1", "Breakfast");
        assert!(!selection_input.to_xml().contains("placeHolderContent"));

        // The identical placeholder on a text input is serialized.
        let text_input =
            ToastInput::new("time", ToastInputType::Text).with_placeholder_content(placeholder);
        assert!(text_input.to_xml().contains("placeHolderContent=\"pick one\""));
    }

    #[test]
    fn test_selection_input_body_and_order() {
        let mut input = ToastInput::new("time", ToastInputType::Selection).with_default_input("2");
        input.add_selection("1", "Breakfast");
        input.add_selection("2", "Lunch");
        input.add_selection("3", "Dinner");
        assert_eq!(
            input.to_xml(),
            "<input id=\"time\" type=\"selection\" defaultInput=\"2\">\n\
             <selection id=\"1\" content=\"Breakfast\" />\n\
             <selection id=\"2\" content=\"Lunch\" />\n\
             <selection id=\"3\" content=\"Dinner\" />\n\
             </input>"
        );
    }

    #[test]
    fn test_selection_input_with_no_choices_keeps_body() {
        let input = ToastInput::new("time", ToastInputType::Selection);
        assert_eq!(
            input.to_xml(),
            "<input id=\"time\" type=\"selection\">\n</input>"
        );
    }
}
