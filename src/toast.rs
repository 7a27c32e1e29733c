//! The toast document root

use crate::actions::ActionItem;
use crate::audio::Audio;
use crate::types::{ActivationType, Scenario};
use crate::visual::Visual;
use crate::xml;

/// Root of an interactive toast document.
///
/// A toast owns at most one [`Visual`], at most one [`Audio`], and an
/// ordered sequence of [`ActionItem`]s. [`to_xml`](Toast::to_xml) renders
/// the whole document; calling it repeatedly on an unmodified toast yields
/// byte-identical output.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Toast {
    /// Arguments passed back to the app when the toast body is tapped.
    pub launch_args: Option<String>,
    pub activation_type: Option<ActivationType>,
    pub scenario: Option<Scenario>,
    /// Contact hint, rendered as `hint-people`.
    pub people: Option<String>,
    visual: Option<Visual>,
    audio: Option<Audio>,
    actions: Vec<ActionItem>,
}

impl Toast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_launch_args(mut self, launch_args: impl Into<String>) -> Self {
        self.launch_args = Some(launch_args.into());
        self
    }

    pub fn with_activation_type(mut self, activation_type: ActivationType) -> Self {
        self.activation_type = Some(activation_type);
        self
    }

    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = Some(scenario);
        self
    }

    pub fn with_people(mut self, people: impl Into<String>) -> Self {
        self.people = Some(people.into());
        self
    }

    /// Set the visual content, replacing any existing one.
    pub fn set_visual(&mut self, visual: Visual) {
        self.visual = Some(visual);
    }

    pub fn visual(&self) -> Option<&Visual> {
        self.visual.as_ref()
    }

    /// Attach a sound, replacing any existing one. `looped` and `silent`
    /// are tri-state: `None` omits the attribute entirely.
    pub fn add_audio(&mut self, source: impl Into<String>, looped: Option<bool>, silent: Option<bool>) {
        self.audio = Some(Audio::new(source, looped, silent));
    }

    /// Discard the attached sound, if any.
    pub fn remove_audio(&mut self) {
        self.audio = None;
    }

    pub fn audio(&self) -> Option<&Audio> {
        self.audio.as_ref()
    }

    /// Append an action button or input to the `<actions>` sequence.
    pub fn add_action_item(&mut self, item: impl Into<ActionItem>) {
        self.actions.push(item.into());
    }

    /// Remove the first action item equal to `item`. No-op when absent.
    pub fn remove_action_item(&mut self, item: &ActionItem) {
        if let Some(pos) = self.actions.iter().position(|a| a == item) {
            self.actions.remove(pos);
        }
    }

    /// Action items in document order.
    pub fn action_items(&self) -> &[ActionItem] {
        &self.actions
    }

    /// Serialize the document.
    ///
    /// Top-level attributes come in fixed order (`launch`, `activationType`,
    /// `scenario`, `hint-people`), each present only when set. Children
    /// follow as visual, audio, then an `<actions>` block — the block is
    /// omitted entirely when no action items exist. Values are copied in
    /// verbatim with no escaping.
    pub fn to_xml(&self) -> String {
        let mut out = String::from("<toast");
        xml::opt_attr(&mut out, "launch", self.launch_args.as_deref());
        xml::opt_token_attr(
            &mut out,
            "activationType",
            self.activation_type.map(ActivationType::as_token),
        );
        xml::opt_token_attr(&mut out, "scenario", self.scenario.map(Scenario::as_token));
        xml::opt_attr(&mut out, "hint-people", self.people.as_deref());
        out.push('>');

        if let Some(ref visual) = self.visual {
            out.push('\n');
            out.push_str(&visual.to_xml());
        }

        if let Some(ref audio) = self.audio {
            out.push('\n');
            out.push_str(&audio.to_xml());
        }

        if !self.actions.is_empty() {
            out.push_str("\n<actions>");
            for item in &self.actions {
                out.push('\n');
                out.push_str(&item.to_xml());
            }
            out.push_str("\n</actions>");
        }

        out.push_str("\n</toast>");
        out
    }
}
