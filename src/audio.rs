//! Toast audio element

use crate::xml;

/// Sound played when the toast is shown.
///
/// A toast owns at most one audio element, created through
/// [`Toast::add_audio`](crate::Toast::add_audio) and discarded by
/// [`Toast::remove_audio`](crate::Toast::remove_audio).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Audio {
    source: String,
    looped: Option<bool>,
    silent: Option<bool>,
}

impl Audio {
    pub(crate) fn new(source: impl Into<String>, looped: Option<bool>, silent: Option<bool>) -> Self {
        Self {
            source: source.into(),
            looped,
            silent,
        }
    }

    /// Sound URI (`ms-winsoundevent:...` or an app resource).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the sound repeats for the lifetime of the toast.
    pub fn looped(&self) -> Option<bool> {
        self.looped
    }

    /// Whether the toast is shown without any sound.
    pub fn silent(&self) -> Option<bool> {
        self.silent
    }

    /// Render `<audio src="…" loop="…" silent="…" />`.
    pub(crate) fn to_xml(&self) -> String {
        let mut out = String::from("<audio");
        xml::attr(&mut out, "src", &self.source);
        xml::opt_bool_attr(&mut out, "loop", self.looped);
        xml::opt_bool_attr(&mut out, "silent", self.silent);
        out.push_str(" />");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_source_only() {
        let audio = Audio::new("ms-winsoundevent:Notification.Reminder", None, None);
        assert_eq!(
            audio.to_xml(),
            "<audio src=\"ms-winsoundevent:Notification.Reminder\" />"
        );
    }

    #[test]
    fn test_audio_attribute_order() {
        let audio = Audio::new("ms-appx:///sound.wav", Some(true), Some(false));
        assert_eq!(
            audio.to_xml(),
            "<audio src=\"ms-appx:///sound.wav\" loop=\"true\" silent=\"false\" />"
        );
    }

    #[test]
    fn test_audio_empty_source_still_emitted() {
        // Source is a required attribute; there is no validation layer.
        let audio = Audio::new("", None, Some(true));
        assert_eq!(audio.to_xml(), "<audio src=\"\" silent=\"true\" />");
    }
}
