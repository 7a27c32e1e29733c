//! Toast delivery through the Windows notification platform
//!
//! The serialized toast document is loaded into an `XmlDocument` and
//! wrapped in a `ToastNotification` (immediate) or a
//! `ScheduledToastNotification` (timestamped). Loading is where malformed
//! output surfaces: the core does no escaping, so markup characters
//! injected into values fail here as [`NotifyError::LoadXml`].

use chrono::{DateTime, Utc};
use thiserror::Error;
use windows::core::HSTRING;
use windows::Data::Xml::Dom::XmlDocument;
use windows::Foundation;
use windows::UI::Notifications::{
    ScheduledToastNotification, ToastNotification, ToastNotificationManager,
};

use crate::Toast;

/// Seconds between the Windows epoch (1601-01-01) and the Unix epoch.
const WINDOWS_EPOCH_OFFSET_SECS: i64 = 11_644_473_600;

#[derive(Error, Debug)]
pub enum NotifyError {
    /// The document loader rejected the generated XML, usually because a
    /// value contained unescaped markup characters.
    #[error("toast XML rejected by the document loader")]
    LoadXml(#[source] windows::core::Error),
    /// A notification platform call failed.
    #[error("notification platform call failed")]
    Platform(#[source] windows::core::Error),
}

/// Load a toast's XML into a platform document.
fn document(toast: &Toast) -> Result<XmlDocument, NotifyError> {
    let doc = XmlDocument::new().map_err(NotifyError::Platform)?;
    doc.LoadXml(&HSTRING::from(toast.to_xml()))
        .map_err(NotifyError::LoadXml)?;
    Ok(doc)
}

/// Build an immediately deliverable notification from a toast.
pub fn notification(toast: &Toast) -> Result<ToastNotification, NotifyError> {
    let doc = document(toast)?;
    ToastNotification::CreateToastNotification(&doc).map_err(NotifyError::Platform)
}

/// Build a notification scheduled for `when`.
///
/// The timestamp is handed to the platform as-is; whether a time in the
/// past is deliverable is the platform's decision.
pub fn scheduled_notification(
    toast: &Toast,
    when: DateTime<Utc>,
) -> Result<ScheduledToastNotification, NotifyError> {
    let doc = document(toast)?;
    ScheduledToastNotification::CreateScheduledToastNotification(&doc, winrt_datetime(when))
        .map_err(NotifyError::Platform)
}

/// Show a toast right away under the given application id.
pub fn show(toast: &Toast, app_id: &str) -> Result<(), NotifyError> {
    let notification = notification(toast)?;
    let notifier = ToastNotificationManager::CreateToastNotifierWithId(&HSTRING::from(app_id))
        .map_err(NotifyError::Platform)?;
    notifier.Show(&notification).map_err(NotifyError::Platform)
}

/// Convert a UTC timestamp to WinRT ticks (100 ns units since 1601-01-01).
fn winrt_datetime(when: DateTime<Utc>) -> Foundation::DateTime {
    let ticks = (when.timestamp() + WINDOWS_EPOCH_OFFSET_SECS) * 10_000_000
        + i64::from(when.timestamp_subsec_nanos() / 100);
    Foundation::DateTime {
        UniversalTime: ticks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_unix_epoch_in_winrt_ticks() {
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        assert_eq!(winrt_datetime(epoch).UniversalTime, 116_444_736_000_000_000);
    }

    #[test]
    fn test_subsecond_precision_is_100ns() {
        let when = Utc.timestamp_opt(0, 1_500).unwrap();
        assert_eq!(
            winrt_datetime(when).UniversalTime,
            116_444_736_000_000_000 + 15
        );
    }
}
