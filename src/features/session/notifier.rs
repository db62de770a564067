//! Desktop notifications for phase transitions.

use notify_rust::Notification;

use super::effects::Notifier;

/// Best-effort notifier backed by the system notification service.
///
/// Failures (no daemon, permission denied) are logged and dropped; the
/// phase transition that requested the notification is never affected.
pub struct DesktopNotifier {
    enabled: bool,
}

impl DesktopNotifier {
    /// Create a notifier; a disabled one drops every request silently.
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&mut self, title: &str, body: &str) {
        if !self.enabled {
            return;
        }

        if let Err(e) = Notification::new()
            .summary(title)
            .body(body)
            .appname("lomodoro")
            .show()
        {
            log::warn!("desktop notification failed: {e}");
        }
    }
}
