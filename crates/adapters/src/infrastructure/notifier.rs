//! Notification sink for headless hosts

use confdesk_ports::{Notification, NotificationKind, NotificationPort};

/// Writes every notification to the log instead of showing a toast.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationPort for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => {
                tracing::info!(text = %notification.message, "Notification")
            }
            NotificationKind::Error => {
                tracing::warn!(text = %notification.message, "Error notification")
            }
        }
    }
}
