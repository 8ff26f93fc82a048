use super::model::{Notification, Severity};

/// Fire-and-forget sink for user-facing notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Notifier that records every notification in the service log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.severity {
            Severity::Default => tracing::info!(
                title = %notification.title,
                description = %notification.description,
                "Notification issued"
            ),
            Severity::Destructive => tracing::warn!(
                title = %notification.title,
                description = %notification.description,
                "Notification issued"
            ),
        }
    }
}
