//! Notification layer: transient messages shown after a form submission.

pub mod model;
pub mod notifier;

pub use model::{Notification, Severity};
pub use notifier::{Notifier, TracingNotifier};
