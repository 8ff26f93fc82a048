#[cfg(test)]
use crate::features::forms::{LoggingBackend, SubmissionService};
#[cfg(test)]
use crate::features::notifications::{Notification, Notifier};
#[cfg(test)]
use crate::features::pages::PagesState;
#[cfg(test)]
use crate::shared::templates::TemplateRenderer;
#[cfg(test)]
use std::sync::{Arc, Mutex};

/// Notifier that keeps every notification for later assertions
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    issued: Mutex<Vec<Notification>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn titles(&self) -> Vec<String> {
        self.issued
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.title.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.issued.lock().unwrap().len()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.issued.lock().unwrap().push(notification.clone());
    }
}

/// Submission service over the logging backend, with its notifier exposed
#[cfg(test)]
pub fn submission_service() -> (Arc<SubmissionService>, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let service = Arc::new(SubmissionService::new(
        Arc::new(LoggingBackend),
        notifier.clone(),
    ));
    (service, notifier)
}

/// Page state rendering the real templates
#[cfg(test)]
pub fn pages_state() -> (PagesState, Arc<RecordingNotifier>) {
    let (service, notifier) = submission_service();
    let renderer = Arc::new(TemplateRenderer::from_dir("templates/pages"));
    (PagesState::new(renderer, service, "CST"), notifier)
}
