//! Submission boundary: validation, hand-off to the backend, notification.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::Result;
use crate::features::forms::models::{FormKind, FormPayload, FormSession};
use crate::features::forms::validator::ValidationError;
use crate::features::notifications::{Notification, Notifier};

/// What the receiving backend did with an accepted payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BackendOutcome {
    Delivered,
    /// Validation passed but nothing handles this submission yet
    NotImplemented,
}

/// Collaborator that receives validated payloads.
///
/// Only called after the payload was accepted by its schema.
#[async_trait]
pub trait SubmissionBackend: Send + Sync {
    async fn send_contact(&self, payload: &FormPayload) -> Result<BackendOutcome>;

    async fn submit_application(&self, payload: &FormPayload) -> Result<BackendOutcome>;

    async fn sign_in(&self, payload: &FormPayload) -> Result<BackendOutcome>;

    async fn sign_up(&self, payload: &FormPayload) -> Result<BackendOutcome>;
}

/// Backend that only writes accepted submissions to the log.
///
/// Account creation and login have no backing service and report
/// [`BackendOutcome::NotImplemented`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingBackend;

#[async_trait]
impl SubmissionBackend for LoggingBackend {
    async fn send_contact(&self, payload: &FormPayload) -> Result<BackendOutcome> {
        tracing::info!(
            name = payload.text("name").trim(),
            email = payload.text("email").trim(),
            subject = payload.text("subject").trim(),
            message_len = payload.text("message").trim().chars().count(),
            "Contact message received"
        );
        Ok(BackendOutcome::Delivered)
    }

    async fn submit_application(&self, payload: &FormPayload) -> Result<BackendOutcome> {
        tracing::info!(
            full_name = payload.text("fullName").trim(),
            code_massar = payload.text("codeMassar").trim(),
            activities = ?payload.selection("activities"),
            "Membership application received"
        );
        Ok(BackendOutcome::Delivered)
    }

    async fn sign_in(&self, payload: &FormPayload) -> Result<BackendOutcome> {
        tracing::warn!(
            email = payload.text("email").trim(),
            "Sign-in requested but no authentication backend is configured"
        );
        Ok(BackendOutcome::NotImplemented)
    }

    async fn sign_up(&self, payload: &FormPayload) -> Result<BackendOutcome> {
        tracing::warn!(
            email = payload.text("email").trim(),
            "Sign-up requested but no authentication backend is configured"
        );
        Ok(BackendOutcome::NotImplemented)
    }
}

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionReport {
    Accepted {
        outcome: BackendOutcome,
        notification: Notification,
    },
    Rejected {
        error: ValidationError,
        notification: Notification,
    },
}

impl SubmissionReport {
    pub fn notification(&self) -> &Notification {
        match self {
            SubmissionReport::Accepted { notification, .. }
            | SubmissionReport::Rejected { notification, .. } => notification,
        }
    }
}

pub struct SubmissionService {
    backend: Arc<dyn SubmissionBackend>,
    notifier: Arc<dyn Notifier>,
}

impl SubmissionService {
    pub fn new(backend: Arc<dyn SubmissionBackend>, notifier: Arc<dyn Notifier>) -> Self {
        Self { backend, notifier }
    }

    /// Submit the session's current payload.
    ///
    /// Rejected: failure notification, session untouched.
    /// Accepted: backend call, notification for its outcome, session reset.
    /// A backend error restores the payload and propagates.
    pub async fn submit(&self, session: &mut FormSession) -> Result<SubmissionReport> {
        let kind = session.kind();

        let payload = match session.submit() {
            Ok(payload) => payload,
            Err(error) => {
                tracing::debug!(
                    form = kind.as_str(),
                    field = %error.field,
                    "Submission rejected"
                );
                let notification = Notification::validation_failed(error.message.clone());
                self.notifier.notify(&notification);
                return Ok(SubmissionReport::Rejected {
                    error,
                    notification,
                });
            }
        };

        let outcome = match self.dispatch(kind, &payload).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(form = kind.as_str(), "Submission delivery failed: {}", e);
                session.restore(payload);
                return Err(e);
            }
        };

        let notification = match outcome {
            BackendOutcome::Delivered => kind.success_notification(),
            BackendOutcome::NotImplemented => kind.not_implemented_notification(),
        };
        self.notifier.notify(&notification);

        Ok(SubmissionReport::Accepted {
            outcome,
            notification,
        })
    }

    async fn dispatch(&self, kind: FormKind, payload: &FormPayload) -> Result<BackendOutcome> {
        match kind {
            FormKind::Contact => self.backend.send_contact(payload).await,
            FormKind::Join => self.backend.submit_application(payload).await,
            FormKind::SignIn => self.backend.sign_in(payload).await,
            FormKind::SignUp => self.backend.sign_up(payload).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::shared::test_helpers::RecordingNotifier;

    struct FailingBackend;

    #[async_trait]
    impl SubmissionBackend for FailingBackend {
        async fn send_contact(&self, _payload: &FormPayload) -> Result<BackendOutcome> {
            Err(AppError::ExternalServiceError("mail relay down".to_string()))
        }

        async fn submit_application(&self, _payload: &FormPayload) -> Result<BackendOutcome> {
            Err(AppError::ExternalServiceError("down".to_string()))
        }

        async fn sign_in(&self, _payload: &FormPayload) -> Result<BackendOutcome> {
            Err(AppError::ExternalServiceError("down".to_string()))
        }

        async fn sign_up(&self, _payload: &FormPayload) -> Result<BackendOutcome> {
            Err(AppError::ExternalServiceError("down".to_string()))
        }
    }

    fn contact_session(subject: &str) -> FormSession {
        let mut session = FormSession::new(FormKind::Contact);
        session.set_text("name", "Al");
        session.set_text("email", "a@b.com");
        session.set_text("subject", subject);
        session.set_text("message", "1234567890");
        session
    }

    fn service(notifier: Arc<RecordingNotifier>) -> SubmissionService {
        SubmissionService::new(Arc::new(LoggingBackend), notifier)
    }

    #[tokio::test]
    async fn test_accepted_contact_is_delivered_and_reset() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut session = contact_session("Hello");

        let report = service(notifier.clone()).submit(&mut session).await.unwrap();

        match report {
            SubmissionReport::Accepted {
                outcome,
                notification,
            } => {
                assert_eq!(outcome, BackendOutcome::Delivered);
                assert_eq!(notification.title, "Message envoyé !");
                assert!(!notification.is_destructive());
            }
            other => panic!("expected acceptance, got {:?}", other),
        }
        assert!(session.is_pristine());
        assert_eq!(notifier.titles(), vec!["Message envoyé !".to_string()]);
    }

    #[tokio::test]
    async fn test_rejected_contact_keeps_payload_and_notifies() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut session = contact_session("Hi");
        let before = session.payload().clone();

        let report = service(notifier.clone()).submit(&mut session).await.unwrap();

        match &report {
            SubmissionReport::Rejected { error, .. } => {
                assert_eq!(error.field, "subject");
                assert_eq!(
                    error.message,
                    "Le sujet doit contenir au moins 5 caractères"
                );
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert!(report.notification().is_destructive());
        assert_eq!(report.notification().title, "Erreur de validation");
        assert_eq!(session.payload(), &before);
        assert_eq!(notifier.len(), 1);
    }

    #[tokio::test]
    async fn test_sign_in_reports_not_implemented() {
        let notifier = Arc::new(RecordingNotifier::default());
        let mut session = FormSession::new(FormKind::SignIn);
        session.set_text("fullName", "Yasmine Benali");
        session.set_text("email", "yasmine@example.com");
        session.set_text("password", "secret123");

        let report = service(notifier).submit(&mut session).await.unwrap();

        assert!(matches!(
            report,
            SubmissionReport::Accepted {
                outcome: BackendOutcome::NotImplemented,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_backend_failure_restores_payload() {
        let notifier = Arc::new(RecordingNotifier::default());
        let service = SubmissionService::new(Arc::new(FailingBackend), notifier.clone());
        let mut session = contact_session("Hello");
        let before = session.payload().clone();

        let result = service.submit(&mut session).await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
        assert_eq!(session.payload(), &before);
        assert_eq!(notifier.len(), 0);
    }
}
