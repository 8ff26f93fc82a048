use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::Result;
use crate::features::forms::models::FormPayload;
use crate::features::forms::services::{BackendOutcome, SubmissionReport};
use crate::features::notifications::Notification;

/// Request DTO for the contact form
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactFormDto {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<ContactFormDto> for FormPayload {
    fn from(dto: ContactFormDto) -> Self {
        let mut payload = FormPayload::default();
        payload.set_text("name", dto.name);
        payload.set_text("email", dto.email);
        payload.set_text("subject", dto.subject);
        payload.set_text("message", dto.message);
        payload
    }
}

/// Request DTO for the membership application
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct JoinFormDto {
    pub full_name: String,
    pub code_massar: String,
    pub password: String,
    pub phone: String,
    /// Activity identifiers: `chess`, `innovation`, `robotics`
    pub activities: Vec<String>,
}

impl From<JoinFormDto> for FormPayload {
    fn from(dto: JoinFormDto) -> Self {
        let mut payload = FormPayload::default();
        payload.set_text("fullName", dto.full_name);
        payload.set_text("codeMassar", dto.code_massar);
        payload.set_text("password", dto.password);
        payload.set_text("phone", dto.phone);
        payload.set_selection("activities", dto.activities);
        payload
    }
}

/// Response DTO for an accepted submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponseDto {
    pub outcome: BackendOutcome,
    pub notification: Notification,
}

impl SubmissionResponseDto {
    pub fn new(outcome: BackendOutcome, notification: Notification) -> Self {
        Self {
            outcome,
            notification,
        }
    }
}

/// Accepted half of a report; rejections are turned into errors by the caller
pub fn accepted(report: SubmissionReport) -> Result<SubmissionResponseDto> {
    match report {
        SubmissionReport::Accepted {
            outcome,
            notification,
        } => Ok(SubmissionResponseDto::new(outcome, notification)),
        SubmissionReport::Rejected { error, .. } => Err(error.into()),
    }
}
