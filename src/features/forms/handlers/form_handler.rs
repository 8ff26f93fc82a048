//! JSON submission endpoints for the contact and join forms

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::forms::dtos::{accepted, ContactFormDto, JoinFormDto, SubmissionResponseDto};
use crate::features::forms::models::{FormKind, FormPayload, FormSession};
use crate::features::forms::services::{BackendOutcome, SubmissionService};
use crate::shared::types::ApiResponse;

pub type SubmissionResponse = (StatusCode, Json<ApiResponse<SubmissionResponseDto>>);

/// Validate and submit a payload, mapping the backend outcome to a status code
pub async fn submit_json(
    service: &SubmissionService,
    kind: FormKind,
    payload: FormPayload,
) -> Result<SubmissionResponse> {
    let mut session = FormSession::with_payload(kind, payload);
    let dto = accepted(service.submit(&mut session).await?)?;

    let status = match dto.outcome {
        BackendOutcome::Delivered => StatusCode::OK,
        BackendOutcome::NotImplemented => StatusCode::ACCEPTED,
    };
    let message = dto.notification.title.clone();
    Ok((status, Json(ApiResponse::success(Some(dto), Some(message)))))
}

/// Send a message to the club
#[utoipa::path(
    post,
    path = "/api/forms/contact",
    request_body = ContactFormDto,
    responses(
        (status = 200, description = "Message accepted", body = ApiResponse<SubmissionResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "forms"
)]
pub async fn submit_contact(
    State(service): State<Arc<SubmissionService>>,
    AppJson(dto): AppJson<ContactFormDto>,
) -> Result<SubmissionResponse> {
    submit_json(&service, FormKind::Contact, dto.into()).await
}

/// Apply for club membership
#[utoipa::path(
    post,
    path = "/api/forms/join",
    request_body = JoinFormDto,
    responses(
        (status = 200, description = "Application accepted", body = ApiResponse<SubmissionResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "forms"
)]
pub async fn submit_join(
    State(service): State<Arc<SubmissionService>>,
    AppJson(dto): AppJson<JoinFormDto>,
) -> Result<SubmissionResponse> {
    submit_json(&service, FormKind::Join, dto.into()).await
}
