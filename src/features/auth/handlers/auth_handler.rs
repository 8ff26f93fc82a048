use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{LogoutResponseDto, SignInRequestDto, SignUpRequestDto};
use crate::features::auth::session::{RequestSession, SessionProvider};
use crate::features::forms::dtos::SubmissionResponseDto;
use crate::features::forms::handlers::{form_handler::SubmissionResponse, submit_json};
use crate::features::forms::{FormKind, SubmissionService};
use crate::features::navigation::NavBar;
use crate::shared::types::ApiResponse;

/// Sign in to an existing account
///
/// Validation runs in full; the login itself has no backend yet and answers
/// `202` with outcome `not_implemented`.
#[utoipa::path(
    post,
    path = "/api/auth/signin",
    request_body = SignInRequestDto,
    responses(
        (status = 202, description = "Accepted, login not implemented", body = ApiResponse<SubmissionResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "auth"
)]
pub async fn sign_in(
    State(service): State<Arc<SubmissionService>>,
    AppJson(dto): AppJson<SignInRequestDto>,
) -> Result<SubmissionResponse> {
    submit_json(&service, FormKind::SignIn, dto.into()).await
}

/// Create an account
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    request_body = SignUpRequestDto,
    responses(
        (status = 202, description = "Accepted, account creation not implemented", body = ApiResponse<SubmissionResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "auth"
)]
pub async fn sign_up(
    State(service): State<Arc<SubmissionService>>,
    AppJson(dto): AppJson<SignUpRequestDto>,
) -> Result<SubmissionResponse> {
    submit_json(&service, FormKind::SignUp, dto.into()).await
}

/// Drop the current session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = ApiResponse<LogoutResponseDto>)
    ),
    tag = "auth",
    security((), ("session_token" = []))
)]
pub async fn logout(
    mut session: RequestSession,
) -> Result<(HeaderMap, Json<ApiResponse<LogoutResponseDto>>)> {
    session.logout();

    let mut headers = HeaderMap::new();
    headers.insert(header::SET_COOKIE, RequestSession::clear_cookie());

    let navigation = NavBar::default().view("/", &session);
    Ok((
        headers,
        Json(ApiResponse::success(
            Some(LogoutResponseDto { navigation }),
            Some("Déconnexion réussie".to_string()),
        )),
    ))
}
