use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::forms::FormPayload;
use crate::features::navigation::NavigationView;

/// Request DTO for sign-in
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SignInRequestDto {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl From<SignInRequestDto> for FormPayload {
    fn from(dto: SignInRequestDto) -> Self {
        let mut payload = FormPayload::default();
        payload.set_text("fullName", dto.full_name);
        payload.set_text("email", dto.email);
        payload.set_text("password", dto.password);
        payload
    }
}

/// Request DTO for account creation
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SignUpRequestDto {
    pub nom: String,
    pub prenom: String,
    pub code_massar: String,
    pub email: String,
    pub password: String,
}

impl From<SignUpRequestDto> for FormPayload {
    fn from(dto: SignUpRequestDto) -> Self {
        let mut payload = FormPayload::default();
        payload.set_text("nom", dto.nom);
        payload.set_text("prenom", dto.prenom);
        payload.set_text("codeMassar", dto.code_massar);
        payload.set_text("email", dto.email);
        payload.set_text("password", dto.password);
        payload
    }
}

/// Response DTO for logout: the navigation bar as it looks afterwards
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogoutResponseDto {
    pub navigation: NavigationView,
}
