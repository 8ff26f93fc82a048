use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers};
use crate::features::forms::services::BackendOutcome;
use crate::features::forms::{dtos as forms_dtos, handlers as forms_handlers};
use crate::features::navigation::{handlers as navigation_handlers, model as navigation_model};
use crate::features::notifications::{Notification, Severity};
use crate::features::site::{dtos as site_dtos, handlers as site_handlers, models as site_models};
use crate::shared::types::{ApiResponse, FieldError};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Forms
        forms_handlers::submit_contact,
        forms_handlers::submit_join,
        // Auth
        auth_handlers::sign_in,
        auth_handlers::sign_up,
        auth_handlers::logout,
        // Navigation
        navigation_handlers::get_navigation,
        // Site content
        site_handlers::get_home,
        site_handlers::get_about,
        site_handlers::list_activities,
        site_handlers::get_activity,
        site_handlers::get_events,
        site_handlers::list_albums,
        site_handlers::get_album,
        site_handlers::get_contact,
        site_handlers::get_join,
    ),
    components(
        schemas(
            // Shared
            FieldError,
            Notification,
            Severity,
            BackendOutcome,
            // Forms
            forms_dtos::ContactFormDto,
            forms_dtos::JoinFormDto,
            forms_dtos::SubmissionResponseDto,
            ApiResponse<forms_dtos::SubmissionResponseDto>,
            // Auth
            auth_dtos::SignInRequestDto,
            auth_dtos::SignUpRequestDto,
            auth_dtos::LogoutResponseDto,
            ApiResponse<auth_dtos::LogoutResponseDto>,
            // Navigation
            navigation_model::NavLinkView,
            navigation_model::AuthAction,
            navigation_model::NavigationView,
            ApiResponse<navigation_model::NavigationView>,
            // Site content
            site_models::Stat,
            site_models::Activity,
            site_models::UpcomingEvent,
            site_models::PastEvent,
            site_models::Album,
            site_models::ContactChannel,
            site_models::SocialLink,
            site_models::OfficeHours,
            site_models::ClubValue,
            site_models::Profile,
            site_models::MembershipFee,
            site_dtos::HomeResponseDto,
            site_dtos::AboutResponseDto,
            site_dtos::EventsResponseDto,
            site_dtos::AlbumDto,
            site_dtos::ContactResponseDto,
            site_dtos::JoinResponseDto,
            ApiResponse<site_dtos::HomeResponseDto>,
            ApiResponse<site_dtos::AboutResponseDto>,
            ApiResponse<Vec<site_models::Activity>>,
            ApiResponse<site_models::Activity>,
            ApiResponse<site_dtos::EventsResponseDto>,
            ApiResponse<Vec<site_dtos::AlbumDto>>,
            ApiResponse<site_dtos::AlbumDto>,
            ApiResponse<site_dtos::ContactResponseDto>,
            ApiResponse<site_dtos::JoinResponseDto>,
        )
    ),
    tags(
        (name = "forms", description = "Contact and membership forms"),
        (name = "auth", description = "Sign-in, sign-up and logout"),
        (name = "navigation", description = "Navigation bar state"),
        (name = "site", description = "Club content (public)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "CST Site API",
        version = "0.1.0",
        description = "API documentation for the Club Scientifique et Technologique site",
    )
)]
pub struct ApiDoc;

/// Adds the session token security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .description(Some(
                            "Session token issued by the authentication service, also read from the `cst_session` cookie",
                        ))
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
