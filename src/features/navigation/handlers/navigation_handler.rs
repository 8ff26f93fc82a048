use axum::{extract::Query, Json};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::core::error::Result;
use crate::features::auth::session::RequestSession;
use crate::features::navigation::model::{NavBar, NavigationView};
use crate::shared::types::ApiResponse;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct NavigationQuery {
    /// Current route (default: `/`)
    pub path: Option<String>,
    /// `open` to render the menu expanded
    pub menu: Option<String>,
}

impl NavigationQuery {
    pub fn menu_open(&self) -> bool {
        self.menu.as_deref() == Some("open")
    }
}

/// Navigation bar for the caller's session
#[utoipa::path(
    get,
    path = "/api/navigation",
    params(NavigationQuery),
    responses(
        (status = 200, description = "Navigation bar state", body = ApiResponse<NavigationView>)
    ),
    tag = "navigation",
    security((), ("session_token" = []))
)]
pub async fn get_navigation(
    session: RequestSession,
    Query(query): Query<NavigationQuery>,
) -> Result<Json<ApiResponse<NavigationView>>> {
    let path = query.path.as_deref().unwrap_or("/");
    let view = NavBar::new(query.menu_open()).view(path, &session);
    Ok(Json(ApiResponse::success(Some(view), None)))
}
