use axum::{extract::Path, Json};

use crate::core::error::{AppError, Result};
use crate::features::site::dtos::{
    AboutResponseDto, AlbumDto, ContactResponseDto, EventsResponseDto, HomeResponseDto,
    JoinResponseDto,
};
use crate::features::site::models::{self, Activity};
use crate::shared::types::ApiResponse;

/// Landing page content
#[utoipa::path(
    get,
    path = "/api/site/home",
    responses(
        (status = 200, description = "Hero, stats and activity teasers", body = ApiResponse<HomeResponseDto>)
    ),
    tag = "site"
)]
pub async fn get_home() -> Result<Json<ApiResponse<HomeResponseDto>>> {
    Ok(Json(ApiResponse::success(Some(HomeResponseDto::load()), None)))
}

#[utoipa::path(
    get,
    path = "/api/site/about",
    responses(
        (status = 200, description = "Mission, vision, values and history", body = ApiResponse<AboutResponseDto>)
    ),
    tag = "site"
)]
pub async fn get_about() -> Result<Json<ApiResponse<AboutResponseDto>>> {
    Ok(Json(ApiResponse::success(Some(AboutResponseDto::load()), None)))
}

#[utoipa::path(
    get,
    path = "/api/site/activities",
    responses(
        (status = 200, description = "Club activities", body = ApiResponse<Vec<Activity>>)
    ),
    tag = "site"
)]
pub async fn list_activities() -> Result<Json<ApiResponse<Vec<Activity>>>> {
    Ok(Json(ApiResponse::success(
        Some(models::ACTIVITIES.to_vec()),
        None,
    )))
}

/// Get one activity by its identifier
#[utoipa::path(
    get,
    path = "/api/site/activities/{id}",
    params(
        ("id" = String, Path, description = "Activity identifier (robotics, chess, innovation)")
    ),
    responses(
        (status = 200, description = "Activity found", body = ApiResponse<Activity>),
        (status = 404, description = "Unknown activity")
    ),
    tag = "site"
)]
pub async fn get_activity(Path(id): Path<String>) -> Result<Json<ApiResponse<Activity>>> {
    let activity = models::activity(&id)
        .ok_or_else(|| AppError::NotFound(format!("Activity '{}' not found", id)))?;
    Ok(Json(ApiResponse::success(Some(*activity), None)))
}

#[utoipa::path(
    get,
    path = "/api/site/events",
    responses(
        (status = 200, description = "Upcoming and past events", body = ApiResponse<EventsResponseDto>)
    ),
    tag = "site"
)]
pub async fn get_events() -> Result<Json<ApiResponse<EventsResponseDto>>> {
    Ok(Json(ApiResponse::success(Some(EventsResponseDto::load()), None)))
}

#[utoipa::path(
    get,
    path = "/api/site/gallery",
    responses(
        (status = 200, description = "Photo albums", body = ApiResponse<Vec<AlbumDto>>)
    ),
    tag = "site"
)]
pub async fn list_albums() -> Result<Json<ApiResponse<Vec<AlbumDto>>>> {
    Ok(Json(ApiResponse::success(Some(AlbumDto::all()), None)))
}

#[utoipa::path(
    get,
    path = "/api/site/gallery/{index}",
    params(
        ("index" = usize, Path, description = "Album position in the gallery")
    ),
    responses(
        (status = 200, description = "Album found", body = ApiResponse<AlbumDto>),
        (status = 404, description = "Unknown album")
    ),
    tag = "site"
)]
pub async fn get_album(Path(index): Path<usize>) -> Result<Json<ApiResponse<AlbumDto>>> {
    let album = models::album(index)
        .ok_or_else(|| AppError::NotFound(format!("Album {} not found", index)))?;
    Ok(Json(ApiResponse::success(
        Some(AlbumDto::new(index, *album)),
        None,
    )))
}

#[utoipa::path(
    get,
    path = "/api/site/contact",
    responses(
        (status = 200, description = "Contact channels and office hours", body = ApiResponse<ContactResponseDto>)
    ),
    tag = "site"
)]
pub async fn get_contact() -> Result<Json<ApiResponse<ContactResponseDto>>> {
    Ok(Json(ApiResponse::success(
        Some(ContactResponseDto::load()),
        None,
    )))
}

#[utoipa::path(
    get,
    path = "/api/site/join",
    responses(
        (status = 200, description = "Membership benefits and fee", body = ApiResponse<JoinResponseDto>)
    ),
    tag = "site"
)]
pub async fn get_join() -> Result<Json<ApiResponse<JoinResponseDto>>> {
    Ok(Json(ApiResponse::success(Some(JoinResponseDto::load()), None)))
}
