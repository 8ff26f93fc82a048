use axum::{routing::get, Router};

use crate::features::site::handlers;

pub fn routes() -> Router {
    Router::new()
        .route("/api/site/home", get(handlers::get_home))
        .route("/api/site/about", get(handlers::get_about))
        .route("/api/site/activities", get(handlers::list_activities))
        .route("/api/site/activities/{id}", get(handlers::get_activity))
        .route("/api/site/events", get(handlers::get_events))
        .route("/api/site/gallery", get(handlers::list_albums))
        .route("/api/site/gallery/{index}", get(handlers::get_album))
        .route("/api/site/contact", get(handlers::get_contact))
        .route("/api/site/join", get(handlers::get_join))
}
