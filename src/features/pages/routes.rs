use axum::{
    routing::{get, post},
    Router,
};

use crate::features::pages::handlers;
use crate::features::pages::view::PagesState;

pub fn routes(state: PagesState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/about", get(handlers::about))
        .route("/activities", get(handlers::activities))
        .route("/events", get(handlers::events))
        .route("/gallery", get(handlers::gallery))
        .route(
            "/contact",
            get(handlers::contact).post(handlers::submit_contact),
        )
        .route("/join", get(handlers::join).post(handlers::submit_join))
        .route("/auth", get(handlers::auth))
        .route("/auth/signin", post(handlers::sign_in))
        .route("/auth/signup", post(handlers::sign_up))
        .route("/logout", post(handlers::logout))
        .fallback(handlers::fallback)
        .with_state(state)
}
