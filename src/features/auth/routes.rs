use crate::features::auth::handlers;
use crate::features::forms::SubmissionService;
use axum::{routing::post, Router};
use std::sync::Arc;

/// Public auth routes (no authentication required)
pub fn routes(service: Arc<SubmissionService>) -> Router {
    Router::new()
        .route("/api/auth/signin", post(handlers::sign_in))
        .route("/api/auth/signup", post(handlers::sign_up))
        .route("/api/auth/logout", post(handlers::logout))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::submission_service;
    use axum::http::{header, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        let (service, _) = submission_service();
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_sign_in_is_not_implemented_after_validation() {
        let response = server()
            .post("/api/auth/signin")
            .json(&json!({
                "fullName": "Yasmine Benali",
                "email": "yasmine@example.com",
                "password": "secret123"
            }))
            .await;

        response.assert_status(StatusCode::ACCEPTED);
        let body: Value = response.json();
        assert_eq!(body["data"]["outcome"], "not_implemented");
    }

    #[tokio::test]
    async fn test_sign_in_validation_runs_first() {
        let response = server()
            .post("/api/auth/signin")
            .json(&json!({
                "fullName": "Yasmine Benali",
                "email": "yasmine",
                "password": "secret123"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["errors"][0]["field"], "email");
        assert_eq!(body["message"], "Email invalide");
    }

    #[tokio::test]
    async fn test_sign_up_is_not_implemented_after_validation() {
        let response = server()
            .post("/api/auth/signup")
            .json(&json!({
                "nom": "Benali",
                "prenom": "Yasmine",
                "codeMassar": "R130456789",
                "email": "yasmine@example.com",
                "password": "secret123"
            }))
            .await;

        response.assert_status(StatusCode::ACCEPTED);
        let body: Value = response.json();
        assert_eq!(body["data"]["outcome"], "not_implemented");
        assert_eq!(body["data"]["notification"]["severity"], "default");
    }

    #[tokio::test]
    async fn test_logout_clears_cookie_and_shows_login() {
        let response = server()
            .post("/api/auth/logout")
            .add_header(header::COOKIE, HeaderValue::from_static("cst_session=abc"))
            .await;

        response.assert_status_ok();
        let cookie = response.headers().get(header::SET_COOKIE).unwrap();
        assert!(cookie.to_str().unwrap().contains("Max-Age=0"));
        let body: Value = response.json();
        assert_eq!(body["data"]["navigation"]["authAction"], "login");
    }
}
