//! Form submission routes

use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::forms::handlers;
use crate::features::forms::services::SubmissionService;

/// Create routes for the forms feature (public)
pub fn routes(service: Arc<SubmissionService>) -> Router {
    Router::new()
        .route("/api/forms/contact", post(handlers::submit_contact))
        .route("/api/forms/join", post(handlers::submit_join))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::submission_service;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        let (service, _) = submission_service();
        TestServer::new(routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_contact_accepted() {
        let response = server()
            .post("/api/forms/contact")
            .json(&json!({
                "name": "Al",
                "email": "a@b.com",
                "subject": "Hello",
                "message": "1234567890"
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["outcome"], "delivered");
        assert_eq!(body["data"]["notification"]["title"], "Message envoyé !");
    }

    #[tokio::test]
    async fn test_contact_short_subject_rejected() {
        let response = server()
            .post("/api/forms/contact")
            .json(&json!({
                "name": "Al",
                "email": "a@b.com",
                "subject": "Hi",
                "message": "1234567890"
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["errors"][0]["field"], "subject");
        assert_eq!(
            body["errors"][0]["message"],
            "Le sujet doit contenir au moins 5 caractères"
        );
    }

    #[tokio::test]
    async fn test_join_without_activities_rejected() {
        let response = server()
            .post("/api/forms/join")
            .json(&json!({
                "fullName": "Yasmine Benali",
                "codeMassar": "R130456789",
                "password": "secret123",
                "phone": "+212 619-099651",
                "activities": []
            }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["errors"][0]["field"], "activities");
        assert_eq!(body["message"], "Sélectionnez au moins une activité");
    }

    #[tokio::test]
    async fn test_join_accepted() {
        let response = server()
            .post("/api/forms/join")
            .json(&json!({
                "fullName": "Yasmine Benali",
                "codeMassar": "R130456789",
                "password": "secret123",
                "phone": "+212 619-099651",
                "activities": ["robotics", "chess"]
            }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["notification"]["title"], "Inscription envoyée !");
    }

    #[tokio::test]
    async fn test_empty_body_rejected_by_first_field() {
        let response = server().post("/api/forms/contact").json(&json!({})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["errors"][0]["field"], "name");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let response = server()
            .post("/api/forms/contact")
            .content_type("application/json")
            .text("{not json")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
