use axum::{routing::get, Router};

use crate::features::navigation::handlers;

pub fn routes() -> Router {
    Router::new().route("/api/navigation", get(handlers::get_navigation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderValue};
    use axum_test::TestServer;
    use serde_json::Value;

    #[tokio::test]
    async fn test_anonymous_navigation() {
        let server = TestServer::new(routes()).unwrap();
        let response = server
            .get("/api/navigation")
            .add_query_param("path", "/events")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["authAction"], "login");
        assert_eq!(body["data"]["open"], false);
        assert_eq!(body["data"]["links"][4]["path"], "/events");
        assert_eq!(body["data"]["links"][4]["active"], true);
    }

    #[tokio::test]
    async fn test_navigation_with_session_cookie() {
        let server = TestServer::new(routes()).unwrap();
        let response = server
            .get("/api/navigation")
            .add_query_param("menu", "open")
            .add_header(header::COOKIE, HeaderValue::from_static("cst_session=abc"))
            .await;

        let body: Value = response.json();
        assert_eq!(body["data"]["authAction"], "logout");
        assert_eq!(body["data"]["open"], true);
        assert_eq!(body["data"]["links"][0]["active"], true);
    }
}
