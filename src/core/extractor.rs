use axum::{
    body::Body,
    extract::{
        rejection::{FormRejection, JsonRejection},
        FromRequest, FromRequestParts, Request,
    },
    http::{header, request::Parts},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;
use crate::features::auth::session::RequestSession;
use crate::shared::constants::SESSION_COOKIE_NAME;

/// Custom JSON extractor that provides consistent error responses
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err),
            JsonRejection::JsonSyntaxError(err) => format!("Invalid JSON syntax: {}", err),
            JsonRejection::MissingJsonContentType(err) => {
                format!("Missing JSON content type: {}", err)
            }
            _ => "Failed to parse JSON body".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}

/// Custom urlencoded form extractor that provides consistent error responses
pub struct AppForm<T>(pub T);

impl<T, S> FromRequest<S> for AppForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppFormRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Form::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppFormRejection(rejection)),
        }
    }
}

pub struct AppFormRejection(FormRejection);

impl IntoResponse for AppFormRejection {
    fn into_response(self) -> Response {
        let message = match self.0 {
            FormRejection::InvalidFormContentType(err) => {
                format!("Missing form content type: {}", err)
            }
            FormRejection::FailedToDeserializeForm(err) => format!("Invalid form data: {}", err),
            FormRejection::FailedToDeserializeFormBody(err) => {
                format!("Invalid form data: {}", err)
            }
            _ => "Failed to parse form body".to_string(),
        };

        AppError::BadRequest(message).into_response()
    }
}

impl<S> FromRequestParts<S> for RequestSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let bearer = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);

        let token = bearer.or_else(|| {
            parts
                .headers
                .get_all(header::COOKIE)
                .iter()
                .filter_map(|h| h.to_str().ok())
                .flat_map(|h| h.split(';'))
                .filter_map(|c| c.trim().split_once('='))
                .find(|(name, value)| *name == SESSION_COOKIE_NAME && !value.is_empty())
                .map(|(_, value)| value.to_string())
        });

        Ok(RequestSession::new(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::session::SessionProvider;
    use axum::http::Request as HttpRequest;

    async fn session_from(request: HttpRequest<()>) -> RequestSession {
        let (mut parts, _) = request.into_parts();
        RequestSession::from_request_parts(&mut parts, &())
            .await
            .unwrap()
    }

    fn form_request(content_type: &str, body: &'static str) -> HttpRequest<Body> {
        HttpRequest::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_form_keeps_repeated_keys_in_order() {
        let request = form_request(
            "application/x-www-form-urlencoded",
            "activities=chess&activities=robotics&fullName=Sara+El%20Idrissi&email=a%40b.com",
        );
        let AppForm(pairs) = AppForm::<Vec<(String, String)>>::from_request(request, &())
            .await
            .unwrap_or_else(|_| panic!("urlencoded body should be accepted"));
        assert_eq!(
            pairs,
            vec![
                ("activities".to_string(), "chess".to_string()),
                ("activities".to_string(), "robotics".to_string()),
                ("fullName".to_string(), "Sara El Idrissi".to_string()),
                ("email".to_string(), "a@b.com".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_form_rejects_json_body() {
        let request = form_request("application/json", r#"{"name":"Sara"}"#);
        let rejection = match AppForm::<Vec<(String, String)>>::from_request(request, &()).await {
            Ok(_) => panic!("json body should be rejected"),
            Err(rejection) => rejection,
        };
        let response = rejection.into_response();
        assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_session_from_bearer_header() {
        let request = HttpRequest::builder()
            .header(header::AUTHORIZATION, "Bearer abc123")
            .body(())
            .unwrap();
        assert!(session_from(request).await.has_session());
    }

    #[tokio::test]
    async fn test_session_from_cookie() {
        let request = HttpRequest::builder()
            .header(header::COOKIE, "theme=dark; cst_session=tok")
            .body(())
            .unwrap();
        assert!(session_from(request).await.has_session());
    }

    #[tokio::test]
    async fn test_no_session_without_token() {
        let request = HttpRequest::builder()
            .header(header::COOKIE, "cst_session=")
            .body(())
            .unwrap();
        assert!(!session_from(request).await.has_session());
    }
}
