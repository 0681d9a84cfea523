//! Terminal response encoding for every rejection and operation failure.
//!
//! One variant per outcome in the error taxonomy; each maps
//! deterministically to a status code. 401 always carries the
//! `WWW-Authenticate: Basic` challenge. 400 and 500 carry a JSON body with
//! an `error` field; the remaining client rejections are header-only, and
//! internal messages are logged but never returned to the client.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use shop_core::Rejection;
use shop_store::StoreError;

/// Application-level error type implementing [`IntoResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Missing or invalid credentials (401 + challenge). Retryable with
    /// better credentials; every other rejection is terminal.
    #[error("authentication required")]
    Unauthenticated,

    /// Valid identity, insufficient role or ownership (403).
    #[error("forbidden")]
    Forbidden,

    /// Unknown route, nonexistent instance, or an instance invisible to
    /// the caller (404) — collapsed deliberately so existence is never
    /// leaked across ownership boundaries.
    #[error("not found")]
    NotFound,

    /// Known route, method outside its configured set (405).
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Caller does not accept a JSON response (406).
    #[error("not acceptable")]
    NotAcceptable,

    /// Malformed body, failed validation, or disallowed self-modification
    /// (400).
    #[error("{0}")]
    BadRequest(String),

    /// Unexpected failure (500). The message is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthenticated => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Basic")],
            )
                .into_response(),
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            AppError::Internal(ref message) => {
                tracing::error!(error = %message, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
            other => other.status().into_response(),
        }
    }
}

impl From<Rejection> for AppError {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::Unauthenticated => AppError::Unauthenticated,
            Rejection::Forbidden => AppError::Forbidden,
            Rejection::NotFound => AppError::NotFound,
            Rejection::MethodNotAllowed => AppError::MethodNotAllowed,
            Rejection::NotAcceptable => AppError::NotAcceptable,
            Rejection::BadRequest(message) => AppError::BadRequest(message),
        }
    }
}

/// Store failures surface as bad-request with the validation message as
/// the `error` field.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn parts(err: AppError) -> (StatusCode, Option<serde_json::Value>, Response) {
        let response = err.into_response();
        let status = response.status();
        let (head, body) = response.into_parts();
        let bytes = body.collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).ok();
        (status, json, Response::from_parts(head, axum::body::Body::empty()))
    }

    #[tokio::test]
    async fn unauthenticated_carries_the_basic_challenge() {
        let (status, body, response) = parts(AppError::Unauthenticated).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Basic"
        );
        assert!(body.is_none());
    }

    #[tokio::test]
    async fn bad_request_carries_the_message() {
        let (status, body, _) = parts(AppError::BadRequest("price must be positive".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.unwrap()["error"], "price must be positive");
    }

    #[tokio::test]
    async fn internal_hides_the_message() {
        let (status, body, _) = parts(AppError::Internal("store exploded".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body = body.unwrap();
        assert_eq!(body["error"], "Internal server error");
        assert!(!body.to_string().contains("exploded"));
    }

    #[tokio::test]
    async fn client_rejections_are_header_only() {
        for (err, expected) in [
            (AppError::Forbidden, StatusCode::FORBIDDEN),
            (AppError::NotFound, StatusCode::NOT_FOUND),
            (AppError::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED),
            (AppError::NotAcceptable, StatusCode::NOT_ACCEPTABLE),
        ] {
            let (status, body, _) = parts(err).await;
            assert_eq!(status, expected);
            assert!(body.is_none());
        }
    }

    #[test]
    fn rejections_and_store_errors_convert() {
        assert_eq!(AppError::from(Rejection::Forbidden), AppError::Forbidden);
        assert_eq!(
            AppError::from(StoreError::DuplicateEmail),
            AppError::BadRequest("email already in use".to_string())
        );
    }
}
