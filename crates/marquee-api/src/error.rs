//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps validator and store outcomes to HTTP status codes and the JSON
//! bodies of the API contract: `{"message": …}` for not-found and
//! transport problems, `{"error": {<field>: {kind, message}, …}}` for
//! validation failures. Handlers never build error responses themselves.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use marquee_core::FieldErrors;

/// Plain-message JSON body, used for not-found, bad-request, and
/// origin-rejection responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    /// Human-readable message.
    pub message: String,
}

/// Validation-failure JSON body: the full per-field report under `error`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationBody {
    /// The field-keyed violation mapping.
    pub error: FieldErrors,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No movie with the requested id (404).
    #[error("movie not found")]
    NotFound,

    /// The payload violated the movie schema (400). Carries the complete
    /// per-field report so the client sees every problem at once.
    #[error("validation failed: {0}")]
    Validation(#[from] FieldErrors),

    /// The request body could not be parsed as a JSON object (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The declared origin is not on the allow-list (403). Raised by the
    /// cross-origin gate before any route runs.
    #[error("origin not allowed")]
    OriginForbidden,
}

impl ApiError {
    /// Return the HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::OriginForbidden => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::NotFound => (
                status,
                Json(MessageBody {
                    message: "Movie not found".to_string(),
                }),
            )
                .into_response(),
            Self::Validation(errors) => {
                (status, Json(ValidationBody { error: errors })).into_response()
            }
            Self::BadRequest(message) => (status, Json(MessageBody { message })).into_response(),
            Self::OriginForbidden => (
                status,
                Json(MessageBody {
                    message: "Origin not allowed".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use marquee_core::{FieldError, FieldErrorKind};

    #[test]
    fn not_found_status_code() {
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_status_code() {
        let err = ApiError::Validation(FieldErrors::new());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn bad_request_status_code() {
        let err = ApiError::BadRequest("malformed JSON".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn origin_forbidden_status_code() {
        assert_eq!(ApiError::OriginForbidden.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn field_errors_convert_to_validation() {
        let mut errors = FieldErrors::new();
        errors.insert("year", FieldError::new(FieldErrorKind::OutOfRange, "nope"));
        let err = ApiError::from(errors);
        assert!(matches!(err, ApiError::Validation(_)));
    }

    /// Helper to extract status and JSON body from a response.
    async fn response_parts(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[tokio::test]
    async fn into_response_not_found_body() {
        let (status, body) = response_parts(ApiError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Movie not found");
    }

    #[tokio::test]
    async fn into_response_validation_body_carries_field_mapping() {
        let mut errors = FieldErrors::new();
        errors.insert(
            "poster",
            FieldError::new(FieldErrorKind::InvalidUrl, "poster must be a valid URL"),
        );
        let (status, body) = response_parts(ApiError::Validation(errors)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["poster"]["kind"], "invalid_url");
        assert_eq!(body["error"]["poster"]["message"], "poster must be a valid URL");
    }

    #[tokio::test]
    async fn into_response_bad_request_body() {
        let (status, body) =
            response_parts(ApiError::BadRequest("expected a JSON object".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "expected a JSON object");
    }

    #[tokio::test]
    async fn into_response_origin_forbidden_body() {
        let (status, body) = response_parts(ApiError::OriginForbidden).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["message"], "Origin not allowed");
    }
}
