//! # Body Extraction
//!
//! Write handlers take request bodies as untyped JSON objects so that the
//! validator — not serde — decides what a schema violation looks like.
//! This helper maps the transport-level failure (unparseable body, or a
//! body that is not a JSON object) to [`ApiError::BadRequest`]; everything
//! field-level is the validator's business.

use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::error::ApiError;

/// Extract a JSON body, mapping deserialization rejections to
/// [`ApiError::BadRequest`].
///
/// Handlers use:
/// ```ignore
/// async fn handler(body: Result<Json<Map<String, Value>>, JsonRejection>) -> Result<..., ApiError> {
///     let candidate = extract_json(body)?;
///     // validate, then touch the store...
/// }
/// ```
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    result
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}
