//! # Cross-Origin Gate
//!
//! A fixed allow-list of exact origin strings, evaluated as a pure
//! predicate before any route runs:
//!
//! - requests with no `Origin` header (same-origin, curl, server-to-server)
//!   always pass;
//! - an allow-listed origin passes and is echoed back in
//!   `Access-Control-Allow-Origin` (plus `Vary: Origin`, since the response
//!   depends on the requester);
//! - any other origin is rejected with 403 before reaching the routes.
//!
//! `OPTIONS` preflight from an allowed browser origin is answered directly
//! with 204 and the permitted methods/headers.

use axum::extract::Request;
use axum::http::header::{HeaderValue, ORIGIN, VARY};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;

/// Origins the default allow-list accepts.
const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://127.0.0.1:5500",
    "http://localhost:1234",
    "http://movies.com",
];

/// Environment variable overriding the allow-list (comma-separated).
const ALLOWED_ORIGINS_VAR: &str = "MARQUEE_ALLOWED_ORIGINS";

/// The fixed allow-list of exact origin strings.
#[derive(Debug, Clone)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    /// Create an allow-list from explicit origins.
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    /// Load the allow-list from `MARQUEE_ALLOWED_ORIGINS`
    /// (comma-separated), falling back to the built-in defaults.
    pub fn from_env() -> Self {
        match std::env::var(ALLOWED_ORIGINS_VAR) {
            Ok(raw) => Self::new(parse_origin_list(&raw)),
            Err(_) => Self::default(),
        }
    }

    /// The origin-policy predicate.
    ///
    /// `None` — no declared origin — is always allowed. A declared origin
    /// is allowed only on an exact string match against the list.
    pub fn is_allowed(&self, origin: Option<&str>) -> bool {
        match origin {
            None => true,
            Some(origin) => self.0.iter().any(|allowed| allowed == origin),
        }
    }
}

impl Default for AllowedOrigins {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect())
    }
}

/// Split a comma-separated origin list, trimming whitespace and dropping
/// empty entries.
fn parse_origin_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

/// Axum middleware enforcing the origin policy.
///
/// Reads the [`AllowedOrigins`] extension layered by `app()`; a router
/// assembled without one falls back to the default allow-list.
pub async fn cors_middleware(request: Request, next: Next) -> Response {
    let allowed = request
        .extensions()
        .get::<AllowedOrigins>()
        .cloned()
        .unwrap_or_default();

    let origin = request
        .headers()
        .get(ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    if !allowed.is_allowed(origin.as_deref()) {
        return ApiError::OriginForbidden.into_response();
    }

    if request.method() == Method::OPTIONS {
        if let Some(origin) = origin {
            return preflight_response(&origin);
        }
    }

    let mut response = next.run(request).await;
    if let Some(origin) = origin {
        append_cors_headers(response.headers_mut(), &origin);
    }
    response
}

/// Answer a preflight from an allowed origin.
fn preflight_response(origin: &str) -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    let headers = response.headers_mut();
    append_cors_headers(headers, origin);
    headers.insert(
        "access-control-allow-methods",
        HeaderValue::from_static("GET, POST, PATCH, DELETE, OPTIONS"),
    );
    headers.insert(
        "access-control-allow-headers",
        HeaderValue::from_static("content-type"),
    );
    response
}

/// Echo the allowed origin and mark the response as origin-dependent.
fn append_cors_headers(headers: &mut axum::http::HeaderMap, origin: &str) {
    // The origin string came out of a header, so it round-trips; skip the
    // echo rather than panic on the pathological case.
    if let Ok(value) = HeaderValue::from_str(origin) {
        headers.insert("access-control-allow-origin", value);
        headers.insert(VARY, HeaderValue::from_static("Origin"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_origin_is_always_allowed() {
        assert!(AllowedOrigins::default().is_allowed(None));
        assert!(AllowedOrigins::new(vec![]).is_allowed(None));
    }

    #[test]
    fn listed_origins_are_allowed() {
        let allowed = AllowedOrigins::default();
        assert!(allowed.is_allowed(Some("http://127.0.0.1:5500")));
        assert!(allowed.is_allowed(Some("http://localhost:1234")));
        assert!(allowed.is_allowed(Some("http://movies.com")));
    }

    #[test]
    fn unlisted_origins_are_rejected() {
        let allowed = AllowedOrigins::default();
        assert!(!allowed.is_allowed(Some("http://evil.example")));
        assert!(!allowed.is_allowed(Some("https://movies.com")));
        assert!(!allowed.is_allowed(Some("")));
    }

    #[test]
    fn matching_is_exact_not_prefix() {
        let allowed = AllowedOrigins::new(vec!["http://movies.com".to_string()]);
        assert!(!allowed.is_allowed(Some("http://movies.com.evil.example")));
        assert!(!allowed.is_allowed(Some("http://movies.com/path")));
    }

    #[test]
    fn parse_origin_list_trims_and_drops_empties() {
        let parsed = parse_origin_list(" http://a.example , http://b.example ,, ");
        assert_eq!(parsed, vec!["http://a.example", "http://b.example"]);
    }

    #[test]
    fn parse_origin_list_of_empty_string_is_empty() {
        assert!(parse_origin_list("").is_empty());
    }
}
