//! # marquee-api — Axum Transport for the Movie Catalog
//!
//! Exposes the movie collection over HTTP. Every write payload goes
//! through the `marquee-core` validator before the store is touched, and
//! every request passes the cross-origin gate before reaching a route.
//!
//! ## API Surface
//!
//! | Route                  | Method | Behavior                          |
//! |------------------------|--------|-----------------------------------|
//! | `/movies`              | GET    | List, optional `?genre=` filter   |
//! | `/movies`              | POST   | Validate + create (201)           |
//! | `/movies/:id`          | GET    | Fetch one (404 when absent)       |
//! | `/movies/:id`          | PATCH  | Validate + merge (400/404)        |
//! | `/movies/:id`          | DELETE | Remove (404 when absent)          |
//! | `/openapi.json`        | GET    | Generated OpenAPI spec            |
//! | `/health/liveness`     | GET    | Process liveness probe            |
//! | `/health/readiness`    | GET    | Readiness probe                   |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CORS gate → Handler
//! ```
//!
//! Health probes are mounted outside the gate so orchestration probes
//! (which send no Origin header anyway) never depend on origin policy.

pub mod cors;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let allowed_origins = state.config.allowed_origins.clone();

    let api = Router::new()
        .merge(routes::movies::router())
        .merge(openapi::router())
        .layer(from_fn(cors::cors_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(axum::Extension(allowed_origins))
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
