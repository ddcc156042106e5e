//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single spec served at
//! `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Marquee API",
        version = "0.1.0",
        description = "In-memory movie catalog: list/filter, fetch, create, patch, and delete movie records behind a schema validator and an exact-origin CORS gate.",
        license(name = "MIT")
    ),
    paths(
        crate::routes::movies::list_movies,
        crate::routes::movies::get_movie,
        crate::routes::movies::create_movie,
        crate::routes::movies::update_movie,
        crate::routes::movies::delete_movie,
    ),
    components(schemas(
        marquee_core::Movie,
        marquee_core::MovieId,
        marquee_core::Genre,
        marquee_core::FieldErrors,
        marquee_core::FieldError,
        marquee_core::FieldErrorKind,
        crate::error::MessageBody,
        crate::error::ValidationBody,
    )),
    tags(
        (name = "movies", description = "Movie collection — filtering, lookup, and mutation"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
