//! # Movie Collection API
//!
//! CRUD over the in-memory movie collection.
//!
//! ## Endpoints
//!
//! - `GET /movies` — list, optionally filtered by `?genre=`
//! - `GET /movies/:id` — fetch one record
//! - `POST /movies` — validate and create
//! - `PATCH /movies/:id` — validate and merge a partial update
//! - `DELETE /movies/:id` — remove
//!
//! Write payloads go through the core validator before the store is
//! touched; a validation failure carries the complete per-field report.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{Map, Value};

use marquee_core::{validate_full, validate_partial, Movie, MovieId};

use crate::error::{ApiError, MessageBody};
use crate::extractors::extract_json;
use crate::state::AppState;

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive genre filter.
    pub genre: Option<String>,
}

/// Build the movies router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route(
            "/movies/:id",
            get(get_movie).patch(update_movie).delete(delete_movie),
        )
}

// ── Handlers ────────────────────────────────────────────────────────

/// GET /movies — List the collection, optionally filtered by genre.
#[utoipa::path(
    get,
    path = "/movies",
    params(("genre" = Option<String>, Query, description = "Case-insensitive genre filter")),
    responses(
        (status = 200, description = "Matching movies, in collection order (empty array when nothing matches)", body = Vec<Movie>),
    ),
    tag = "movies"
)]
async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Movie>> {
    // A blank `?genre=` is no filter at all.
    let genre = query.genre.as_deref().filter(|genre| !genre.is_empty());
    Json(state.movies.list(genre))
}

/// GET /movies/:id — Fetch a single movie.
#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(("id" = String, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie found", body = Movie),
        (status = 404, description = "No movie with that id", body = MessageBody),
    ),
    tag = "movies"
)]
async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let id = MovieId::parse(&id).ok_or(ApiError::NotFound)?;
    state.movies.get(&id).map(Json).ok_or(ApiError::NotFound)
}

/// POST /movies — Validate a candidate and add it to the collection.
#[utoipa::path(
    post,
    path = "/movies",
    request_body = Object,
    responses(
        (status = 201, description = "Movie created, id assigned", body = Movie),
        (status = 400, description = "Schema violations, one entry per field", body = crate::error::ValidationBody),
    ),
    tag = "movies"
)]
async fn create_movie(
    State(state): State<AppState>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let candidate = extract_json(body)?;
    let draft = validate_full(&candidate)?;
    let movie = state.movies.create(draft);
    Ok((StatusCode::CREATED, Json(movie)))
}

/// PATCH /movies/:id — Validate a partial candidate and merge it.
///
/// Validation runs before the lookup, so a bad payload is a 400 even when
/// the id does not exist.
#[utoipa::path(
    patch,
    path = "/movies/{id}",
    params(("id" = String, Path, description = "Movie ID")),
    request_body = Object,
    responses(
        (status = 200, description = "Merged movie", body = Movie),
        (status = 400, description = "Schema violations, one entry per field", body = crate::error::ValidationBody),
        (status = 404, description = "No movie with that id", body = MessageBody),
    ),
    tag = "movies"
)]
async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<Movie>, ApiError> {
    let candidate = extract_json(body)?;
    let patch = validate_partial(&candidate)?;
    let id = MovieId::parse(&id).ok_or(ApiError::NotFound)?;
    state
        .movies
        .patch(&id, patch)
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// DELETE /movies/:id — Remove a movie from the collection.
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(("id" = String, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie removed", body = MessageBody),
        (status = 404, description = "No movie with that id", body = MessageBody),
    ),
    tag = "movies"
)]
async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let id = MovieId::parse(&id).ok_or(ApiError::NotFound)?;
    state
        .movies
        .remove(&id)
        .map(|_| {
            Json(MessageBody {
                message: "Movie deleted".to_string(),
            })
        })
        .ok_or(ApiError::NotFound)
}
