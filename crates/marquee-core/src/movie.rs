//! # Movie Records
//!
//! The canonical movie record and its write-side shapes:
//!
//! - [`Movie`] — a stored record, always schema-valid, id assigned by the
//!   store at creation time and immutable afterwards.
//! - [`MovieDraft`] — a fully validated record without an id; the only
//!   input `create` accepts.
//! - [`MoviePatch`] — a validated field-by-field patch; the only input
//!   `patch` accepts. The id is not a patchable field.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::genre::Genre;

/// The rate assigned when a create payload omits `rate`.
pub const DEFAULT_RATE: f64 = 5.0;

/// A unique identifier for a movie record.
///
/// Random (UUID v4) by construction, so a fresh id collides with an
/// existing one with negligible probability. Serializes as the plain
/// string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = String)]
pub struct MovieId(Uuid);

impl MovieId {
    /// Create a new random movie identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a movie identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Parse an identifier from its string form.
    ///
    /// Returns `None` for anything that is not a well-formed UUID. Such a
    /// string can never name a stored record, so callers treat `None` as
    /// not-found rather than as a malformed request.
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MovieId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A movie record as stored in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    /// Unique identifier, assigned by the store at creation time.
    pub id: MovieId,
    /// Title, non-empty.
    pub title: String,
    /// Release year, within `[1900, 2024]`.
    pub year: i32,
    /// Director.
    pub director: String,
    /// Running time in minutes, positive.
    pub duration: u32,
    /// Rating in `[0, 10]`; [`DEFAULT_RATE`] when the create payload
    /// omitted it.
    pub rate: f64,
    /// Absolute URL of the poster image.
    pub poster: String,
    /// Ordered genre list; duplicates are allowed.
    pub genre: Vec<Genre>,
}

impl Movie {
    /// Merge a patch over this record, field by field.
    ///
    /// Patch fields override, absent fields are preserved. The id is not
    /// part of the patch shape and therefore never changes. The full
    /// destructuring means a field added to [`MoviePatch`] will not
    /// silently fall through this merge.
    pub fn apply(&mut self, patch: MoviePatch) {
        let MoviePatch {
            title,
            year,
            director,
            duration,
            rate,
            poster,
            genre,
        } = patch;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(year) = year {
            self.year = year;
        }
        if let Some(director) = director {
            self.director = director;
        }
        if let Some(duration) = duration {
            self.duration = duration;
        }
        if let Some(rate) = rate {
            self.rate = rate;
        }
        if let Some(poster) = poster {
            self.poster = poster;
        }
        if let Some(genre) = genre {
            self.genre = genre;
        }
    }
}

/// A fully validated movie record awaiting an id.
///
/// Only produced by [`crate::validate_full`]; `rate` is already defaulted.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDraft {
    /// Title, non-empty.
    pub title: String,
    /// Release year, within `[1900, 2024]`.
    pub year: i32,
    /// Director.
    pub director: String,
    /// Running time in minutes, positive.
    pub duration: u32,
    /// Rating in `[0, 10]`.
    pub rate: f64,
    /// Absolute URL of the poster image.
    pub poster: String,
    /// Ordered genre list.
    pub genre: Vec<Genre>,
}

impl MovieDraft {
    /// Attach an identifier, producing a storable record.
    pub fn into_record(self, id: MovieId) -> Movie {
        Movie {
            id,
            title: self.title,
            year: self.year,
            director: self.director,
            duration: self.duration,
            rate: self.rate,
            poster: self.poster,
            genre: self.genre,
        }
    }
}

/// A validated partial update over the fixed movie field set.
///
/// Only produced by [`crate::validate_partial`]. Every field is optional;
/// a present field has already passed the same constraint as in the full
/// schema. An all-`None` patch is valid and leaves a record untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement release year.
    pub year: Option<i32>,
    /// Replacement director.
    pub director: Option<String>,
    /// Replacement duration.
    pub duration: Option<u32>,
    /// Replacement rating. A patch can set a rate but never unset one.
    pub rate: Option<f64>,
    /// Replacement poster URL.
    pub poster: Option<String>,
    /// Replacement genre list (replaces the whole list, not elements).
    pub genre: Option<Vec<Genre>>,
}

impl MoviePatch {
    /// Whether this patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
