//! # Movie Store
//!
//! Thread-safe, cloneable owner of the movie collection. The collection is
//! a `Vec` — not a map — because collection order is insertion order and
//! every read must preserve it. Lookups are linear, bounded by collection
//! size.

use std::sync::Arc;

use parking_lot::RwLock;

use marquee_core::{Movie, MovieDraft, MovieId, MoviePatch};

/// The exclusive owner and sole mutator of the movie collection.
///
/// All operations are synchronous (the lock is `parking_lot`, not
/// `tokio::sync`) because the lock is never held across `.await` points.
/// Each operation takes the lock for its whole duration, so no caller can
/// observe a partially applied mutation. `parking_lot::RwLock` is
/// non-poisonable — a panicking writer does not permanently corrupt the
/// store.
#[derive(Debug)]
pub struct MovieStore {
    movies: Arc<RwLock<Vec<Movie>>>,
}

impl Clone for MovieStore {
    fn clone(&self) -> Self {
        Self {
            movies: Arc::clone(&self.movies),
        }
    }
}

impl MovieStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::with_movies(Vec::new())
    }

    /// Create a store holding the given seed collection, in order.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: Arc::new(RwLock::new(movies)),
        }
    }

    /// List records, optionally filtered by genre.
    ///
    /// With no filter, returns the whole collection. With a filter,
    /// returns the records whose genre list contains the filter under
    /// case-insensitive comparison — an unmatched filter yields an empty
    /// vec, not an error. Collection order is preserved either way.
    pub fn list(&self, genre_filter: Option<&str>) -> Vec<Movie> {
        let movies = self.movies.read();
        match genre_filter {
            None => movies.clone(),
            Some(filter) => movies
                .iter()
                .filter(|movie| movie.genre.iter().any(|genre| genre.matches(filter)))
                .cloned()
                .collect(),
        }
    }

    /// Look up a record by exact id. `None` is the not-found signal.
    pub fn get(&self, id: &MovieId) -> Option<Movie> {
        self.movies
            .read()
            .iter()
            .find(|movie| movie.id == *id)
            .cloned()
    }

    /// Store a validated draft under a fresh id and return the record.
    ///
    /// The id is random with negligible collision probability, so the
    /// uniqueness invariant holds without a scan. The record is appended:
    /// creation order is collection order.
    pub fn create(&self, draft: MovieDraft) -> Movie {
        let movie = draft.into_record(MovieId::new());
        self.movies.write().push(movie.clone());
        movie
    }

    /// Merge a patch over the record with the given id.
    ///
    /// Patch fields override, absent fields are preserved; the record
    /// keeps its position and id. Returns the merged record, or `None`
    /// (with the collection untouched) when no record matches.
    pub fn patch(&self, id: &MovieId, patch: MoviePatch) -> Option<Movie> {
        let mut movies = self.movies.write();
        let movie = movies.iter_mut().find(|movie| movie.id == *id)?;
        movie.apply(patch);
        Some(movie.clone())
    }

    /// Remove the record with the given id, preserving the relative order
    /// of the remainder. Returns the removed record, or `None` when no
    /// record matches.
    pub fn remove(&self, id: &MovieId) -> Option<Movie> {
        let mut movies = self.movies.write();
        let index = movies.iter().position(|movie| movie.id == *id)?;
        Some(movies.remove(index))
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.movies.read().len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::new()
    }
}
