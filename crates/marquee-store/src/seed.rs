//! # Seed Loading
//!
//! Reads the initial movie collection from a JSON file once at startup.
//! The seed is the only persisted format the service knows about; nothing
//! is ever written back.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use marquee_core::{Movie, MovieId};

/// Errors loading the seed collection.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    Io {
        /// The path that was attempted.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not a JSON array of full movie records.
    #[error("seed file {path} is not a valid movie collection: {source}")]
    Parse {
        /// The path that was attempted.
        path: PathBuf,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Two seed records carry the same id.
    #[error("seed file {path} contains duplicate id {id}")]
    DuplicateId {
        /// The path that was attempted.
        path: PathBuf,
        /// The duplicated identifier.
        id: MovieId,
    },
}

/// Load the seed collection from a JSON file.
///
/// The file must hold a JSON array of full movie records (ids included —
/// seed records were created elsewhere and keep their identifiers). Record
/// order in the file becomes collection order. Every id must be unique,
/// since the store relies on that invariant for lookup and mutation.
pub fn load_seed(path: impl AsRef<Path>) -> Result<Vec<Movie>, SeedError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let movies: Vec<Movie> = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let mut seen = HashSet::new();
    for movie in &movies {
        if !seen.insert(movie.id) {
            return Err(SeedError::DuplicateId {
                path: path.to_path_buf(),
                id: movie.id,
            });
        }
    }

    tracing::debug!(path = %path.display(), count = movies.len(), "loaded movie seed");
    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn seed_record(id: &str, title: &str) -> String {
        format!(
            r#"{{
                "id": "{id}",
                "title": "{title}",
                "year": 1994,
                "director": "Frank Darabont",
                "duration": 142,
                "rate": 9.3,
                "poster": "https://example.com/{title}.jpg",
                "genre": ["Drama"]
            }}"#
        )
    }

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_records_in_file_order() {
        let file = write_temp(&format!(
            "[{},{}]",
            seed_record("550e8400-e29b-41d4-a716-446655440000", "First"),
            seed_record("550e8400-e29b-41d4-a716-446655440001", "Second"),
        ));
        let movies = load_seed(file.path()).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "First");
        assert_eq!(movies[1].title, "Second");
    }

    #[test]
    fn empty_array_is_a_valid_seed() {
        let file = write_temp("[]");
        assert!(load_seed(file.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = load_seed("/definitely/not/a/real/seed.json").unwrap_err();
        assert!(matches!(error, SeedError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let file = write_temp("{\"not\": \"an array\"}");
        let error = load_seed(file.path()).unwrap_err();
        assert!(matches!(error, SeedError::Parse { .. }));
    }

    #[test]
    fn record_missing_a_field_is_a_parse_error() {
        let file = write_temp(r#"[{"id": "550e8400-e29b-41d4-a716-446655440000"}]"#);
        let error = load_seed(file.path()).unwrap_err();
        assert!(matches!(error, SeedError::Parse { .. }));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let id = "550e8400-e29b-41d4-a716-446655440000";
        let file = write_temp(&format!(
            "[{},{}]",
            seed_record(id, "First"),
            seed_record(id, "Second"),
        ));
        let error = load_seed(file.path()).unwrap_err();
        match error {
            SeedError::DuplicateId { id: dup, .. } => assert_eq!(dup.to_string(), id),
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }
}
