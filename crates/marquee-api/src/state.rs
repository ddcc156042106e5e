//! # Application State & Configuration
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor. Holds the movie store (the sole owner of the
//! collection) and the resolved configuration.

use std::path::PathBuf;

use marquee_store::MovieStore;

use crate::cors::AllowedOrigins;

/// The port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 1234;

/// Application configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Exact-origin allow-list for the cross-origin gate.
    pub allowed_origins: AllowedOrigins,
    /// Optional path to the seed collection. `None` means the service
    /// starts with an empty collection.
    pub seed_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            allowed_origins: AllowedOrigins::default(),
            seed_path: None,
        }
    }
}

impl AppConfig {
    /// Build configuration from the environment.
    ///
    /// Variables:
    /// - `PORT` (default: 1234)
    /// - `MARQUEE_ALLOWED_ORIGINS` (comma-separated; default allow-list
    ///   when unset)
    /// - `MOVIES_SEED` (path to the seed JSON; no seed when unset)
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let seed_path = std::env::var("MOVIES_SEED").ok().map(PathBuf::from);

        Self {
            port,
            allowed_origins: AllowedOrigins::from_env(),
            seed_path,
        }
    }
}

/// Shared application state accessible to all route handlers.
///
/// Clone-friendly: the store shares its collection via `Arc` internals, so
/// every handler sees the same records.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The movie collection.
    pub movies: MovieStore,
    /// Resolved configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Create state with an empty collection and default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default(), MovieStore::new())
    }

    /// Create state from explicit configuration and a (possibly seeded)
    /// store.
    pub fn with_config(config: AppConfig, movies: MovieStore) -> Self {
        Self { movies, config }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_the_fixed_port() {
        let config = AppConfig::default();
        assert_eq!(config.port, 1234);
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn new_state_has_an_empty_collection() {
        let state = AppState::new();
        assert!(state.movies.is_empty());
    }

    #[test]
    fn with_config_keeps_the_given_store() {
        let movies = MovieStore::new();
        let state = AppState::with_config(AppConfig::default(), movies.clone());
        movies.create(sample_draft());
        assert_eq!(state.movies.len(), 1);
    }

    fn sample_draft() -> marquee_core::MovieDraft {
        marquee_core::MovieDraft {
            title: "Heat".to_string(),
            year: 1995,
            director: "Michael Mann".to_string(),
            duration: 170,
            rate: 8.3,
            poster: "https://example.com/heat.jpg".to_string(),
            genre: vec![marquee_core::Genre::Action],
        }
    }
}
