//! # marquee-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the movie catalog.
//! Binds to a configurable port (default 1234).

use marquee_api::state::{AppConfig, AppState};
use marquee_store::MovieStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    // Load the seed collection, if one is configured. A bad seed file is
    // a startup failure, not something to serve around.
    let movies = match &config.seed_path {
        Some(path) => {
            let seed = marquee_store::load_seed(path).map_err(|e| {
                tracing::error!("Seed loading failed: {e}");
                e
            })?;
            tracing::info!(count = seed.len(), path = %path.display(), "seeded movie collection");
            MovieStore::with_movies(seed)
        }
        None => {
            tracing::info!("no seed configured, starting with an empty collection");
            MovieStore::new()
        }
    };

    let port = config.port;
    let state = AppState::with_config(config, movies);
    let app = marquee_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Marquee API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
