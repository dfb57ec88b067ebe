//! AnimeFire HTTP API
//!
//! Thin axum surface over [`animefire_core`]: route registration, the
//! API-key header gate and process configuration. All scraping and caching
//! logic lives in the core crate.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;

use std::sync::Arc;

use animefire_core::{AnimeFireScraper, CacheStore, FileCache, HttpFetcher, MemoryCache};

pub use config::AppConfig;
pub use router::create_router;
pub use state::AppState;

/// Build the scraper and serve the API until the process stops.
pub async fn run_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let cache: Arc<dyn CacheStore> = match &config.cache_dir {
        Some(dir) => Arc::new(FileCache::new(dir)?),
        None => Arc::new(MemoryCache::new()),
    };
    let fetcher = Arc::new(HttpFetcher::new()?);
    let scraper = AnimeFireScraper::with_parts(fetcher, cache);

    let addr = config.listen_addr;
    let state = AppState::new(scraper, config);
    let app = create_router(state);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
