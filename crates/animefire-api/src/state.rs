//! Shared application state handed to every handler

use std::sync::Arc;

use animefire_core::AnimeFireScraper;

use crate::config::AppConfig;

/// State shared across requests: the scraper (with its cache) and the
/// process configuration.
#[derive(Clone)]
pub struct AppState {
    pub scraper: Arc<AnimeFireScraper>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create the shared state
    pub fn new(scraper: AnimeFireScraper, config: AppConfig) -> Self {
        Self {
            scraper: Arc::new(scraper),
            config: Arc::new(config),
        }
    }
}
