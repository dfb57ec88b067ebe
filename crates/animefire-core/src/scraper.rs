//! Main AnimeFire scraper API
//!
//! Combines the page fetcher, the HTML parsers and the TTL cache into one
//! high-level interface. Every operation computes a deterministic cache key
//! from its parameters, serves a fresh cached value when present, and
//! otherwise performs exactly one fetch, extracts, stores and returns.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::cache::{sanitize_key, CacheStore, MemoryCache, DEFAULT_TTL};
use crate::client::{Fetch, HttpFetcher, BASE_URL};
use crate::error::{AnimeFireError, Result};
use crate::parser::{
    paginate_episodes, parse_anime_cards, parse_anime_detail, parse_episode_entries,
    parse_video_sources,
};
use crate::types::{AnimeDetail, AnimeSummary, EpisodePage, VideoSource};

/// Number of episodes per batch served by [`AnimeFireScraper::episodes`]
pub const EPISODE_BATCH_SIZE: usize = 25;

/// High-level scraper for animefire.plus
///
/// The fetcher and the cache store are injected so tests can substitute a
/// fixture-serving fetcher and an in-memory store.
///
/// # Example
/// ```no_run
/// use animefire_core::AnimeFireScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = AnimeFireScraper::new()?;
///     let animes = scraper.popular(1).await?;
///     println!("{} animes on page 1", animes.len());
///     Ok(())
/// }
/// ```
pub struct AnimeFireScraper {
    fetcher: Arc<dyn Fetch>,
    cache: Arc<dyn CacheStore>,
}

impl AnimeFireScraper {
    /// Create a scraper with the default HTTP fetcher and an in-memory
    /// cache.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self::with_parts(
            Arc::new(HttpFetcher::new()?),
            Arc::new(MemoryCache::new()),
        ))
    }

    /// Create a scraper from explicit collaborators.
    pub fn with_parts(fetcher: Arc<dyn Fetch>, cache: Arc<dyn CacheStore>) -> Self {
        Self { fetcher, cache }
    }

    /// List the most popular animes.
    ///
    /// # Arguments
    /// * `page` - Listing page number (1-based)
    pub async fn popular(&self, page: u32) -> Result<Vec<AnimeSummary>> {
        let key = format!("popular_{}", page);
        let url = format!("{}/top-animes/{}", BASE_URL, page);
        self.listing(&key, &url).await
    }

    /// List the latest episode releases.
    ///
    /// # Arguments
    /// * `page` - Listing page number (1-based)
    pub async fn latest(&self, page: u32) -> Result<Vec<AnimeSummary>> {
        let key = format!("latest_{}", page);
        let url = format!("{}/home/{}", BASE_URL, page);
        self.listing(&key, &url).await
    }

    /// Search animes by name.
    ///
    /// The query is normalized (trimmed, lowercased, spaces to hyphens)
    /// before it reaches the cache key and the upstream path.
    ///
    /// # Arguments
    /// * `query` - Search text; must not be empty or whitespace-only
    /// * `page` - Result page number (1-based)
    ///
    /// # Errors
    /// `AnimeFireError::InvalidQuery` on a blank query, before any fetch.
    pub async fn search(&self, query: &str, page: u32) -> Result<Vec<AnimeSummary>> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(AnimeFireError::InvalidQuery(
                "search query cannot be empty".to_string(),
            ));
        }

        let normalized = normalize_query(trimmed);
        let key = format!("search_{}_{}", normalized, page);
        let url = format!(
            "{}/pesquisar/{}/{}",
            BASE_URL,
            urlencoding::encode(&normalized),
            page
        );
        self.listing(&key, &url).await
    }

    /// Get the detail record for an anime page.
    ///
    /// # Arguments
    /// * `url` - Absolute anime page URL (as returned by the listings)
    pub async fn details(&self, url: &str) -> Result<AnimeDetail> {
        let key = format!("details_{}", sanitize_key(url));
        if let Some(cached) = self.cached(&key) {
            return Ok(cached);
        }

        let html = self.fetcher.fetch(url).await?;
        let detail = parse_anime_detail(&html, url);
        self.store(&key, &detail);
        Ok(detail)
    }

    /// Get one batch of an anime's episode list, ascending by release.
    ///
    /// # Arguments
    /// * `url` - Absolute anime page URL
    /// * `batch` - Batch number (1-based); out-of-range batches return
    ///   empty items with the totals intact
    pub async fn episodes(&self, url: &str, batch: u32) -> Result<EpisodePage> {
        let key = format!("episodes_{}_{}", sanitize_key(url), batch);
        if let Some(cached) = self.cached(&key) {
            return Ok(cached);
        }

        let html = self.fetcher.fetch(url).await?;
        let entries = parse_episode_entries(&html)?;
        let page = paginate_episodes(entries, batch, EPISODE_BATCH_SIZE);
        self.store(&key, &page);
        Ok(page)
    }

    /// Get the playable video sources of an episode page.
    ///
    /// An empty list means the page loaded but exposed no source; that is
    /// distinct from a fetch failure.
    ///
    /// # Arguments
    /// * `url` - Absolute episode page URL
    pub async fn video(&self, url: &str) -> Result<Vec<VideoSource>> {
        let key = format!("video_{}", sanitize_key(url));
        if let Some(cached) = self.cached(&key) {
            return Ok(cached);
        }

        let html = self.fetcher.fetch(url).await?;
        let sources = parse_video_sources(&html);
        self.store(&key, &sources);
        Ok(sources)
    }

    /// Shared cache-or-fetch flow for the three listing operations.
    async fn listing(&self, key: &str, url: &str) -> Result<Vec<AnimeSummary>> {
        if let Some(cached) = self.cached(key) {
            return Ok(cached);
        }

        let html = self.fetcher.fetch(url).await?;
        let animes = parse_anime_cards(&html)?;
        self.store(key, &animes);
        Ok(animes)
    }

    /// Typed cache read; a value that no longer deserializes is a miss.
    fn cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.cache.get(key)?;
        match serde_json::from_value(value) {
            Ok(typed) => Some(typed),
            Err(e) => {
                debug!(key, error = %e, "discarding cache entry with stale shape");
                None
            }
        }
    }

    fn store<T: Serialize>(&self, key: &str, value: &T) {
        if let Ok(json) = serde_json::to_value(value) {
            self.cache.set(key, json, DEFAULT_TTL);
        }
    }
}

/// Normalize a search query the way the site's search paths expect.
fn normalize_query(query: &str) -> String {
    query.to_lowercase().replace(' ', "-")
}
