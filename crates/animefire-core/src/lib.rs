//! AnimeFire Scraper Core Library
//!
//! This crate provides the core scraping functionality for animefire.plus:
//! listing pages (popular/latest/search), anime details, batched episode
//! lists and playable video sources, all normalized into typed records and
//! cached with a TTL.
//!
//! # Features
//! - Listing, detail, episode and video extractors bound to the site markup
//! - Injectable page fetcher with fixed browser headers and bounded timeout
//! - TTL cache store with in-memory and file-backed implementations

pub mod cache;
pub mod client;
pub mod error;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use cache::{CacheStore, FileCache, MemoryCache, DEFAULT_TTL};
pub use client::{Fetch, FetcherConfig, HttpFetcher, BASE_URL};
pub use error::{AnimeFireError, Result};
pub use scraper::{AnimeFireScraper, EPISODE_BATCH_SIZE};
pub use types::{AnimeDetail, AnimeSummary, Episode, EpisodePage, VideoSource};
