//! HTML parsers for animefire.plus pages
//!
//! This module contains parsers for extracting data from AnimeFire HTML:
//! - `cards`: listing-page anime cards (popular/latest/search)
//! - `detail`: single anime page details
//! - `episodes`: episode lists with batching
//! - `video`: playable video sources from an episode page

pub mod cards;
pub mod detail;
pub mod episodes;
pub mod video;

// Re-export main parsing functions
pub use cards::{parse_anime_cards, rewrite_listing_url};
pub use detail::parse_anime_detail;
pub use episodes::{paginate_episodes, parse_episode_entries, EpisodeEntry};
pub use video::parse_video_sources;
