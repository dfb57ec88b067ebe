//! Data types for the AnimeFire scraper
//!
//! All types implement Serialize and Deserialize so they can be returned as
//! JSON by the API and round-tripped through the cache store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single anime entry from a listing page (popular/latest/search)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimeSummary {
    /// Display title of the anime
    pub title: String,
    /// Absolute URL of the anime's episode listing page
    pub url: String,
    /// Cover image URL, taken from the lazy-load attribute when present
    pub thumbnail: Option<String>,
    /// Constant content tag, always `"anime"`
    #[serde(rename = "type")]
    pub kind: String,
}

impl AnimeSummary {
    /// Tag emitted in the `type` field of every summary
    pub const KIND: &'static str = "anime";
}

/// Detailed information about a single anime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimeDetail {
    /// Display title of the anime
    pub title: String,
    /// Cover image URL
    pub thumbnail: Option<String>,
    /// Synopsis text, empty when the page carries none
    pub synopsis: String,
    /// Genre tags in page order
    pub genres: Vec<String>,
    /// Auxiliary label → value pairs (status, year, studio, ...)
    pub info: BTreeMap<String, String>,
    /// The anime page URL this record was extracted from
    pub url: String,
}

/// A single episode within an anime's episode list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Display title of the episode
    pub title: String,
    /// Absolute URL of the episode page
    pub url: String,
    /// Sequential number, 1-based in ascending release order
    pub number: u32,
}

/// One fixed-size batch of an anime's full episode list
///
/// Derived per request from the complete ascending list; never stored as a
/// whole in the cache independently of its batch number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodePage {
    /// Episodes in this batch, ascending by number
    pub items: Vec<Episode>,
    /// Requested batch number (1-based)
    pub batch: u32,
    /// Total number of batches for the full list
    pub total_batches: u32,
    /// Total number of episodes across all batches
    pub total_episodes: u32,
}

impl EpisodePage {
    /// Create a new episode page
    pub fn new(items: Vec<Episode>, batch: u32, total_batches: u32, total_episodes: u32) -> Self {
        Self {
            items,
            batch,
            total_batches,
            total_episodes,
        }
    }
}

/// A playable video source extracted from an episode page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSource {
    /// Quality label ("FULLHD"/"HD"/"SD", a raw label, or "embed")
    pub quality: String,
    /// Direct media URL or embed URL
    pub url: String,
}
