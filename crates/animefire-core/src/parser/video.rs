//! Video source parser for animefire.plus episode pages
//!
//! Primary path: the player element carries a `data-video-src` attribute,
//! holding either a JSON blob of quality/url pairs or a bare media URL.
//! Fallback: an embedded iframe player. Neither present means "no playable
//! source found", which is an empty list and not a failure.

use std::collections::BTreeMap;

use scraper::{Html, Selector};
use serde::Deserialize;

use crate::types::VideoSource;

/// Quality label used when the attribute holds a bare URL
const DEFAULT_QUALITY: &str = "default";

/// Quality label for the iframe fallback
const EMBED_QUALITY: &str = "embed";

/// JSON shape used by the site's player: `{"data":[{"src","label"}]}`
#[derive(Debug, Deserialize)]
struct SourceList {
    data: Vec<SourceEntry>,
}

#[derive(Debug, Deserialize)]
struct SourceEntry {
    src: String,
    label: String,
}

/// Parse playable video sources from an episode page.
///
/// # Arguments
/// * `html` - Raw HTML content of the episode page
///
/// # Returns
/// Sources ordered by descending nominal quality; empty when the page has
/// neither a direct source nor an embed.
pub fn parse_video_sources(html: &str) -> Vec<VideoSource> {
    let document = Html::parse_document(html);

    if let Ok(selector) = Selector::parse("video[data-video-src]") {
        if let Some(el) = document.select(&selector).next() {
            if let Some(raw) = el.value().attr("data-video-src") {
                return parse_source_attribute(raw);
            }
        }
    }

    if let Ok(selector) = Selector::parse("iframe[src]") {
        if let Some(el) = document.select(&selector).next() {
            if let Some(src) = el.value().attr("src") {
                return vec![VideoSource {
                    quality: EMBED_QUALITY.to_string(),
                    url: src.to_string(),
                }];
            }
        }
    }

    Vec::new()
}

/// Interpret the `data-video-src` attribute value.
fn parse_source_attribute(raw: &str) -> Vec<VideoSource> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        let mut sources = parse_source_json(trimmed);
        sources.sort_by(|a, b| quality_rank(&b.quality).cmp(&quality_rank(&a.quality)));
        return sources;
    }

    vec![VideoSource {
        quality: DEFAULT_QUALITY.to_string(),
        url: trimmed.to_string(),
    }]
}

/// Parse a JSON blob in either the array or the flat-map shape.
fn parse_source_json(raw: &str) -> Vec<VideoSource> {
    if let Ok(list) = serde_json::from_str::<SourceList>(raw) {
        return list
            .data
            .into_iter()
            .map(|entry| VideoSource {
                quality: entry.label,
                url: entry.src,
            })
            .collect();
    }

    if let Ok(map) = serde_json::from_str::<BTreeMap<String, String>>(raw) {
        return map
            .into_iter()
            .map(|(quality, url)| VideoSource { quality, url })
            .collect();
    }

    Vec::new()
}

/// Nominal quality rank; higher sorts first.
fn quality_rank(label: &str) -> u8 {
    let upper = label.to_uppercase();
    if upper.contains("FULLHD") || upper.contains("1080") {
        3
    } else if upper.contains("HD") || upper.contains("720") {
        2
    } else if upper.contains("SD") || upper.contains("480") {
        1
    } else {
        0
    }
}
