//! Anime detail parser for animefire.plus
//!
//! Extraction is best-effort per field: anything missing from the markup
//! becomes empty/absent in the record. Only the absence of a document at all
//! (a fetch failure) prevents a record from being produced.

use std::collections::BTreeMap;

use scraper::{ElementRef, Html, Selector};

use crate::types::AnimeDetail;

/// Parse an anime page into a detail record.
///
/// # Arguments
/// * `html` - Raw HTML content of the anime page
/// * `url` - The page URL, carried into the record as its identity
pub fn parse_anime_detail(html: &str, url: &str) -> AnimeDetail {
    let document = Html::parse_document(html);

    AnimeDetail {
        title: first_text(&document, &["div.div_anime_names h1", "h1"]).unwrap_or_default(),
        thumbnail: extract_thumbnail(&document),
        synopsis: first_text(&document, &["div.divSinopse span.spanAnimeInfo", "div.divSinopse"])
            .unwrap_or_default(),
        genres: extract_genres(&document),
        info: extract_info(&document),
        url: url.to_string(),
    }
}

/// First non-empty text match across a list of selectors.
fn first_text(document: &Html, selectors: &[&str]) -> Option<String> {
    for selector_str in selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(el) = document.select(&selector).next() {
                let text = el.text().collect::<String>().trim().to_string();
                if !text.is_empty() {
                    return Some(text);
                }
            }
        }
    }
    None
}

/// Extract the cover image, preferring the lazy-load attribute.
fn extract_thumbnail(document: &Html) -> Option<String> {
    let selector = Selector::parse("div.sub_animepage_img img").ok()?;
    let img = document.select(&selector).next()?;
    img.value()
        .attr("data-src")
        .or_else(|| img.value().attr("src"))
        .map(str::to_string)
}

/// Extract genre tags in page order.
fn extract_genres(document: &Html) -> Vec<String> {
    let mut genres = Vec::new();

    if let Ok(selector) = Selector::parse("div.animeInfo a.spanGeneros") {
        for el in document.select(&selector) {
            let text = el.text().collect::<String>().trim().to_string();
            if !text.is_empty() && !genres.contains(&text) {
                genres.push(text);
            }
        }
    }

    genres
}

/// Extract auxiliary info as a label → value mapping.
///
/// The page lists pairs as `<b>Label:</b>` followed by the value, either as
/// plain text or inside a sibling span.
fn extract_info(document: &Html) -> BTreeMap<String, String> {
    let mut info = BTreeMap::new();

    if let Ok(selector) = Selector::parse("div.animeInfo b") {
        for label_el in document.select(&selector) {
            let label = label_el
                .text()
                .collect::<String>()
                .trim()
                .trim_end_matches(':')
                .to_string();
            if label.is_empty() {
                continue;
            }

            if let Some(value) = sibling_value(&label_el) {
                info.insert(label, value);
            }
        }
    }

    info
}

/// Value paired with a label: the first non-empty sibling text, stopping at
/// the next label.
fn sibling_value(label_el: &ElementRef) -> Option<String> {
    for sibling in label_el.next_siblings() {
        if let Some(el) = ElementRef::wrap(sibling) {
            if el.value().name() == "b" {
                break;
            }
            let text = el.text().collect::<String>().trim().to_string();
            if !text.is_empty() {
                return Some(text);
            }
        } else if let Some(text) = sibling.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}
