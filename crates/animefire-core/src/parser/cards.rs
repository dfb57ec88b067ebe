//! Listing-card parser for animefire.plus
//!
//! Popular, latest and search pages all share the same card markup, so one
//! parser covers the three listing operations.

use scraper::{ElementRef, Html, Selector};

use crate::client::BASE_URL;
use crate::error::{AnimeFireError, Result};
use crate::types::AnimeSummary;

/// Placeholder title for cards whose title element carries no text
const UNTITLED: &str = "Sem título";

/// Path suffix of the canonical per-anime episode listing page
const ALL_EPISODES_SUFFIX: &str = "-todos-os-episodios";

/// Parse anime cards from a listing page.
///
/// Cards whose title element has no enclosing link are skipped silently;
/// stray markup is expected and is not an error.
///
/// # Arguments
/// * `html` - Raw HTML content of a popular/latest/search page
pub fn parse_anime_cards(html: &str) -> Result<Vec<AnimeSummary>> {
    let document = Html::parse_document(html);

    let title_selector = Selector::parse("article.cardUltimosEps h3.animeTitle")
        .map_err(|e| AnimeFireError::Parse(format!("invalid card selector: {:?}", e)))?;

    let mut animes = Vec::new();
    for title_el in document.select(&title_selector) {
        if let Some(summary) = parse_anime_card(&title_el) {
            animes.push(summary);
        }
    }

    Ok(animes)
}

/// Parse a single card from its title element.
fn parse_anime_card(title_el: &ElementRef) -> Option<AnimeSummary> {
    let link = enclosing_link(title_el)?;
    let href = link.value().attr("href")?;
    let url = resolve_url(&rewrite_listing_url(href));

    let text = title_el.text().collect::<String>().trim().to_string();
    let title = if text.is_empty() {
        UNTITLED.to_string()
    } else {
        text
    };

    Some(AnimeSummary {
        title,
        url,
        thumbnail: extract_thumbnail(&link),
        kind: AnimeSummary::KIND.to_string(),
    })
}

/// Walk up from an element to the nearest enclosing `<a>`.
fn enclosing_link<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "a")
}

/// Rewrite a legacy single-episode href into the canonical listing URL.
///
/// Hrefs ending in a numeric segment point at one episode; the whole
/// `/{digits}` suffix is replaced so the link targets the full episode
/// listing instead. Hrefs without a trailing numeric segment pass through
/// unchanged.
///
/// # Examples
/// ```
/// use animefire_core::parser::rewrite_listing_url;
///
/// assert_eq!(
///     rewrite_listing_url("/animes/naruto/12345"),
///     "/animes/naruto-todos-os-episodios"
/// );
/// assert_eq!(
///     rewrite_listing_url("/animes/naruto-todos-os-episodios"),
///     "/animes/naruto-todos-os-episodios"
/// );
/// ```
pub fn rewrite_listing_url(href: &str) -> String {
    let re = regex_lite::Regex::new(r"/\d+$").unwrap();
    if re.is_match(href) {
        re.replace(href, ALL_EPISODES_SUFFIX).into_owned()
    } else {
        href.to_string()
    }
}

/// Resolve a possibly relative href against the site base URL.
pub(crate) fn resolve_url(href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{}{}", BASE_URL, href)
    } else {
        format!("{}/{}", BASE_URL, href)
    }
}

/// Extract the card thumbnail from its lazy-load attribute.
///
/// The `src` attribute holds a placeholder stub, so only `data-src` counts.
fn extract_thumbnail(link: &ElementRef) -> Option<String> {
    let img_selector = Selector::parse("img").ok()?;
    link.select(&img_selector)
        .next()?
        .value()
        .attr("data-src")
        .map(str::to_string)
}
