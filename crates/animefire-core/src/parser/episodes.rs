//! Episode list parser and batching for animefire.plus
//!
//! The site lists episodes newest-first. The canonical order exposed to
//! consumers is ascending by release, so the scraped sequence is reversed
//! before numbering and batching.

use scraper::{Html, Selector};

use crate::error::{AnimeFireError, Result};
use crate::types::{Episode, EpisodePage};

use super::cards::resolve_url;

/// A scraped episode link, before ordering and numbering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeEntry {
    /// Episode title text
    pub title: String,
    /// Absolute episode page URL
    pub url: String,
}

/// Collect episode entries from an anime page in document order.
///
/// Document order is the site's order: newest-first. Entries without an
/// href or without title text are skipped silently.
///
/// # Arguments
/// * `html` - Raw HTML content of the anime page
pub fn parse_episode_entries(html: &str) -> Result<Vec<EpisodeEntry>> {
    let document = Html::parse_document(html);

    let selector = Selector::parse("div.div_video_list a.lEp")
        .map_err(|e| AnimeFireError::Parse(format!("invalid episode selector: {:?}", e)))?;

    let mut entries = Vec::new();
    for link in document.select(&selector) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let title = link.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            continue;
        }
        entries.push(EpisodeEntry {
            title,
            url: resolve_url(href),
        });
    }

    Ok(entries)
}

/// Reverse a newest-first entry list into ascending order, number it from 1
/// and cut the requested batch.
///
/// `total_batches` is `ceil(total / batch_size)`. A batch outside
/// `[1, total_batches]` yields empty `items` with the totals intact; zero
/// episodes means zero batches and every requested batch is empty.
///
/// # Arguments
/// * `entries` - Episode entries in document (newest-first) order
/// * `batch` - Requested batch number, 1-based
/// * `batch_size` - Fixed number of episodes per batch
pub fn paginate_episodes(entries: Vec<EpisodeEntry>, batch: u32, batch_size: usize) -> EpisodePage {
    let batch_size = batch_size.max(1);
    let total_episodes = entries.len();
    let total_batches = total_episodes.div_ceil(batch_size);

    let items = if batch >= 1 && (batch as usize) <= total_batches {
        let start = (batch as usize - 1) * batch_size;
        entries
            .into_iter()
            .rev()
            .enumerate()
            .map(|(i, entry)| Episode {
                title: entry.title,
                url: entry.url,
                number: (i + 1) as u32,
            })
            .skip(start)
            .take(batch_size)
            .collect()
    } else {
        Vec::new()
    };

    EpisodePage::new(items, batch, total_batches as u32, total_episodes as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(n: u32) -> EpisodeEntry {
        EpisodeEntry {
            title: format!("Ep {}", n),
            url: format!("https://animefire.plus/animes/naruto/{}", n),
        }
    }

    /// Entries as the site lists them: newest first.
    fn newest_first(count: u32) -> Vec<EpisodeEntry> {
        (1..=count).rev().map(entry).collect()
    }

    #[test]
    fn test_parse_entries_in_document_order() {
        let html = r#"
            <div class="div_video_list">
                <a class="lEp" href="/animes/naruto/3">Ep 3</a>
                <a class="lEp" href="/animes/naruto/2">Ep 2</a>
                <a class="lEp" href="/animes/naruto/1">Ep 1</a>
            </div>
        "#;
        let entries = parse_episode_entries(html).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].title, "Ep 3");
        assert_eq!(entries[0].url, "https://animefire.plus/animes/naruto/3");
    }

    #[test]
    fn test_newest_first_becomes_ascending() {
        let html = r#"
            <div class="div_video_list">
                <a class="lEp" href="/animes/naruto/3">Ep 3</a>
                <a class="lEp" href="/animes/naruto/2">Ep 2</a>
                <a class="lEp" href="/animes/naruto/1">Ep 1</a>
            </div>
        "#;
        let entries = parse_episode_entries(html).unwrap();
        let page = paginate_episodes(entries, 1, 10);

        let titles: Vec<&str> = page.items.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Ep 1", "Ep 2", "Ep 3"]);
        let numbers: Vec<u32> = page.items.iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_pagination_counts() {
        let page = paginate_episodes(newest_first(25), 1, 10);
        assert_eq!(page.total_episodes, 25);
        assert_eq!(page.total_batches, 3);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.items[0].number, 1);
        assert_eq!(page.items[9].number, 10);
    }

    #[test]
    fn test_last_batch_holds_the_remainder() {
        let page = paginate_episodes(newest_first(25), 3, 10);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0].number, 21);
        assert_eq!(page.items[4].number, 25);
    }

    #[test]
    fn test_batch_past_the_end_is_empty_not_an_error() {
        let page = paginate_episodes(newest_first(25), 4, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.batch, 4);
        assert_eq!(page.total_batches, 3);
        assert_eq!(page.total_episodes, 25);
    }

    #[test]
    fn test_batch_zero_is_empty() {
        let page = paginate_episodes(newest_first(5), 0, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_batches, 1);
    }

    #[test]
    fn test_no_episodes_means_zero_batches() {
        let page = paginate_episodes(Vec::new(), 1, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_batches, 0);
        assert_eq!(page.total_episodes, 0);
    }

    #[test]
    fn test_exact_multiple_has_no_partial_batch() {
        let page = paginate_episodes(newest_first(20), 2, 10);
        assert_eq!(page.total_batches, 2);
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.items[9].number, 20);
    }

    #[test]
    fn test_entries_without_href_or_title_are_skipped() {
        let html = r#"
            <div class="div_video_list">
                <a class="lEp">No href</a>
                <a class="lEp" href="/animes/naruto/2">  </a>
                <a class="lEp" href="/animes/naruto/1">Ep 1</a>
            </div>
        "#;
        let entries = parse_episode_entries(html).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Ep 1");
    }

    #[test]
    fn test_parse_entries_empty_document() {
        let entries = parse_episode_entries("<html><body></body></html>").unwrap();
        assert!(entries.is_empty());
    }
}
