//! HTTP page fetcher for animefire.plus
//!
//! The fetcher sends browser-mimicking headers with a bounded timeout and
//! returns the raw HTML of the page. Every call issues exactly one upstream
//! request; there are no retries. The [`Fetch`] trait is the seam that lets
//! the scraper take a test double instead of the network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, ACCEPT, ACCEPT_LANGUAGE, REFERER};
use tracing::debug;

use crate::error::{AnimeFireError, Result};

/// Base URL for animefire.plus
pub const BASE_URL: &str = "https://animefire.plus";

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0 Safari/537.36";

/// Default Accept header for HTML pages
const DEFAULT_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Default Accept-Language header for Brazilian Portuguese content
const DEFAULT_ACCEPT_LANGUAGE: &str = "pt-BR,pt;q=0.9,en;q=0.8";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Immutable configuration for the HTTP fetcher
///
/// Fixed at construction and shared by every request the fetcher makes;
/// there is no ambient mutable session state.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// User-Agent header value
    pub user_agent: String,
    /// Accept header value
    pub accept: String,
    /// Accept-Language header value
    pub accept_language: String,
    /// Referer header value
    pub referer: String,
    /// Request timeout in seconds (default: 15)
    pub timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            referer: BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Page retrieval seam used by the scraper
///
/// Production uses [`HttpFetcher`]; tests substitute a stub that serves
/// fixture HTML and counts calls.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch the raw HTML of `url`
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP fetcher backed by a reqwest client
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(FetcherConfig::default())
    }

    /// Create a fetcher with a custom configuration
    ///
    /// # Errors
    /// Returns an error if a header value cannot be encoded or the HTTP
    /// client cannot be created
    pub fn with_config(config: FetcherConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            config
                .accept
                .parse()
                .map_err(|_| AnimeFireError::InvalidHeader("accept".to_string()))?,
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            config
                .accept_language
                .parse()
                .map_err(|_| AnimeFireError::InvalidHeader("accept-language".to_string()))?,
        );
        headers.insert(
            REFERER,
            config
                .referer
                .parse()
                .map_err(|_| AnimeFireError::InvalidHeader("referer".to_string()))?,
        );

        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url, "fetching page");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                AnimeFireError::Timeout(url.to_string())
            } else {
                AnimeFireError::Http(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnimeFireError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(AnimeFireError::Http)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_fetcher_config_default() {
        let config = FetcherConfig::default();
        assert_eq!(config.timeout_secs, 15);
        assert_eq!(config.referer, "https://animefire.plus");
        assert!(config.accept_language.starts_with("pt-BR"));
    }

    #[test]
    fn test_fetcher_creation() {
        assert!(HttpFetcher::new().is_ok());
    }

    #[tokio::test]
    async fn test_fetch_success_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/home/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let html = fetcher.fetch(&format!("{}/home/1", server.uri())).await.unwrap();
        assert_eq!(html, "<html>ok</html>");
    }

    #[tokio::test]
    async fn test_fetch_sends_fixed_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("accept-language", "pt-BR,pt;q=0.9,en;q=0.8"))
            .and(header("referer", "https://animefire.plus"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let result = fetcher.fetch(&server.uri()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let result = fetcher.fetch(&server.uri()).await;

        match result {
            Err(AnimeFireError::Status { status, .. }) => assert_eq!(status, 500),
            other => panic!("expected Status error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new().unwrap();
        let result = fetcher.fetch(&server.uri()).await;

        match result {
            Err(AnimeFireError::Status { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected Status error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_fetch_timeout_is_distinguished() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("slow")
                    .set_delay(Duration::from_millis(1500)),
            )
            .mount(&server)
            .await;

        let config = FetcherConfig {
            timeout_secs: 1,
            ..FetcherConfig::default()
        };
        let fetcher = HttpFetcher::with_config(config).unwrap();
        let result = fetcher.fetch(&server.uri()).await;

        assert!(matches!(result, Err(AnimeFireError::Timeout(_))));
    }
}
