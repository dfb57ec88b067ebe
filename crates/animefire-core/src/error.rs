//! Error types for the AnimeFire scraper
//!
//! The library keeps a richer error taxonomy than the HTTP API exposes:
//! timeouts, bad statuses and transport failures stay distinguishable here
//! even though the API collapses them into a single "page load failed"
//! response.

use thiserror::Error;

/// Error type for AnimeFire scraper operations
#[derive(Error, Debug)]
pub enum AnimeFireError {
    /// Request exceeded the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Upstream answered with a non-success status code
    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Network or HTTP transport failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse HTML or embedded data
    #[error("Failed to parse page content: {0}")]
    Parse(String),

    /// Search query was empty or whitespace-only
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    /// A configured header value could not be encoded
    #[error("Invalid header value for {0}")]
    InvalidHeader(String),
}

/// Result type alias for AnimeFire scraper operations
pub type Result<T> = std::result::Result<T, AnimeFireError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_timeout() {
        let error = AnimeFireError::Timeout("https://animefire.plus/home/1".to_string());
        assert_eq!(
            error.to_string(),
            "Request timed out: https://animefire.plus/home/1"
        );
    }

    #[test]
    fn test_error_display_status() {
        let error = AnimeFireError::Status {
            url: "https://animefire.plus/home/1".to_string(),
            status: 503,
        };
        assert_eq!(
            error.to_string(),
            "Request to https://animefire.plus/home/1 returned status 503"
        );
    }

    #[test]
    fn test_error_display_parse() {
        let error = AnimeFireError::Parse("bad video source blob".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to parse page content: bad video source blob"
        );
    }

    #[test]
    fn test_error_display_invalid_query() {
        let error = AnimeFireError::InvalidQuery("query cannot be empty".to_string());
        assert!(error.to_string().contains("empty"));
    }

    #[test]
    fn test_error_display_invalid_header() {
        let error = AnimeFireError::InvalidHeader("accept-language".to_string());
        assert_eq!(error.to_string(), "Invalid header value for accept-language");
    }
}
