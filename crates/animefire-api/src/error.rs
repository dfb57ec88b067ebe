//! API error mapping
//!
//! The library's error taxonomy is collapsed at this boundary: client input
//! problems become 400, every upstream failure becomes one 500 with a fixed
//! message. The richer variant is only logged.

use animefire_core::AnimeFireError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

/// Error returned by API handlers
#[derive(Debug)]
pub enum AppError {
    /// A required query parameter was absent
    MissingParam(&'static str),
    /// The scraper failed
    Scrape(AnimeFireError),
}

impl From<AnimeFireError> for AppError {
    fn from(e: AnimeFireError) -> Self {
        AppError::Scrape(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::MissingParam(name) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required parameter: {}", name),
            ),
            AppError::Scrape(AnimeFireError::InvalidQuery(msg)) => {
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Scrape(e) => {
                warn!(error = %e, "upstream fetch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to load page".to_string(),
                )
            }
        };

        (
            status,
            Json(json!({ "success": false, "error": message })),
        )
            .into_response()
    }
}

/// Result type alias for API handlers
pub type AppResult<T> = Result<T, AppError>;
