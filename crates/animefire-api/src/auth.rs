//! Shared-secret gate for the API routes
//!
//! A single equality check on a request header; `/health` is mounted
//! outside this layer.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::state::AppState;

/// Header carrying the shared secret
pub const API_KEY_HEADER: &str = "x-app-key";

/// Reject requests whose `X-App-Key` header does not match the configured
/// secret.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if provided != Some(state.config.secret_key.as_str()) {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({
                "success": false,
                "error": "Forbidden: invalid or missing API key"
            })),
        )
            .into_response();
    }

    next.run(request).await
}
