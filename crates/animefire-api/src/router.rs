//! Route table

use axum::middleware;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::{auth, handlers};

/// Build the application router.
///
/// Every `/api/animes/*` route sits behind the API-key gate; `/health`
/// does not.
pub fn create_router(state: AppState) -> Router {
    let gated = Router::new()
        .route("/api/animes/popular", get(handlers::popular))
        .route("/api/animes/latest", get(handlers::latest))
        .route("/api/animes/search", get(handlers::search))
        .route("/api/animes/details", get(handlers::details))
        .route("/api/animes/episodes", get(handlers::episodes))
        .route("/api/animes/video", get(handlers::video))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ));

    Router::new()
        .route("/health", get(handlers::health))
        .merge(gated)
        .with_state(state)
}
