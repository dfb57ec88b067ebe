//! Request handlers
//!
//! Each handler is a thin adapter: extract query parameters, call the
//! scraper, wrap the result in the JSON envelope. All error mapping lives
//! in [`crate::error`].

use animefire_core::{AnimeDetail, AnimeSummary, EpisodePage, VideoSource};
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::models::{ApiResponse, HealthResponse};
use crate::state::AppState;

fn default_page() -> u32 {
    1
}

fn default_batch() -> u32 {
    1
}

/// Query parameters for the listing endpoints
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u32,
}

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    #[serde(default = "default_page")]
    pub page: u32,
}

/// Query parameters for URL-addressed endpoints
#[derive(Debug, Deserialize)]
pub struct UrlQuery {
    pub url: Option<String>,
}

/// Query parameters for the episodes endpoint
#[derive(Debug, Deserialize)]
pub struct EpisodesQuery {
    pub url: Option<String>,
    #[serde(default = "default_batch")]
    pub batch: u32,
}

pub async fn popular(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<ApiResponse<Vec<AnimeSummary>>>> {
    let data = state.scraper.popular(query.page).await?;
    Ok(Json(ApiResponse::ok(data)))
}

pub async fn latest(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<ApiResponse<Vec<AnimeSummary>>>> {
    let data = state.scraper.latest(query.page).await?;
    Ok(Json(ApiResponse::ok(data)))
}

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<ApiResponse<Vec<AnimeSummary>>>> {
    let q = query.q.ok_or(AppError::MissingParam("q"))?;
    let data = state.scraper.search(&q, query.page).await?;
    Ok(Json(ApiResponse::ok(data)))
}

pub async fn details(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> AppResult<Json<ApiResponse<AnimeDetail>>> {
    let url = query.url.ok_or(AppError::MissingParam("url"))?;
    let data = state.scraper.details(&url).await?;
    Ok(Json(ApiResponse::ok(data)))
}

pub async fn episodes(
    State(state): State<AppState>,
    Query(query): Query<EpisodesQuery>,
) -> AppResult<Json<ApiResponse<EpisodePage>>> {
    let url = query.url.ok_or(AppError::MissingParam("url"))?;
    let data = state.scraper.episodes(&url, query.batch).await?;
    Ok(Json(ApiResponse::ok(data)))
}

pub async fn video(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> AppResult<Json<ApiResponse<Vec<VideoSource>>>> {
    let url = query.url.ok_or(AppError::MissingParam("url"))?;
    let data = state.scraper.video(&url).await?;
    Ok(Json(ApiResponse::ok(data)))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        success: true,
        message: "API is running",
        version: env!("CARGO_PKG_VERSION"),
    })
}
