//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::debug;

use crate::api::export;
use crate::cache::MemoryCache;
use crate::config::Config;
use crate::error::{ApiError, ProviderError};
use crate::models::{AnalyzeRequest, AnalyzeResponse, HealthResponse, StatsResponse};
use crate::suggest::{HttpSuggestProvider, SuggestionFetcher, SuggestionProvider};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache-checked suggestion lookup
    pub fetcher: SuggestionFetcher,
    /// Cache backing the fetcher, kept for stats and cleanup
    pub cache: MemoryCache,
}

impl AppState {
    /// Creates a new AppState around a provider and cache.
    pub fn new(
        cache: MemoryCache,
        provider: Arc<dyn SuggestionProvider>,
        ttl: std::time::Duration,
    ) -> Self {
        let fetcher = SuggestionFetcher::new(Arc::new(cache.clone()), provider, ttl);
        Self { fetcher, cache }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails only if the HTTP client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, ProviderError> {
        let cache = MemoryCache::new(config.max_entries, config.cache_ttl);
        let provider = HttpSuggestProvider::from_config(config)?;
        Ok(Self::new(cache, Arc::new(provider), config.cache_ttl()))
    }
}

/// Pulls a usable keyword out of the request body.
///
/// An unreadable body is reported the same way as a missing keyword.
fn require_keyword(
    payload: std::result::Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<String, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        debug!(error = %rejection, "Rejected analyze request body");
        ApiError::NoKeyword
    })?;

    req.keyword().map(str::to_string).ok_or(ApiError::NoKeyword)
}

/// Handler for POST /api/analyze
///
/// Returns the related keywords for the posted keyword.
pub async fn analyze_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let keyword = require_keyword(payload)?;
    let suggestions = state.fetcher.fetch(&keyword).await?;

    Ok(Json(AnalyzeResponse::new(suggestions)))
}

/// Handler for POST /api/analyze/csv
///
/// Same lookup as `analyze_handler`, delivered as a CSV download.
pub async fn analyze_csv_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let keyword = require_keyword(payload)?;
    let suggestions = state.fetcher.fetch(&keyword).await?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"{}\"",
                export::csv_filename(&keyword)
            ),
        ),
    ];

    Ok((headers, export::render_csv(&suggestions)))
}

/// Handler for GET /stats
///
/// Returns suggestion cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.cache.stats().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
