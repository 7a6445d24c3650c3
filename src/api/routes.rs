//! API Routes
//!
//! Configures the Axum router with all endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    analyze_csv_handler, analyze_handler, health_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /api/analyze` - Related keywords for a keyword
/// - `POST /api/analyze/csv` - Same, as a CSV download
/// - `GET /stats` - Suggestion cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin, the browser extension calls cross-origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .route("/api/analyze/csv", post(analyze_csv_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::error::ProviderError;
    use crate::suggest::{ProviderResponse, SuggestionProvider};
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use std::time::Duration;
    use tower::util::ServiceExt;

    struct DownProvider;

    #[async_trait]
    impl SuggestionProvider for DownProvider {
        async fn complete(&self, _keyword: &str) -> Result<ProviderResponse, ProviderError> {
            Err(ProviderError::Malformed("expected a JSON array".to_string()))
        }
    }

    fn create_test_app() -> Router {
        let state = AppState::new(
            MemoryCache::new(100, 3600),
            Arc::new(DownProvider),
            Duration::from_secs(3600),
        );
        create_router(state)
    }

    fn analyze_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/analyze")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/stats").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_analyze_missing_keyword() {
        let response = create_test_app()
            .oneshot(analyze_request("{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_provider_failure() {
        let response = create_test_app()
            .oneshot(analyze_request(r#"{"keyword":"x"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_analyze_rejects_get() {
        let response = create_test_app()
            .oneshot(Request::builder().uri("/api/analyze").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
