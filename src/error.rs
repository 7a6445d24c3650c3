//! Error types for the suggestion server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Errors raised by the in-memory cache store.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key not found in cache
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Key has expired
    #[error("Key expired: {0}")]
    Expired(String),

    /// Cache is full and eviction failed
    #[error("Cache full: {0}")]
    CacheFull(String),
}

// == Provider Error Enum ==
/// Failure to obtain suggestions from the upstream provider.
///
/// The display form is the bare cause; the HTTP layer adds its own prefix.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport failure, timeout or non-success status
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Body was not valid JSON
    #[error("invalid JSON in provider response: {0}")]
    Json(#[from] serde_json::Error),

    /// Body was JSON but not the expected suggestion array
    #[error("unexpected provider response: {0}")]
    Malformed(String),
}

// == API Error Enum ==
/// Errors surfaced to HTTP clients.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request carried no usable keyword
    #[error("No keyword")]
    NoKeyword,

    /// Upstream provider call failed
    #[error("Failed to fetch suggestions: {0}")]
    Provider(#[from] ProviderError),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoKeyword => StatusCode::BAD_REQUEST,
            ApiError::Provider(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let ApiError::Provider(err) = &self {
            tracing::warn!(error = %err, "Suggestion provider call failed");
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache store operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_messages() {
        assert_eq!(ApiError::NoKeyword.to_string(), "No keyword");

        let err = ApiError::from(ProviderError::Malformed("missing suggestions".to_string()));
        assert_eq!(
            err.to_string(),
            "Failed to fetch suggestions: unexpected provider response: missing suggestions"
        );
    }

    #[test]
    fn test_error_status_codes() {
        let test_cases = vec![
            (ApiError::NoKeyword, StatusCode::BAD_REQUEST),
            (
                ApiError::Provider(ProviderError::Malformed("bad".to_string())),
                StatusCode::BAD_GATEWAY,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(
                response.status(),
                expected_status,
                "Error should map to correct HTTP status"
            );
        }
    }

    #[test]
    fn test_json_error_is_provider_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ProviderError = json_err.into();
        assert!(matches!(err, ProviderError::Json(_)));
        assert!(err.to_string().starts_with("invalid JSON in provider response"));
    }
}
