//! Suggest Module
//!
//! Fetches autocomplete suggestions for a keyword from the upstream provider
//! and caches them.
//!
//! # Flow
//! cache lookup → provider GET on miss → parse → cache write

mod fetcher;
mod model;
mod provider;
mod response;

pub use fetcher::{cache_key, SuggestionFetcher, CACHE_KEY_PREFIX};
pub use model::Suggestion;
pub use provider::{HttpSuggestProvider, SuggestionProvider};
pub use response::ProviderResponse;
