//! Cache-checked suggestion lookup.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::cache::SuggestionCache;
use crate::error::ProviderError;
use crate::suggest::{Suggestion, SuggestionProvider};

/// Prefix of every suggestion cache key.
pub const CACHE_KEY_PREFIX: &str = "suggestions:";

/// Cache key for a keyword. The keyword is used verbatim.
pub fn cache_key(keyword: &str) -> String {
    format!("{}{}", CACHE_KEY_PREFIX, keyword)
}

/// Looks up suggestions, consulting the cache before the provider.
#[derive(Clone)]
pub struct SuggestionFetcher {
    cache: Arc<dyn SuggestionCache>,
    provider: Arc<dyn SuggestionProvider>,
    ttl: Duration,
}

impl SuggestionFetcher {
    /// Creates a fetcher that caches provider results for `ttl`.
    pub fn new(
        cache: Arc<dyn SuggestionCache>,
        provider: Arc<dyn SuggestionProvider>,
        ttl: Duration,
    ) -> Self {
        Self {
            cache,
            provider,
            ttl,
        }
    }

    /// Returns the suggestions for `keyword`.
    ///
    /// A non-empty cached list is returned as is. Otherwise the provider is
    /// queried and a non-empty result cached; a failed cache write is only
    /// logged.
    pub async fn fetch(&self, keyword: &str) -> Result<Vec<Suggestion>, ProviderError> {
        let key = cache_key(keyword);

        if let Some(cached) = self.cache.get(&key).await.filter(|s| !s.is_empty()) {
            debug!(%key, count = cached.len(), "Suggestion cache hit");
            return Ok(cached);
        }
        debug!(%key, "Suggestion cache miss");

        let suggestions = self.provider.complete(keyword).await?.into_suggestions();
        info!(%keyword, count = suggestions.len(), "Fetched suggestions from provider");

        if suggestions.is_empty() {
            return Ok(suggestions);
        }

        if let Err(err) = self.cache.set(&key, suggestions.clone(), self.ttl).await {
            warn!(%key, error = %err, "Failed to cache suggestions");
        }

        Ok(suggestions)
    }
}
