//! Suggestion cache backends.
//!
//! The fetcher only sees [`SuggestionCache`]; the server wires in
//! [`MemoryCache`], tests are free to substitute their own.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::error::{CacheError, Result};
use crate::suggest::Suggestion;

/// Store handle shared between the cache backend and the cleanup task.
pub type SharedStore = Arc<RwLock<CacheStore<Vec<Suggestion>>>>;

/// Key-value store holding suggestion lists with an expiry.
#[async_trait]
pub trait SuggestionCache: Send + Sync {
    /// Returns the live value stored under `key`, if any.
    async fn get(&self, key: &str) -> Option<Vec<Suggestion>>;

    /// Stores `value` under `key` for `ttl`.
    async fn set(&self, key: &str, value: Vec<Suggestion>, ttl: Duration) -> Result<()>;
}

/// In-process cache backed by a [`CacheStore`].
#[derive(Clone)]
pub struct MemoryCache {
    store: SharedStore,
}

impl MemoryCache {
    /// Creates an empty cache holding at most `max_entries` keywords.
    pub fn new(max_entries: usize, default_ttl: u64) -> Self {
        Self::from_store(Arc::new(RwLock::new(CacheStore::new(
            max_entries,
            default_ttl,
        ))))
    }

    pub fn from_store(store: SharedStore) -> Self {
        Self { store }
    }

    /// The underlying store, for the cleanup task.
    pub fn store(&self) -> SharedStore {
        Arc::clone(&self.store)
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }
}

#[async_trait]
impl SuggestionCache for MemoryCache {
    async fn get(&self, key: &str) -> Option<Vec<Suggestion>> {
        // Write lock: a read updates LRU order and hit counters
        let mut store = self.store.write().await;
        match store.get(key) {
            Ok(value) => Some(value),
            Err(CacheError::Expired(_)) => {
                debug!(%key, "Cache entry expired");
                None
            }
            Err(_) => None,
        }
    }

    async fn set(&self, key: &str, value: Vec<Suggestion>, ttl: Duration) -> Result<()> {
        let mut store = self.store.write().await;
        store.set(key.to_string(), value, Some(ttl.as_secs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_cache_roundtrip() {
        let cache = MemoryCache::new(10, 3600);
        let value = vec![Suggestion::new("shoes for men", 600)];

        cache
            .set("suggestions:shoes", value.clone(), Duration::from_secs(3600))
            .await
            .unwrap();

        assert_eq!(cache.get("suggestions:shoes").await, Some(value));
        assert_eq!(cache.get("suggestions:boots").await, None);

        let stats = cache.stats().await;
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[tokio::test]
    async fn test_memory_cache_expiry() {
        let cache = MemoryCache::new(10, 3600);

        cache
            .set("suggestions:a", vec![Suggestion::new("a", 1)], Duration::from_secs(1))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(1100)).await;

        assert_eq!(cache.get("suggestions:a").await, None);
    }

    #[tokio::test]
    async fn test_memory_cache_zero_capacity_rejects_writes() {
        let cache = MemoryCache::new(0, 3600);

        let result = cache
            .set("suggestions:a", vec![Suggestion::new("a", 1)], Duration::from_secs(60))
            .await;
        assert!(matches!(result, Err(CacheError::CacheFull(_))));
    }

    #[tokio::test]
    async fn test_store_handle_is_shared() {
        let cache = MemoryCache::new(10, 3600);
        cache
            .set("suggestions:x", vec![Suggestion::new("x", 0)], Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(cache.store().read().await.len(), 1);
    }
}
