//! Cache Module
//!
//! In-memory caching with TTL expiration and LRU eviction, plus the
//! `SuggestionCache` seam the fetcher talks to.

mod backend;
mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use backend::{MemoryCache, SharedStore, SuggestionCache};
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::CacheStore;
