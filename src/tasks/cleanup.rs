//! TTL Cleanup Task
//!
//! Background task that periodically removes expired suggestion lists.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedStore;

/// Spawns a background task that purges expired cache entries every
/// `cleanup_interval_secs` seconds.
///
/// Reads already treat expired entries as misses; the purge only bounds
/// memory held by keywords nobody asks for again.
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
pub fn spawn_cleanup_task(store: SharedStore, cleanup_interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} seconds",
            interval.as_secs()
        );

        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let removed = store.write().await.cleanup_expired();

            if removed > 0 {
                info!("TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!("TTL cleanup: no expired entries found");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;
    use crate::suggest::Suggestion;

    #[tokio::test]
    async fn test_cleanup_task_removes_expired_entries() {
        let cache = MemoryCache::new(100, 3600);
        let store = cache.store();
        {
            let mut guard = store.write().await;
            guard
                .set("suggestions:old".to_string(), vec![Suggestion::new("old", 1)], Some(1))
                .unwrap();
            guard
                .set("suggestions:new".to_string(), vec![Suggestion::new("new", 1)], Some(3600))
                .unwrap();
        }

        let handle = spawn_cleanup_task(store.clone(), 1);

        tokio::time::sleep(Duration::from_millis(2500)).await;

        // Checked through len() so the purge, not a read, is what removed it
        assert_eq!(store.read().await.len(), 1);
        assert_eq!(cache.stats().await.total_entries, 1);

        handle.abort();
    }

    #[tokio::test]
    async fn test_cleanup_task_can_be_aborted() {
        let handle = spawn_cleanup_task(MemoryCache::new(10, 60).store(), 1);

        handle.abort();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(handle.is_finished(), "Task should be finished after abort");
    }
}
