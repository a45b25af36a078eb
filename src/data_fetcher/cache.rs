//! Process-local response cache with TTL support.
//!
//! A single injected [`TtlCache`] instance lives in the server state instead
//! of a module-level mutable, which keeps the stale-read/refetch behavior
//! visible and testable. There is deliberately no single-flight coalescing:
//! two requests observing a stale entry concurrently will both refetch and
//! the second write wins. The live-score resource uses one fixed key.

use lru::LruCache;
use serde_json::Value;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

/// A cached payload with its fetch timestamp and freshness window.
#[derive(Debug, Clone)]
pub struct CachedPayload {
    pub payload: Value,
    pub cached_at: Instant,
    pub ttl: Duration,
}

impl CachedPayload {
    pub fn new(payload: Value, ttl: Duration) -> Self {
        Self {
            payload,
            cached_at: Instant::now(),
            ttl,
        }
    }

    /// A payload is fresh strictly within its window; at exactly the window
    /// boundary it counts as stale and the next request refetches.
    pub fn is_fresh(&self) -> bool {
        self.cached_at.elapsed() < self.ttl
    }
}

/// Keyed TTL cache over JSON payloads. Stale entries are ignored on read,
/// not deleted; they stay in the slot until the next successful fetch
/// overwrites them.
pub struct TtlCache {
    entries: RwLock<LruCache<String, CachedPayload>>,
}

impl TtlCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: RwLock::new(LruCache::new(capacity)),
        }
    }

    /// Returns the cached payload for `key` if present and fresh.
    #[instrument(skip(self))]
    pub async fn get(&self, key: &str) -> Option<Value> {
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some(cached) if cached.is_fresh() => {
                debug!(
                    "Cache hit: key={}, age={:?}, ttl={:?}",
                    key,
                    cached.cached_at.elapsed(),
                    cached.ttl
                );
                Some(cached.payload.clone())
            }
            Some(cached) => {
                debug!(
                    "Cache stale: key={}, age={:?}, ttl={:?}",
                    key,
                    cached.cached_at.elapsed(),
                    cached.ttl
                );
                None
            }
            None => {
                debug!("Cache miss: key={key}");
                None
            }
        }
    }

    /// Stores a payload under `key`, overwriting whatever was there.
    #[instrument(skip(self, payload))]
    pub async fn set(&self, key: &str, payload: Value, ttl: Duration) {
        let mut entries = self.entries.write().await;
        entries.put(key.to_string(), CachedPayload::new(payload, ttl));
        info!("Cached payload: key={}, ttl={:?}", key, ttl);
    }

    /// Number of entries currently held, fresh or stale.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for TtlCache {
    fn default() -> Self {
        Self::new(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_returns_fresh_payload() {
        let cache = TtlCache::new(4);
        cache
            .set("live_scores", json!({"live": []}), Duration::from_secs(60))
            .await;
        let cached = cache.get("live_scores").await;
        assert_eq!(cached, Some(json!({"live": []})));
    }

    #[tokio::test]
    async fn test_get_ignores_stale_payload() {
        let cache = TtlCache::new(4);
        cache
            .set("live_scores", json!({"live": []}), Duration::from_secs(0))
            .await;
        // ttl of zero means the entry is stale on arrival
        assert!(cache.get("live_scores").await.is_none());
        // The stale entry is ignored, not deleted
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_set_overwrites_single_slot() {
        let cache = TtlCache::new(4);
        cache
            .set("live_scores", json!({"v": 1}), Duration::from_secs(60))
            .await;
        cache
            .set("live_scores", json!({"v": 2}), Duration::from_secs(60))
            .await;
        assert_eq!(cache.get("live_scores").await, Some(json!({"v": 2})));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_missing_key() {
        let cache = TtlCache::new(4);
        assert!(cache.get("countries").await.is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let cache = TtlCache::new(4);
        cache
            .set("live_scores", json!(1), Duration::from_secs(60))
            .await;
        cache
            .set("countries", json!(2), Duration::from_secs(0))
            .await;
        assert_eq!(cache.get("live_scores").await, Some(json!(1)));
        assert!(cache.get("countries").await.is_none());
    }

    #[test]
    fn test_cached_payload_freshness_boundary() {
        let fresh = CachedPayload::new(json!(null), Duration::from_secs(60));
        assert!(fresh.is_fresh());
        let stale = CachedPayload::new(json!(null), Duration::from_secs(0));
        assert!(!stale.is_fresh());
    }
}
