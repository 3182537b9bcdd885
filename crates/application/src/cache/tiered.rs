use super::LocalCache;
use crate::ports::DistributedCache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Read-through cache combining the local LRU tier with an optional
/// distributed tier.
///
/// Lookup order is local, then distributed (promoting on a distributed hit).
/// Writes land in the local tier synchronously; distributed writes and
/// deletes are fire-and-forget. A distributed failure is logged and degrades
/// to cache-miss behavior, it never reaches the caller.
pub struct TieredCache {
    local: LocalCache,
    distributed: Option<Arc<dyn DistributedCache>>,
    distributed_ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

#[derive(Debug, Clone)]
pub struct CacheStats {
    pub local_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub mode: &'static str,
}

impl TieredCache {
    pub fn new(
        local_max_entries: usize,
        local_ttl: Duration,
        distributed_ttl: Duration,
        distributed: Option<Arc<dyn DistributedCache>>,
    ) -> Self {
        Self {
            local: LocalCache::new(local_max_entries, local_ttl),
            distributed,
            distributed_ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub async fn get(&self, key: &str) -> Option<Arc<Vec<u8>>> {
        if let Some(data) = self.local.get(key) {
            debug!(key = %key, "cache hit (local)");
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Some(data);
        }

        if let Some(distributed) = &self.distributed {
            match distributed.get(key).await {
                Ok(Some(data)) => {
                    debug!(key = %key, "cache hit (distributed)");
                    self.hits.fetch_add(1, Ordering::Relaxed);
                    let data = Arc::new(data);
                    self.local.put(key.to_string(), Arc::clone(&data));
                    return Some(data);
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(key = %key, error = %e, "Distributed cache read failed, treating as miss");
                }
            }
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    /// Expired-but-retained local entry, if any. The distributed tier is
    /// TTL-bounded so it holds no stale data worth consulting.
    pub fn get_stale(&self, key: &str) -> Option<Arc<Vec<u8>>> {
        self.local.get_stale(key)
    }

    pub async fn put(&self, key: &str, value: Vec<u8>) {
        let data = Arc::new(value);
        self.local.put(key.to_string(), Arc::clone(&data));

        if let Some(distributed) = &self.distributed {
            let distributed = Arc::clone(distributed);
            let key = key.to_string();
            let ttl = self.distributed_ttl;
            tokio::spawn(async move {
                if let Err(e) = distributed.set(&key, &data, ttl).await {
                    warn!(key = %key, error = %e, "Distributed cache write failed");
                }
            });
        }
    }

    /// Local removal completes before this returns; the distributed delete
    /// is dispatched without waiting. Idempotent.
    pub async fn invalidate(&self, key: &str) {
        self.local.invalidate(key);

        if let Some(distributed) = &self.distributed {
            let distributed = Arc::clone(distributed);
            let key = key.to_string();
            tokio::spawn(async move {
                if let Err(e) = distributed.delete(&key).await {
                    warn!(key = %key, error = %e, "Distributed cache delete failed");
                }
            });
        }
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            local_entries: self.local.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.local.evictions(),
            mode: if self.distributed.is_some() {
                "tiered"
            } else {
                "local"
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use corral_domain::DomainError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MapCache {
        entries: Mutex<HashMap<String, Vec<u8>>>,
        fail: bool,
    }

    impl MapCache {
        fn new() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
                fail: true,
            }
        }

        fn insert(&self, key: &str, value: &[u8]) {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_vec());
        }
    }

    #[async_trait]
    impl DistributedCache for MapCache {
        async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
            if self.fail {
                return Err(DomainError::DownstreamFailure("redis down".to_string()));
            }
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &[u8], _ttl: Duration) -> Result<(), DomainError> {
            if self.fail {
                return Err(DomainError::DownstreamFailure("redis down".to_string()));
            }
            self.insert(key, value);
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<(), DomainError> {
            if self.fail {
                return Err(DomainError::DownstreamFailure("redis down".to_string()));
            }
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }
    }

    #[tokio::test]
    async fn distributed_hit_promotes_to_local() {
        let distributed = Arc::new(MapCache::new());
        distributed.insert("animals:1", b"payload");

        let cache = TieredCache::new(
            8,
            Duration::from_secs(60),
            Duration::from_secs(60),
            Some(distributed),
        );

        assert_eq!(
            cache.get("animals:1").await.as_deref(),
            Some(&b"payload".to_vec())
        );
        // Now present locally.
        assert!(cache.local.get("animals:1").is_some());
    }

    #[tokio::test]
    async fn distributed_failure_degrades_to_miss() {
        let cache = TieredCache::new(
            8,
            Duration::from_secs(60),
            Duration::from_secs(60),
            Some(Arc::new(MapCache::failing())),
        );

        assert!(cache.get("animals:1").await.is_none());
        // A put still lands locally even though the distributed write fails.
        cache.put("animals:1", b"payload".to_vec()).await;
        assert!(cache.get("animals:1").await.is_some());
    }

    #[tokio::test]
    async fn invalidate_removes_local_entry_immediately() {
        let cache = TieredCache::new(8, Duration::from_secs(60), Duration::from_secs(60), None);
        cache.put("rooms:7", b"x".to_vec()).await;
        cache.invalidate("rooms:7").await;
        assert!(cache.get("rooms:7").await.is_none());
        cache.invalidate("rooms:7").await;
        assert!(cache.get("rooms:7").await.is_none());
    }
}
