use lru::LruCache;
use rustc_hash::FxBuildHasher;
use std::hash::{BuildHasher, Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const DEFAULT_SHARDS: usize = 16;

struct LocalEntry {
    data: Arc<Vec<u8>>,
    inserted: Instant,
}

/// Bounded local cache tier: LRU shards keyed by hash, one mutex per shard so
/// unrelated keys never serialize on a global lock.
///
/// Entries past their TTL stop counting as hits but stay in the shard until
/// LRU pressure evicts them; `get_stale` is the only way to read them.
pub struct LocalCache {
    shards: Vec<Mutex<LruCache<String, LocalEntry, FxBuildHasher>>>,
    ttl: Duration,
    hasher: FxBuildHasher,
    evictions: AtomicU64,
}

impl LocalCache {
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self::with_shards(max_entries, ttl, DEFAULT_SHARDS)
    }

    /// Shard count is tunable for tests; per-shard capacity is the bound
    /// divided across shards, never below one entry.
    pub fn with_shards(max_entries: usize, ttl: Duration, shards: usize) -> Self {
        let shards = shards.max(1);
        let per_shard = max_entries.div_ceil(shards).max(1);
        let cap = NonZeroUsize::new(per_shard).expect("per-shard capacity is at least 1");

        let shards = (0..shards)
            .map(|_| Mutex::new(LruCache::with_hasher(cap, FxBuildHasher)))
            .collect();

        Self {
            shards,
            ttl,
            hasher: FxBuildHasher,
            evictions: AtomicU64::new(0),
        }
    }

    fn shard_for(&self, key: &str) -> &Mutex<LruCache<String, LocalEntry, FxBuildHasher>> {
        let mut hasher = self.hasher.build_hasher();
        key.hash(&mut hasher);
        let idx = (hasher.finish() as usize) % self.shards.len();
        &self.shards[idx]
    }

    /// Returns the entry only while it is fresh. A stale entry is left in
    /// place for `get_stale` rather than dropped.
    pub fn get(&self, key: &str) -> Option<Arc<Vec<u8>>> {
        let mut shard = self.shard_for(key).lock().expect("cache shard poisoned");
        let entry = shard.get(key)?;
        if entry.inserted.elapsed() >= self.ttl {
            return None;
        }
        Some(Arc::clone(&entry.data))
    }

    /// Returns the entry regardless of freshness. Used for the stale-read
    /// fallback when the circuit is open.
    pub fn get_stale(&self, key: &str) -> Option<Arc<Vec<u8>>> {
        let mut shard = self.shard_for(key).lock().expect("cache shard poisoned");
        shard.get(key).map(|entry| Arc::clone(&entry.data))
    }

    pub fn put(&self, key: String, data: Arc<Vec<u8>>) {
        let entry = LocalEntry {
            data,
            inserted: Instant::now(),
        };
        let mut shard = self.shard_for(&key).lock().expect("cache shard poisoned");
        if let Some((displaced, _)) = shard.push(key.clone(), entry) {
            // push returns the old pair on overwrite and the LRU pair on
            // eviction; only the latter counts
            if displaced != key {
                self.evictions.fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Removes the entry. Idempotent: removing an absent key is a no-op.
    pub fn invalidate(&self, key: &str) {
        let mut shard = self.shard_for(key).lock().expect("cache shard poisoned");
        shard.pop(key);
    }

    pub fn len(&self) -> usize {
        self.shards
            .iter()
            .map(|s| s.lock().expect("cache shard poisoned").len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        for shard in &self.shards {
            shard.lock().expect("cache shard poisoned").clear();
        }
    }
}
