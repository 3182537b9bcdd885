use serde::{Deserialize, Serialize};

/// Two-tier cache configuration.
///
/// The local tier is bounded by entry count with LRU eviction. The
/// distributed tier (Redis) is bounded by TTL only and is optional;
/// without a `redis_url` the service runs local-only.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Maximum entries in the local tier (default: 10000)
    #[serde(default = "default_local_max_entries")]
    pub local_max_entries: usize,

    /// Local entry freshness in seconds (default: 300)
    #[serde(default = "default_local_ttl_secs")]
    pub local_ttl_secs: u64,

    /// Distributed entry TTL in seconds (default: 300)
    #[serde(default = "default_distributed_ttl_secs")]
    pub distributed_ttl_secs: u64,

    /// Redis connection URL; absent means local-only mode
    #[serde(default)]
    pub redis_url: Option<String>,

    /// Serve an expired local entry when the circuit is open (default: false)
    #[serde(default)]
    pub stale_read_fallback: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            local_max_entries: default_local_max_entries(),
            local_ttl_secs: default_local_ttl_secs(),
            distributed_ttl_secs: default_distributed_ttl_secs(),
            redis_url: None,
            stale_read_fallback: false,
        }
    }
}

fn default_local_max_entries() -> usize {
    10_000
}

fn default_local_ttl_secs() -> u64 {
    300
}

fn default_distributed_ttl_secs() -> u64 {
    300
}
