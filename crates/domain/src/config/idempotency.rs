use serde::{Deserialize, Serialize};

/// Idempotency key retention configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdempotencyConfig {
    /// Seconds a consumed key stays registered (default: 86400)
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Interval between purge runs in seconds (default: 3600)
    #[serde(default = "default_purge_interval_secs")]
    pub purge_interval_secs: u64,
}

impl Default for IdempotencyConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            purge_interval_secs: default_purge_interval_secs(),
        }
    }
}

fn default_ttl_secs() -> u64 {
    86_400
}

fn default_purge_interval_secs() -> u64 {
    3_600
}
