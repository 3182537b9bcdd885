use async_trait::async_trait;
use chrono::{DateTime, Utc};
use corral_domain::DomainError;

/// Storage port for consumed idempotency keys.
///
/// Keys are opaque strings scoped by the client; reusing one across different
/// endpoints shadows the other create, so clients should prefix per API
/// ("ANIMAL-...", "ROOM-..."). Keys expire after the configured TTL and are
/// removed by the retention job.
#[async_trait]
pub trait IdempotencyStore: Send + Sync {
    /// Registers a key. Returns `false` when the key was already consumed.
    async fn register(&self, key: &str) -> Result<bool, DomainError>;

    /// Removes keys registered before `cutoff`, returning how many were
    /// purged.
    async fn purge_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError>;
}
