use async_trait::async_trait;
use corral_domain::DomainError;
use std::time::Duration;

/// Distributed (second-tier) cache port.
///
/// Every operation is best-effort from the facade's point of view: the
/// tiered cache logs failures and degrades to cache-miss behavior, it never
/// surfaces them to callers.
#[async_trait]
pub trait DistributedCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError>;

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<(), DomainError>;

    async fn delete(&self, key: &str) -> Result<(), DomainError>;
}
