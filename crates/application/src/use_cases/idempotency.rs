use crate::ports::IdempotencyStore;
use chrono::{Duration as ChronoDuration, Utc};
use corral_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Consumes an idempotency key, rejecting replays.
pub async fn register_key(store: &dyn IdempotencyStore, key: &str) -> Result<(), DomainError> {
    if key.trim().is_empty() {
        return Err(DomainError::Validation(
            "Idempotency-Key must not be empty".to_string(),
        ));
    }

    if !store.register(key).await? {
        warn!(key = %key, "Duplicate idempotency key");
        return Err(DomainError::DuplicateRequest);
    }

    Ok(())
}

/// Purges idempotency keys older than the configured TTL. Driven by the
/// retention job.
pub struct PurgeExpiredKeysUseCase {
    store: Arc<dyn IdempotencyStore>,
    ttl_secs: u64,
}

impl PurgeExpiredKeysUseCase {
    pub fn new(store: Arc<dyn IdempotencyStore>, ttl_secs: u64) -> Self {
        Self { store, ttl_secs }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<u64, DomainError> {
        let cutoff = Utc::now() - ChronoDuration::seconds(self.ttl_secs as i64);
        let purged = self.store.purge_older_than(cutoff).await?;
        if purged > 0 {
            info!(purged, "Expired idempotency keys purged");
        }
        Ok(purged)
    }
}
