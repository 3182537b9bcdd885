use crate::cache::TieredCache;
use crate::ports::DocumentStore;
use crate::resilience::{CircuitBreaker, CircuitBreakerError};
use corral_domain::{Document, DomainError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Repository facade: the only path between use cases and a document
/// collection.
///
/// Reads go cache-first; misses fall through to the circuit-breaker-wrapped
/// store and populate the cache on success. Writes always go to the store and
/// invalidate (never update) the cached entry, forcing the next read to
/// repopulate from the source of truth. Cached copies are disposable and
/// never authoritative.
pub struct CachedRepository<E> {
    store: Arc<dyn DocumentStore<E>>,
    cache: Arc<TieredCache>,
    breaker: Arc<CircuitBreaker>,
    stale_fallback: bool,
    _marker: std::marker::PhantomData<fn() -> E>,
}

impl<E> CachedRepository<E>
where
    E: Document + Serialize + DeserializeOwned,
{
    pub fn new(
        store: Arc<dyn DocumentStore<E>>,
        cache: Arc<TieredCache>,
        breaker: Arc<CircuitBreaker>,
        stale_fallback: bool,
    ) -> Self {
        Self {
            store,
            cache,
            breaker,
            stale_fallback,
            _marker: std::marker::PhantomData,
        }
    }

    fn cache_key(id: &str) -> String {
        format!("{}:{}", E::COLLECTION, id)
    }

    /// Cache-first read. A hit never touches the store; a miss performs one
    /// protected store read and populates both tiers on success. Absence is
    /// never cached.
    #[instrument(skip(self), fields(collection = E::COLLECTION))]
    pub async fn fetch(&self, id: &str) -> Result<E, DomainError> {
        let key = Self::cache_key(id);

        if let Some(bytes) = self.cache.get(&key).await {
            match serde_json::from_slice::<E>(&bytes) {
                Ok(entity) => return Ok(entity),
                Err(e) => {
                    // Undecodable payload, drop it and fall through to the
                    // store
                    warn!(key = %key, error = %e, "Discarding corrupt cache entry");
                    self.cache.invalidate(&key).await;
                }
            }
        }

        let result = self
            .breaker
            .call_with(|| self.store.find(id), DomainError::is_downstream_fault)
            .await;

        match result {
            Ok(Some(entity)) => {
                self.populate(&key, &entity).await;
                Ok(entity)
            }
            Ok(None) => Err(DomainError::NotFound(format!(
                "No document '{id}' in {}",
                E::COLLECTION
            ))),
            Err(CircuitBreakerError::Open { retry_after, .. }) => {
                if self.stale_fallback {
                    if let Some(entity) = self.stale_copy(&key) {
                        warn!(key = %key, "Circuit open, serving stale cache entry");
                        return Ok(entity);
                    }
                }
                Err(DomainError::CircuitOpen {
                    retry_after_secs: retry_after.as_secs(),
                })
            }
            Err(CircuitBreakerError::Timeout(_)) => Err(DomainError::DownstreamTimeout),
            Err(CircuitBreakerError::Inner(e)) => Err(e),
        }
    }

    /// Write-through save. On success the cached entry is invalidated so the
    /// next fetch repopulates authoritatively; on any failure the cache is
    /// left untouched.
    #[instrument(skip(self, entity), fields(collection = E::COLLECTION, id = entity.id()))]
    pub async fn save(&self, entity: &E) -> Result<E, DomainError> {
        let result = self
            .breaker
            .call_with(|| self.store.upsert(entity), DomainError::is_downstream_fault)
            .await;

        match result {
            Ok(stored) => {
                self.cache.invalidate(&Self::cache_key(stored.id())).await;
                debug!(id = stored.id(), version = stored.version(), "Document saved");
                Ok(stored)
            }
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self), fields(collection = E::COLLECTION))]
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let result = self
            .breaker
            .call_with(|| self.store.delete(id), DomainError::is_downstream_fault)
            .await;

        match result {
            Ok(()) => {
                self.cache.invalidate(&Self::cache_key(id)).await;
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn populate(&self, key: &str, entity: &E) {
        match serde_json::to_vec(entity) {
            // Last-writer-wins under concurrent population: the data is
            // re-derivable from the store
            Ok(bytes) => self.cache.put(key, bytes).await,
            Err(e) => warn!(key = %key, error = %e, "Skipping cache population"),
        }
    }

    fn stale_copy(&self, key: &str) -> Option<E> {
        let bytes = self.cache.get_stale(key)?;
        serde_json::from_slice(&bytes).ok()
    }
}
