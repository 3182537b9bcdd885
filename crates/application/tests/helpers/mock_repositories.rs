#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use corral_application::ports::{DocumentStore, IdempotencyStore, ZooQueries};
use corral_application::{CachedRepository, CircuitBreaker, TieredCache};
use corral_domain::config::CircuitConfig;
use corral_domain::{
    Animal, Document, DomainError, FavoriteRoomCount, Page, PageRequest, Room,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock DocumentStore
// ============================================================================

/// How the mock store should misbehave on every call.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    None,
    Timeout,
    Failure,
}

/// In-memory document store with the same optimistic-version contract as the
/// real one.
pub struct MockDocumentStore<E> {
    documents: RwLock<HashMap<String, E>>,
    failure_mode: RwLock<FailureMode>,
    calls: AtomicU64,
}

impl<E: Document> MockDocumentStore<E> {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            failure_mode: RwLock::new(FailureMode::None),
            calls: AtomicU64::new(0),
        }
    }

    pub async fn with_documents(documents: Vec<E>) -> Self {
        let store = Self::new();
        {
            let mut map = store.documents.write().await;
            for doc in documents {
                map.insert(doc.id().to_string(), doc);
            }
        }
        store
    }

    pub async fn set_failure_mode(&self, mode: FailureMode) {
        *self.failure_mode.write().await = mode;
    }

    /// Total store calls across find/upsert/delete, including failed ones.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn count(&self) -> usize {
        self.documents.read().await.len()
    }

    async fn check_failure(&self) -> Result<(), DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match *self.failure_mode.read().await {
            FailureMode::None => Ok(()),
            FailureMode::Timeout => Err(DomainError::DownstreamTimeout),
            FailureMode::Failure => Err(DomainError::DownstreamFailure(
                "mock store down".to_string(),
            )),
        }
    }
}

impl<E: Document> Default for MockDocumentStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Document> DocumentStore<E> for MockDocumentStore<E> {
    async fn find(&self, id: &str) -> Result<Option<E>, DomainError> {
        self.check_failure().await?;
        Ok(self.documents.read().await.get(id).cloned())
    }

    async fn upsert(&self, entity: &E) -> Result<E, DomainError> {
        self.check_failure().await?;
        let mut documents = self.documents.write().await;
        let mut stored = entity.clone();

        match documents.get(entity.id()) {
            None if entity.version() == 0 => {
                stored.set_version(1);
            }
            None => {
                return Err(DomainError::NotFound(format!(
                    "No document '{}'",
                    entity.id()
                )))
            }
            Some(current) if current.version() == entity.version() => {
                stored.set_version(entity.version() + 1);
            }
            Some(_) => return Err(DomainError::VersionMismatch),
        }

        stored.touch(Utc::now());
        documents.insert(stored.id().to_string(), stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.check_failure().await?;
        let mut documents = self.documents.write().await;
        documents
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("No document '{id}'")))
    }
}

// ============================================================================
// Mock IdempotencyStore
// ============================================================================

pub struct MockIdempotencyStore {
    keys: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl MockIdempotencyStore {
    pub fn new() -> Self {
        Self {
            keys: RwLock::new(HashMap::new()),
        }
    }

    pub async fn insert_at(&self, key: &str, at: DateTime<Utc>) {
        self.keys.write().await.insert(key.to_string(), at);
    }

    pub async fn count(&self) -> usize {
        self.keys.read().await.len()
    }
}

impl Default for MockIdempotencyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdempotencyStore for MockIdempotencyStore {
    async fn register(&self, key: &str) -> Result<bool, DomainError> {
        let mut keys = self.keys.write().await;
        if keys.contains_key(key) {
            return Ok(false);
        }
        keys.insert(key.to_string(), Utc::now());
        Ok(true)
    }

    async fn purge_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut keys = self.keys.write().await;
        let before = keys.len();
        keys.retain(|_, at| *at >= cutoff);
        Ok((before - keys.len()) as u64)
    }
}

// ============================================================================
// Mock ZooQueries
// ============================================================================

pub struct MockZooQueries {
    pub animals_by_room: RwLock<HashMap<String, Vec<Animal>>>,
    pub counts: RwLock<Vec<FavoriteRoomCount>>,
}

impl MockZooQueries {
    pub fn new() -> Self {
        Self {
            animals_by_room: RwLock::new(HashMap::new()),
            counts: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MockZooQueries {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ZooQueries for MockZooQueries {
    async fn find_animals_by_room(
        &self,
        room_id: &str,
        page: &PageRequest,
    ) -> Result<Page<Animal>, DomainError> {
        let map = self.animals_by_room.read().await;
        let items = map.get(room_id).cloned().unwrap_or_default();
        let total = items.len() as u64;
        Ok(Page {
            items,
            page: page.page,
            size: page.size,
            total,
        })
    }

    async fn favorite_room_counts(&self) -> Result<Vec<FavoriteRoomCount>, DomainError> {
        Ok(self.counts.read().await.clone())
    }
}

// ============================================================================
// Builders
// ============================================================================

pub fn make_animal(id: &str, title: &str) -> Animal {
    let mut animal = Animal::new(title.to_string(), None);
    animal.id = id.to_string();
    animal.version = 1;
    animal
}

pub fn make_room(id: &str, title: &str) -> Room {
    let mut room = Room::new(title.to_string());
    room.id = id.to_string();
    room.version = 1;
    room
}

/// Fast-reacting breaker config for tests: trips after 2 failures, cools
/// down in 60s (effectively never within a test).
pub fn test_circuit_config() -> CircuitConfig {
    CircuitConfig {
        failure_rate_threshold: 0.5,
        window_secs: 60,
        min_calls: 2,
        cooldown_secs: 60,
        half_open_trials: 1,
        call_timeout_ms: 1000,
    }
}

pub fn test_cache(ttl: Duration) -> Arc<TieredCache> {
    Arc::new(TieredCache::new(64, ttl, ttl, None))
}

pub fn test_repository<E>(
    store: Arc<MockDocumentStore<E>>,
    cache: Arc<TieredCache>,
    breaker: Arc<CircuitBreaker>,
    stale_fallback: bool,
) -> Arc<CachedRepository<E>>
where
    E: Document + serde::Serialize + serde::de::DeserializeOwned,
{
    Arc::new(CachedRepository::new(store, cache, breaker, stale_fallback))
}
