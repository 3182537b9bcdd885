#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use corral_api::AppState;
use corral_application::ports::{DocumentStore, IdempotencyStore, ZooQueries};
use corral_application::use_cases::{
    AnimalFavoritesUseCase, CreateAnimalUseCase, CreateRoomUseCase, DeleteAnimalUseCase,
    DeleteRoomUseCase, FavoriteRoomCountsUseCase, GetAnimalUseCase, GetRoomUseCase,
    ListAnimalsInRoomUseCase, MoveAnimalUseCase, UpdateAnimalUseCase, UpdateRoomUseCase,
};
use corral_application::{CachedRepository, CircuitBreaker, TieredCache};
use corral_domain::config::CircuitConfig;
use corral_domain::{
    Animal, Document, DomainError, FavoriteRoomCount, Page, PageRequest, Room,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// In-memory port implementations
// ============================================================================

pub struct MemoryDocumentStore<E> {
    documents: RwLock<HashMap<String, E>>,
    failing: AtomicBool,
}

impl<E: Document> MemoryDocumentStore<E> {
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(HashMap::new()),
            failing: AtomicBool::new(false),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::DownstreamFailure("store down".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl<E: Document> DocumentStore<E> for MemoryDocumentStore<E> {
    async fn find(&self, id: &str) -> Result<Option<E>, DomainError> {
        self.check()?;
        Ok(self.documents.read().await.get(id).cloned())
    }

    async fn upsert(&self, entity: &E) -> Result<E, DomainError> {
        self.check()?;
        let mut documents = self.documents.write().await;
        let mut stored = entity.clone();

        match documents.get(entity.id()) {
            None if entity.version() == 0 => stored.set_version(1),
            None => {
                return Err(DomainError::NotFound(format!(
                    "No document '{}'",
                    entity.id()
                )))
            }
            Some(current) if current.version() == entity.version() => {
                stored.set_version(entity.version() + 1)
            }
            Some(_) => return Err(DomainError::VersionMismatch),
        }

        stored.touch(Utc::now());
        documents.insert(stored.id().to_string(), stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.check()?;
        self.documents
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("No document '{id}'")))
    }
}

pub struct MemoryIdempotencyStore {
    keys: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl MemoryIdempotencyStore {
    pub fn new() -> Self {
        Self {
            keys: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl IdempotencyStore for MemoryIdempotencyStore {
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

pub struct MemoryZooQueries {
    pub counts: RwLock<Vec<FavoriteRoomCount>>,
}

impl MemoryZooQueries {
    pub fn new() -> Self {
        Self {
            counts: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ZooQueries for MemoryZooQueries {
    async fn find_animals_by_room(
        &self,
        _room_id: &str,
        page: &PageRequest,
    ) -> Result<Page<Animal>, DomainError> {
        Ok(Page {
            items: Vec::new(),
            page: page.page,
            size: page.size,
            total: 0,
        })
    }

    async fn favorite_room_counts(&self) -> Result<Vec<FavoriteRoomCount>, DomainError> {
        Ok(self.counts.read().await.clone())
    }
}

// ============================================================================
// Wiring
// ============================================================================

pub struct TestApp {
    pub state: AppState,
    pub animals_store: Arc<MemoryDocumentStore<Animal>>,
    pub rooms_store: Arc<MemoryDocumentStore<Room>>,
    pub queries: Arc<MemoryZooQueries>,
}

pub fn build_test_app() -> TestApp {
    let animals_store = Arc::new(MemoryDocumentStore::<Animal>::new());
    let rooms_store = Arc::new(MemoryDocumentStore::<Room>::new());
    let idempotency: Arc<dyn IdempotencyStore> = Arc::new(MemoryIdempotencyStore::new());
    let queries = Arc::new(MemoryZooQueries::new());

    let cache = Arc::new(TieredCache::new(
        256,
        Duration::from_secs(60),
        Duration::from_secs(60),
        None,
    ));
    let breaker = Arc::new(CircuitBreaker::new(
        "document-store",
        CircuitConfig {
            failure_rate_threshold: 0.5,
            window_secs: 60,
            min_calls: 2,
            cooldown_secs: 60,
            half_open_trials: 1,
            call_timeout_ms: 1000,
        },
    ));

    let animals = Arc::new(CachedRepository::new(
        animals_store.clone() as Arc<dyn DocumentStore<Animal>>,
        cache.clone(),
        breaker.clone(),
        false,
    ));
    let rooms = Arc::new(CachedRepository::new(
        rooms_store.clone() as Arc<dyn DocumentStore<Room>>,
        cache.clone(),
        breaker.clone(),
        false,
    ));

    let state = AppState {
        create_animal: Arc::new(CreateAnimalUseCase::new(
            animals.clone(),
            idempotency.clone(),
        )),
        get_animal: Arc::new(GetAnimalUseCase::new(animals.clone())),
        update_animal: Arc::new(UpdateAnimalUseCase::new(animals.clone())),
        delete_animal: Arc::new(DeleteAnimalUseCase::new(animals.clone())),
        move_animal: Arc::new(MoveAnimalUseCase::new(animals.clone(), rooms.clone())),
        animal_favorites: Arc::new(AnimalFavoritesUseCase::new(
            animals.clone(),
            rooms.clone(),
        )),
        create_room: Arc::new(CreateRoomUseCase::new(rooms.clone(), idempotency)),
        get_room: Arc::new(GetRoomUseCase::new(rooms.clone())),
        update_room: Arc::new(UpdateRoomUseCase::new(rooms.clone())),
        delete_room: Arc::new(DeleteRoomUseCase::new(rooms.clone())),
        list_animals_in_room: Arc::new(ListAnimalsInRoomUseCase::new(
            rooms,
            queries.clone() as Arc<dyn ZooQueries>,
            breaker.clone(),
        )),
        favorite_room_counts: Arc::new(FavoriteRoomCountsUseCase::new(
            queries.clone() as Arc<dyn ZooQueries>,
            breaker.clone(),
        )),
        cache,
        breaker,
    };

    TestApp {
        state,
        animals_store,
        rooms_store,
        queries,
    }
}
