use corral_application::ports::{DistributedCache, DocumentStore, IdempotencyStore, ZooQueries};
use corral_application::{CachedRepository, CircuitBreaker, TieredCache};
use corral_domain::{Animal, Config, Room};
use corral_infrastructure::{
    RedisCache, SqliteDocumentStore, SqliteIdempotencyStore, SqliteZooQueries,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Storage-facing graph: stores, the shared cache and breaker, and the two
/// repository facades everything else goes through.
pub struct Repositories {
    pub animals: Arc<CachedRepository<Animal>>,
    pub rooms: Arc<CachedRepository<Room>>,
    pub idempotency: Arc<dyn IdempotencyStore>,
    pub queries: Arc<dyn ZooQueries>,
    pub cache: Arc<TieredCache>,
    pub breaker: Arc<CircuitBreaker>,
}

impl Repositories {
    pub fn build(pool: SqlitePool, config: &Config) -> Self {
        let distributed = connect_distributed(config);

        let cache = Arc::new(TieredCache::new(
            config.cache.local_max_entries,
            Duration::from_secs(config.cache.local_ttl_secs),
            Duration::from_secs(config.cache.distributed_ttl_secs),
            distributed,
        ));

        // One breaker for the whole document store: if SQLite is struggling
        // it is struggling for every collection.
        let breaker = Arc::new(CircuitBreaker::new(
            "document-store",
            config.circuit.clone(),
        ));

        let animals_store: Arc<dyn DocumentStore<Animal>> =
            Arc::new(SqliteDocumentStore::new(pool.clone()));
        let rooms_store: Arc<dyn DocumentStore<Room>> =
            Arc::new(SqliteDocumentStore::new(pool.clone()));

        let animals = Arc::new(CachedRepository::new(
            animals_store,
            cache.clone(),
            breaker.clone(),
            config.cache.stale_read_fallback,
        ));
        let rooms = Arc::new(CachedRepository::new(
            rooms_store,
            cache.clone(),
            breaker.clone(),
            config.cache.stale_read_fallback,
        ));

        Self {
            animals,
            rooms,
            idempotency: Arc::new(SqliteIdempotencyStore::new(pool.clone())),
            queries: Arc::new(SqliteZooQueries::new(pool)),
            cache,
            breaker,
        }
    }
}

fn connect_distributed(config: &Config) -> Option<Arc<dyn DistributedCache>> {
    let url = config.cache.redis_url.as_deref()?;

    match deadpool_redis::Config::from_url(url)
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
    {
        Ok(pool) => {
            info!(url = %url, "Distributed cache tier enabled");
            Some(Arc::new(RedisCache::new(pool)))
        }
        Err(e) => {
            warn!(error = %e, "Redis pool setup failed, running local-only");
            None
        }
    }
}
