use async_trait::async_trait;
use corral_application::ports::DistributedCache;
use corral_domain::DomainError;
use deadpool_redis::Pool;
use redis::AsyncCommands;
use std::time::Duration;
use tracing::instrument;

/// Redis adapter for the distributed cache tier. Every entry carries a TTL
/// so the tier is self-cleaning; errors surface as downstream failures and
/// the cache above degrades to local-only behavior.
pub struct RedisCache {
    pool: Pool,
}

impl RedisCache {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    async fn connection(&self) -> Result<deadpool_redis::Connection, DomainError> {
        self.pool
            .get()
            .await
            .map_err(|e| DomainError::DownstreamFailure(format!("redis pool: {e}")))
    }
}

#[async_trait]
impl DistributedCache for RedisCache {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        let mut conn = self.connection().await?;
        conn.get::<_, Option<Vec<u8>>>(key)
            .await
            .map_err(|e| DomainError::DownstreamFailure(format!("redis get: {e}")))
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: &str, value: &[u8], ttl: Duration) -> Result<(), DomainError> {
        let mut conn = self.connection().await?;
        conn.set_ex::<_, _, ()>(key, value, ttl.as_secs())
            .await
            .map_err(|e| DomainError::DownstreamFailure(format!("redis set: {e}")))
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(key)
            .await
            .map_err(|e| DomainError::DownstreamFailure(format!("redis del: {e}")))
    }
}
