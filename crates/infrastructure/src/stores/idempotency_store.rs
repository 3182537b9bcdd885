use super::map_sqlx_error;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use corral_application::ports::IdempotencyStore;
use corral_domain::DomainError;
use sqlx::SqlitePool;
use tracing::instrument;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct SqliteIdempotencyStore {
    pool: SqlitePool,
}

impl SqliteIdempotencyStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdempotencyStore for SqliteIdempotencyStore {
    /// First-writer-wins: the primary key makes the insert race-safe, a
    /// replay simply affects zero rows.
    #[instrument(skip(self))]
    async fn register(&self, key: &str) -> Result<bool, DomainError> {
        let now = Utc::now().format(TIMESTAMP_FORMAT).to_string();

        let result =
            sqlx::query("INSERT OR IGNORE INTO idempotency_keys (key, created_at) VALUES (?, ?)")
                .bind(key)
                .bind(&now)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self))]
    async fn purge_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let cutoff = cutoff.format(TIMESTAMP_FORMAT).to_string();

        let result = sqlx::query("DELETE FROM idempotency_keys WHERE created_at < ?")
            .bind(&cutoff)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }
}
