use super::map_sqlx_error;
use async_trait::async_trait;
use chrono::Utc;
use corral_application::ports::DocumentStore;
use corral_domain::{Document, DomainError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{error, instrument};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Generic document store over one SQLite table. Each collection keys its
/// rows by `(collection, id)`; the JSON body is authoritative and the
/// version column exists only for the compare-and-swap in `upsert`.
pub struct SqliteDocumentStore<E> {
    pool: SqlitePool,
    _marker: std::marker::PhantomData<fn() -> E>,
}

impl<E> SqliteDocumentStore<E> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<E: Document + Serialize + DeserializeOwned> SqliteDocumentStore<E> {
    fn decode(body: &str) -> Result<E, DomainError> {
        serde_json::from_str(body).map_err(|e| {
            error!(collection = E::COLLECTION, error = %e, "Stored document failed to decode");
            DomainError::DownstreamFailure(format!("corrupt document body: {e}"))
        })
    }
}

#[async_trait]
impl<E> DocumentStore<E> for SqliteDocumentStore<E>
where
    E: Document + Serialize + DeserializeOwned,
{
    #[instrument(skip(self), fields(collection = E::COLLECTION))]
    async fn find(&self, id: &str) -> Result<Option<E>, DomainError> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT body FROM documents WHERE collection = ? AND id = ?")
                .bind(E::COLLECTION)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;

        row.map(|(body,)| Self::decode(&body)).transpose()
    }

    #[instrument(skip(self, entity), fields(collection = E::COLLECTION, id = entity.id()))]
    async fn upsert(&self, entity: &E) -> Result<E, DomainError> {
        let now = Utc::now();
        let mut stored = entity.clone();
        stored.set_version(entity.version() + 1);
        stored.touch(now);

        let body = serde_json::to_string(&stored)
            .map_err(|e| DomainError::Validation(format!("unserializable document: {e}")))?;
        let timestamp = now.format(TIMESTAMP_FORMAT).to_string();

        if entity.version() == 0 {
            sqlx::query(
                "INSERT INTO documents (collection, id, body, version, created_at, updated_at)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(E::COLLECTION)
            .bind(stored.id())
            .bind(&body)
            .bind(stored.version() as i64)
            .bind(&timestamp)
            .bind(&timestamp)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if e
                    .as_database_error()
                    .is_some_and(|db| db.is_unique_violation())
                {
                    // Lost a concurrent-create race.
                    DomainError::VersionMismatch
                } else {
                    map_sqlx_error(e)
                }
            })?;

            return Ok(stored);
        }

        let result = sqlx::query(
            "UPDATE documents SET body = ?, version = ?, updated_at = ?
             WHERE collection = ? AND id = ? AND version = ?",
        )
        .bind(&body)
        .bind(stored.version() as i64)
        .bind(&timestamp)
        .bind(E::COLLECTION)
        .bind(stored.id())
        .bind(entity.version() as i64)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            // Either the row is gone or someone wrote in between.
            let exists: (i64,) = sqlx::query_as(
                "SELECT COUNT(*) FROM documents WHERE collection = ? AND id = ?",
            )
            .bind(E::COLLECTION)
            .bind(stored.id())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

            return if exists.0 > 0 {
                Err(DomainError::VersionMismatch)
            } else {
                Err(DomainError::NotFound(format!(
                    "No document '{}' in {}",
                    stored.id(),
                    E::COLLECTION
                )))
            };
        }

        Ok(stored)
    }

    #[instrument(skip(self), fields(collection = E::COLLECTION))]
    async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
            .bind(E::COLLECTION)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "No document '{id}' in {}",
                E::COLLECTION
            )));
        }

        Ok(())
    }
}
