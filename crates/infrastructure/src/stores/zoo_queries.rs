use super::map_sqlx_error;
use async_trait::async_trait;
use corral_application::ports::ZooQueries;
use corral_domain::{Animal, DomainError, FavoriteRoomCount, Page, PageRequest, SortOrder};
use sqlx::SqlitePool;
use tracing::{error, instrument};

/// Read-side queries over the document table using SQLite's JSON functions.
pub struct SqliteZooQueries {
    pool: SqlitePool,
}

impl SqliteZooQueries {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Maps a caller-facing sort field to a JSON path. Anything else falls
    /// back to title rather than interpolating caller input into SQL.
    fn sort_path(field: &str) -> &'static str {
        match field {
            "located" => "$.located",
            "created" => "$.created",
            _ => "$.title",
        }
    }
}

#[async_trait]
impl ZooQueries for SqliteZooQueries {
    #[instrument(skip(self, page))]
    async fn find_animals_by_room(
        &self,
        room_id: &str,
        page: &PageRequest,
    ) -> Result<Page<Animal>, DomainError> {
        let direction = match page.order {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        };
        let query = format!(
            "SELECT body FROM documents
             WHERE collection = 'animals' AND json_extract(body, '$.room_id') = ?
             ORDER BY json_extract(body, '{}') {direction}
             LIMIT ? OFFSET ?",
            Self::sort_path(&page.sort)
        );

        let rows: Vec<(String,)> = sqlx::query_as(&query)
            .bind(room_id)
            .bind(i64::from(page.size))
            // u32::MAX * u32::MAX exceeds i64; clamp rather than wrap negative.
            .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let total: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM documents
             WHERE collection = 'animals' AND json_extract(body, '$.room_id') = ?",
        )
        .bind(room_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let mut items = Vec::with_capacity(rows.len());
        for (body,) in rows {
            let animal = serde_json::from_str(&body).map_err(|e| {
                error!(error = %e, "Stored animal failed to decode");
                DomainError::DownstreamFailure(format!("corrupt document body: {e}"))
            })?;
            items.push(animal);
        }

        Ok(Page {
            items,
            page: page.page,
            size: page.size,
            total: total.0 as u64,
        })
    }

    #[instrument(skip(self))]
    async fn favorite_room_counts(&self) -> Result<Vec<FavoriteRoomCount>, DomainError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT json_extract(body, '$.title') AS title,
                    json_array_length(body, '$.favorited_by_animal_ids') AS fav_count
             FROM documents
             WHERE collection = 'rooms'
             ORDER BY fav_count DESC, title ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(rows
            .into_iter()
            .map(|(title, fav_count)| FavoriteRoomCount {
                title,
                fav_count: fav_count.max(0) as u64,
            })
            .collect())
    }
}
