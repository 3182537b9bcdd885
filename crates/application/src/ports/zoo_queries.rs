use async_trait::async_trait;
use corral_domain::{Animal, DomainError, FavoriteRoomCount, Page, PageRequest};

/// Read-side queries that go beyond by-id lookup. These bypass the cache and
/// hit the store directly; callers wrap them with the circuit breaker.
#[async_trait]
pub trait ZooQueries: Send + Sync {
    /// Paged listing of the animals placed in a room.
    async fn find_animals_by_room(
        &self,
        room_id: &str,
        page: &PageRequest,
    ) -> Result<Page<Animal>, DomainError>;

    /// Rooms with how many animals favorited each, most favorited first.
    async fn favorite_room_counts(&self) -> Result<Vec<FavoriteRoomCount>, DomainError>;
}
