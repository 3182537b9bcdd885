use crate::ports::ZooQueries;
use crate::repository::CachedRepository;
use crate::resilience::CircuitBreaker;
use corral_domain::{Animal, DomainError, Page, PageRequest, Room};
use std::sync::Arc;
use tracing::instrument;

const SORTABLE_FIELDS: &[&str] = &["title", "located", "created"];

/// Paged listing of the animals placed in a room.
pub struct ListAnimalsInRoomUseCase {
    rooms: Arc<CachedRepository<Room>>,
    queries: Arc<dyn ZooQueries>,
    breaker: Arc<CircuitBreaker>,
}

impl ListAnimalsInRoomUseCase {
    pub fn new(
        rooms: Arc<CachedRepository<Room>>,
        queries: Arc<dyn ZooQueries>,
        breaker: Arc<CircuitBreaker>,
    ) -> Self {
        Self {
            rooms,
            queries,
            breaker,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        room_id: &str,
        page: PageRequest,
    ) -> Result<Page<Animal>, DomainError> {
        if !SORTABLE_FIELDS.contains(&page.sort.as_str()) {
            return Err(DomainError::Validation(format!(
                "Cannot sort by '{}', expected one of: {}",
                page.sort,
                SORTABLE_FIELDS.join(", ")
            )));
        }

        // 404 on an unknown room rather than an empty page.
        self.rooms.fetch(room_id).await?;

        self.breaker
            .call_with(
                || self.queries.find_animals_by_room(room_id, &page),
                DomainError::is_downstream_fault,
            )
            .await
            .map_err(DomainError::from)
    }
}
