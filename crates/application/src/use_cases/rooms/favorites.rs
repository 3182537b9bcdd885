use crate::ports::ZooQueries;
use crate::resilience::CircuitBreaker;
use corral_domain::{DomainError, FavoriteRoomCount};
use std::sync::Arc;
use tracing::instrument;

/// Most-favorited-rooms aggregation. Uncached: it is an admin-facing report
/// and invalidating it on every favorite change would buy nothing.
pub struct FavoriteRoomCountsUseCase {
    queries: Arc<dyn ZooQueries>,
    breaker: Arc<CircuitBreaker>,
}

impl FavoriteRoomCountsUseCase {
    pub fn new(queries: Arc<dyn ZooQueries>, breaker: Arc<CircuitBreaker>) -> Self {
        Self { queries, breaker }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Vec<FavoriteRoomCount>, DomainError> {
        self.breaker
            .call_with(
                || self.queries.favorite_room_counts(),
                DomainError::is_downstream_fault,
            )
            .await
            .map_err(DomainError::from)
    }
}
