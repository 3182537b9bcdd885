use crate::repository::CachedRepository;
use corral_domain::{DomainError, Room};
use std::sync::Arc;
use tracing::instrument;

pub struct GetRoomUseCase {
    rooms: Arc<CachedRepository<Room>>,
}

impl GetRoomUseCase {
    pub fn new(rooms: Arc<CachedRepository<Room>>) -> Self {
        Self { rooms }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: &str) -> Result<Room, DomainError> {
        self.rooms.fetch(id).await
    }
}
