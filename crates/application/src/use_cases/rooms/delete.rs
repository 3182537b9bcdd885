use crate::repository::CachedRepository;
use corral_domain::{validate_if_match, DomainError, Room};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct DeleteRoomUseCase {
    rooms: Arc<CachedRepository<Room>>,
}

impl DeleteRoomUseCase {
    pub fn new(rooms: Arc<CachedRepository<Room>>) -> Self {
        Self { rooms }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: &str, if_match: Option<&str>) -> Result<(), DomainError> {
        let existing = self.rooms.fetch(id).await?;
        validate_if_match(existing.version, if_match)?;

        self.rooms.delete(id).await?;
        info!(room_id = %id, "Room deleted");
        Ok(())
    }
}
