use crate::ports::IdempotencyStore;
use crate::repository::CachedRepository;
use crate::use_cases::idempotency::register_key;
use corral_domain::{DomainError, Room};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct CreateRoomUseCase {
    rooms: Arc<CachedRepository<Room>>,
    idempotency: Arc<dyn IdempotencyStore>,
}

impl CreateRoomUseCase {
    pub fn new(rooms: Arc<CachedRepository<Room>>, idempotency: Arc<dyn IdempotencyStore>) -> Self {
        Self { rooms, idempotency }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, title: String, idempotency_key: &str) -> Result<Room, DomainError> {
        Room::validate_title(&title)?;
        register_key(self.idempotency.as_ref(), idempotency_key).await?;

        let room = Room::new(title);
        let saved = self.rooms.save(&room).await?;

        info!(room_id = %saved.id, "Room created");
        Ok(saved)
    }
}
