use crate::repository::CachedRepository;
use corral_domain::{validate_if_match, DomainError, Room};
use std::sync::Arc;
use tracing::{info, instrument};

pub struct UpdateRoomUseCase {
    rooms: Arc<CachedRepository<Room>>,
}

impl UpdateRoomUseCase {
    pub fn new(rooms: Arc<CachedRepository<Room>>) -> Self {
        Self { rooms }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        id: &str,
        title: Option<String>,
        if_match: Option<&str>,
    ) -> Result<Room, DomainError> {
        let mut existing = self.rooms.fetch(id).await?;
        validate_if_match(existing.version, if_match)?;

        if let Some(title) = title {
            Room::validate_title(&title)?;
            existing.title = title;
        }

        let saved = self.rooms.save(&existing).await?;
        info!(room_id = %saved.id, version = saved.version, "Room updated");
        Ok(saved)
    }
}
