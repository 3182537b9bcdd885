use crate::repository::CachedRepository;
use corral_domain::{validate_if_match, Animal, DomainError, Room};
use std::sync::Arc;
use tracing::{info, instrument};

/// Moves animals in and out of rooms.
pub struct MoveAnimalUseCase {
    animals: Arc<CachedRepository<Animal>>,
    rooms: Arc<CachedRepository<Room>>,
}

impl MoveAnimalUseCase {
    pub fn new(animals: Arc<CachedRepository<Animal>>, rooms: Arc<CachedRepository<Room>>) -> Self {
        Self { animals, rooms }
    }

    #[instrument(skip(self))]
    pub async fn assign(
        &self,
        animal_id: &str,
        room_id: &str,
        if_match: Option<&str>,
    ) -> Result<Animal, DomainError> {
        let mut animal = self.animals.fetch(animal_id).await?;
        validate_if_match(animal.version, if_match)?;

        // The target room must exist; absence is a caller mistake, not a 404
        // on the animal resource
        let room = self.rooms.fetch(room_id).await.map_err(|e| match e {
            DomainError::NotFound(_) => {
                DomainError::Validation(format!("Room {room_id} not found"))
            }
            other => other,
        })?;

        animal.room_id = Some(room.id.clone());
        let saved = self.animals.save(&animal).await?;

        info!(animal_id = %animal_id, room_id = %room_id, "Animal placed in room");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn remove(
        &self,
        animal_id: &str,
        room_id: &str,
        if_match: Option<&str>,
    ) -> Result<(), DomainError> {
        let mut animal = self.animals.fetch(animal_id).await?;
        validate_if_match(animal.version, if_match)?;

        if animal.room_id.as_deref() != Some(room_id) {
            return Err(DomainError::Validation(
                "Animal not in specified room".to_string(),
            ));
        }

        animal.room_id = None;
        self.animals.save(&animal).await?;

        info!(animal_id = %animal_id, room_id = %room_id, "Animal removed from room");
        Ok(())
    }
}
