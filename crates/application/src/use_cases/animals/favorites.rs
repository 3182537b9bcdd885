use crate::repository::CachedRepository;
use corral_domain::{validate_if_match, Animal, DomainError, Room};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{info, instrument};

/// Maintains the favorite-room relation from both sides: the animal's
/// `favorite_room_ids` and each room's reverse `favorited_by_animal_ids`
/// (kept for fast aggregation).
pub struct AnimalFavoritesUseCase {
    animals: Arc<CachedRepository<Animal>>,
    rooms: Arc<CachedRepository<Room>>,
}

impl AnimalFavoritesUseCase {
    pub fn new(animals: Arc<CachedRepository<Animal>>, rooms: Arc<CachedRepository<Room>>) -> Self {
        Self { animals, rooms }
    }

    #[instrument(skip(self))]
    pub async fn assign(
        &self,
        animal_id: &str,
        room_ids: Vec<String>,
        if_match: Option<&str>,
    ) -> Result<Animal, DomainError> {
        let mut animal = self.animals.fetch(animal_id).await?;
        validate_if_match(animal.version, if_match)?;

        let mut rooms = self.fetch_rooms(&room_ids).await?;

        animal.favorite_room_ids.extend(room_ids.iter().cloned());
        let saved = self.animals.save(&animal).await?;

        for room in &mut rooms {
            if room.favorited_by_animal_ids.insert(saved.id.clone()) {
                self.rooms.save(room).await?;
            }
        }

        info!(animal_id = %animal_id, rooms = room_ids.len(), "Favorite rooms assigned");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn unassign(
        &self,
        animal_id: &str,
        room_ids: Vec<String>,
        if_match: Option<&str>,
    ) -> Result<Animal, DomainError> {
        let mut animal = self.animals.fetch(animal_id).await?;
        validate_if_match(animal.version, if_match)?;

        let mut rooms = self.fetch_rooms(&room_ids).await?;

        for room_id in &room_ids {
            animal.favorite_room_ids.remove(room_id);
        }
        let saved = self.animals.save(&animal).await?;

        for room in &mut rooms {
            if room.favorited_by_animal_ids.remove(animal_id) {
                self.rooms.save(room).await?;
            }
        }

        info!(animal_id = %animal_id, rooms = room_ids.len(), "Favorite rooms unassigned");
        Ok(saved)
    }

    /// All referenced rooms must exist; reports the missing ids in one error.
    async fn fetch_rooms(&self, room_ids: &[String]) -> Result<Vec<Room>, DomainError> {
        let mut rooms = Vec::with_capacity(room_ids.len());
        let mut missing = BTreeSet::new();

        for room_id in room_ids {
            match self.rooms.fetch(room_id).await {
                Ok(room) => rooms.push(room),
                Err(DomainError::NotFound(_)) => {
                    missing.insert(room_id.clone());
                }
                Err(other) => return Err(other),
            }
        }

        if !missing.is_empty() {
            let missing: Vec<String> = missing.into_iter().collect();
            return Err(DomainError::Validation(format!(
                "Invalid room IDs: {}",
                missing.join(", ")
            )));
        }

        Ok(rooms)
    }
}
