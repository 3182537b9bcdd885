use chrono::{DateTime, NaiveDate, Utc};
use corral_domain::Animal;
use serde::{Deserialize, Serialize};

/// Response DTO for animal information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimalResponse {
    pub id: String,
    pub title: String,
    pub located: Option<NaiveDate>,
    pub room_id: Option<String>,
    pub favorite_room_ids: Vec<String>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub version: u64,
}

impl From<Animal> for AnimalResponse {
    fn from(animal: Animal) -> Self {
        Self {
            id: animal.id,
            title: animal.title,
            located: animal.located,
            room_id: animal.room_id,
            favorite_room_ids: animal.favorite_room_ids.into_iter().collect(),
            created: animal.created,
            updated: animal.updated,
            version: animal.version,
        }
    }
}

/// Request DTO for creating an animal
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAnimalRequest {
    pub title: String,
    pub located: Option<NaiveDate>,
}

/// Request DTO for updating an animal
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAnimalRequest {
    pub title: Option<String>,
    pub located: Option<NaiveDate>,
}

/// Request DTO for assigning or unassigning favorite rooms
#[derive(Debug, Clone, Deserialize)]
pub struct FavoriteRoomsRequest {
    pub room_ids: Vec<String>,
}
