use chrono::{DateTime, Utc};
use corral_domain::{FavoriteRoomCount, Page, Room};
use serde::{Deserialize, Serialize};

/// Response DTO for room information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomResponse {
    pub id: String,
    pub title: String,
    pub favorited_by_animal_ids: Vec<String>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub version: u64,
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            title: room.title,
            favorited_by_animal_ids: room.favorited_by_animal_ids.into_iter().collect(),
            created: room.created,
            updated: room.updated,
            version: room.version,
        }
    }
}

/// Request DTO for creating a room
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRoomRequest {
    pub title: String,
}

/// Request DTO for updating a room
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRoomRequest {
    pub title: Option<String>,
}

/// Response DTO for the favorite-room aggregation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRoomCountResponse {
    pub title: String,
    pub fav_count: u64,
}

impl From<FavoriteRoomCount> for FavoriteRoomCountResponse {
    fn from(count: FavoriteRoomCount) -> Self {
        Self {
            title: count.title,
            fav_count: count.fav_count,
        }
    }
}

/// Generic paged response envelope
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total: u64,
}

impl<T, U: From<T>> From<Page<T>> for PageResponse<U> {
    fn from(page: Page<T>) -> Self {
        Self {
            items: page.items.into_iter().map(U::from).collect(),
            page: page.page,
            size: page.size,
            total: page.total,
        }
    }
}
