use crate::document::Document;
use crate::errors::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub title: String,
    /// Reverse references kept for fast favorite aggregation.
    #[serde(default)]
    pub favorited_by_animal_ids: BTreeSet<String>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: u64,
}

impl Room {
    pub fn new(title: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            favorited_by_animal_ids: BTreeSet::new(),
            created: Some(Utc::now()),
            updated: None,
            version: 0,
        }
    }

    pub fn validate_title(title: &str) -> Result<(), DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::Validation(
                "Room title cannot be empty".to_string(),
            ));
        }
        if title.len() > 200 {
            return Err(DomainError::Validation(
                "Room title cannot exceed 200 characters".to_string(),
            ));
        }
        Ok(())
    }
}

impl Document for Room {
    const COLLECTION: &'static str = "rooms";

    fn id(&self) -> &str {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn set_version(&mut self, version: u64) {
        self.version = version;
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        if self.created.is_none() {
            self.created = Some(now);
        }
        self.updated = Some(now);
    }
}

/// Aggregation row: how many animals favorited a room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRoomCount {
    pub title: String,
    pub fav_count: u64,
}
