use crate::document::Document;
use crate::errors::DomainError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    pub id: String,
    pub title: String,
    /// Date the animal was located / taken in.
    pub located: Option<NaiveDate>,
    pub room_id: Option<String>,
    #[serde(default)]
    pub favorite_room_ids: BTreeSet<String>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: u64,
}

impl Animal {
    pub fn new(title: String, located: Option<NaiveDate>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            located,
            room_id: None,
            favorite_room_ids: BTreeSet::new(),
            created: Some(Utc::now()),
            updated: None,
            version: 0,
        }
    }

    pub fn validate_title(title: &str) -> Result<(), DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::Validation(
                "Animal title cannot be empty".to_string(),
            ));
        }
        if title.len() > 200 {
            return Err(DomainError::Validation(
                "Animal title cannot exceed 200 characters".to_string(),
            ));
        }
        Ok(())
    }
}

impl Document for Animal {
    const COLLECTION: &'static str = "animals";

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
