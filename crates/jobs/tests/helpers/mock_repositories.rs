#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use corral_application::ports::IdempotencyStore;
use corral_domain::DomainError;
use std::collections::HashMap;
use tokio::sync::RwLock;

pub struct MockIdempotencyStore {
    keys: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl MockIdempotencyStore {
    pub fn new() -> Self {
        Self {
            keys: RwLock::new(HashMap::new()),
        }
    }

    pub async fn with_key_aged(key: &str, age_secs: i64) -> Self {
        let store = Self::new();
        store
            .keys
            .write()
            .await
            .insert(key.to_string(), Utc::now() - chrono::Duration::seconds(age_secs));
        store
    }

    pub async fn insert_at(&self, key: &str, at: DateTime<Utc>) {
        self.keys.write().await.insert(key.to_string(), at);
    }

    pub async fn count(&self) -> usize {
        self.keys.read().await.len()
    }
}

impl Default for MockIdempotencyStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdempotencyStore for MockIdempotencyStore {
    async fn register(&self, key: &str) -> Result<bool, DomainError> {
        let mut keys = self.keys.write().await;
        if keys.contains_key(key) {
            return Ok(false);
        }
        keys.insert(key.to_string(), Utc::now());
        Ok(true)
    }

    async fn purge_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut keys = self.keys.write().await;
        let before = keys.len();
        keys.retain(|_, at| *at >= cutoff);
        Ok((before - keys.len()) as u64)
    }
}
