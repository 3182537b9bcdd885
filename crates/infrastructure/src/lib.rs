//! Corral Infrastructure Layer
//!
//! SQLite-backed implementations of the persistence ports plus the Redis
//! distributed cache adapter.

pub mod cache;
pub mod database;
pub mod stores;

pub use cache::RedisCache;
pub use stores::{SqliteDocumentStore, SqliteIdempotencyStore, SqliteZooQueries};
