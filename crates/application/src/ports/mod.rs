pub mod distributed_cache;
pub mod document_store;
pub mod idempotency_store;
pub mod zoo_queries;

pub use distributed_cache::DistributedCache;
pub use document_store::DocumentStore;
pub use idempotency_store::IdempotencyStore;
pub use zoo_queries::ZooQueries;
