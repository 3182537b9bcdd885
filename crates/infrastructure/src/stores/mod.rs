pub mod document_store;
pub mod idempotency_store;
pub mod zoo_queries;

pub use document_store::SqliteDocumentStore;
pub use idempotency_store::SqliteIdempotencyStore;
pub use zoo_queries::SqliteZooQueries;

use corral_domain::DomainError;

/// Shared mapping of sqlx failures onto the error taxonomy. Pool exhaustion
/// looks like a timeout to callers so the circuit breaker treats a saturated
/// database the same as a slow one.
pub(crate) fn map_sqlx_error(e: sqlx::Error) -> DomainError {
    match e {
        sqlx::Error::PoolTimedOut => DomainError::DownstreamTimeout,
        other => DomainError::DownstreamFailure(other.to_string()),
    }
}
