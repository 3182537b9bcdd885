use async_trait::async_trait;
use corral_domain::{Document, DomainError};

/// Persistence port for one document collection.
///
/// Implementations must distinguish a timeout (`DomainError::DownstreamTimeout`)
/// from other store failures (`DomainError::DownstreamFailure`) so the circuit
/// breaker and callers can treat them differently.
#[async_trait]
pub trait DocumentStore<E: Document>: Send + Sync {
    /// Looks a document up by id.
    ///
    /// * `Ok(Some(entity))` - the document exists
    /// * `Ok(None)` - absent; never an error at this layer
    async fn find(&self, id: &str) -> Result<Option<E>, DomainError>;

    /// Inserts or updates a document with an optimistic version check.
    ///
    /// A fresh entity (version 0) is inserted at version 1. An existing
    /// entity is updated only if the stored version still matches; on a lost
    /// race the store returns `DomainError::VersionMismatch` without writing.
    /// Returns the stored entity with its bumped version.
    async fn upsert(&self, entity: &E) -> Result<E, DomainError>;

    /// Deletes a document by id.
    ///
    /// * `Err(DomainError::NotFound)` - nothing to delete
    async fn delete(&self, id: &str) -> Result<(), DomainError>;
}
