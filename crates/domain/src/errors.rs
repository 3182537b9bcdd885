use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Downstream store timed out")]
    DownstreamTimeout,

    #[error("Downstream store failure: {0}")]
    DownstreamFailure(String),

    #[error("Service degraded: circuit open, retry after {retry_after_secs}s")]
    CircuitOpen { retry_after_secs: u64 },

    #[error("Duplicate request: idempotency key already used")]
    DuplicateRequest,

    #[error("Entity has been modified by another caller")]
    VersionMismatch,

    #[error("Invalid precondition: {0}")]
    InvalidPrecondition(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Failures that should trip the circuit breaker. Absence of an entity
    /// and caller-side validation problems are not downstream faults.
    pub fn is_downstream_fault(&self) -> bool {
        matches!(
            self,
            DomainError::DownstreamTimeout | DomainError::DownstreamFailure(_)
        )
    }
}
