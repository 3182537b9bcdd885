use crate::IdempotencyRetentionJob;
use std::sync::Arc;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once.
pub struct JobRunner {
    idempotency_retention: Option<IdempotencyRetentionJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            idempotency_retention: None,
        }
    }

    pub fn with_idempotency_retention(mut self, job: IdempotencyRetentionJob) -> Self {
        self.idempotency_retention = Some(job);
        self
    }

    /// Start all registered background jobs.
    pub async fn start(self) {
        info!("Starting background job runner");

        if let Some(job) = self.idempotency_retention {
            Arc::new(job).start().await;
        }

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
