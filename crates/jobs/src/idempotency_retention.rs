use corral_application::use_cases::PurgeExpiredKeysUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Periodically purges consumed idempotency keys past their TTL so the key
/// table stays bounded.
pub struct IdempotencyRetentionJob {
    purge: Arc<PurgeExpiredKeysUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl IdempotencyRetentionJob {
    pub fn new(purge: Arc<PurgeExpiredKeysUseCase>) -> Self {
        Self {
            purge,
            interval_secs: 3600,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting idempotency key retention job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("IdempotencyRetentionJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.purge.execute().await {
                            Ok(purged) => {
                                info!(purged, "Idempotency key purge completed");
                            }
                            Err(e) => {
                                error!(error = %e, "Idempotency key purge failed");
                            }
                        }
                    }
                }
            }
        });
    }
}
