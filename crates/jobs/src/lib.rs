pub mod idempotency_retention;
pub mod runner;

pub use idempotency_retention::IdempotencyRetentionJob;
pub use runner::JobRunner;
