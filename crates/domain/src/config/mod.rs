//! Configuration module for Corral
//!
//! Configuration structures organized by concern:
//! - `root`: main configuration, file loading and CLI overrides
//! - `server`: HTTP binding
//! - `database`: document store location
//! - `cache`: local and distributed cache tiers
//! - `circuit`: circuit breaker thresholds
//! - `idempotency`: idempotency key retention
//! - `logging`: logging settings

pub mod cache;
pub mod circuit;
pub mod database;
pub mod errors;
pub mod idempotency;
pub mod logging;
pub mod root;
pub mod server;

pub use cache::CacheConfig;
pub use circuit::CircuitConfig;
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use idempotency::IdempotencyConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
