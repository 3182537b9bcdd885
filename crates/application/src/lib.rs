//! Corral Application Layer
//!
//! Holds the hard core of the service: the two-tier cache, the circuit
//! breaker, and the repository facade that composes them in front of the
//! document store port. Use cases sit on top and are what the API layer
//! calls.
pub mod cache;
pub mod ports;
pub mod repository;
pub mod resilience;
pub mod use_cases;

pub use cache::TieredCache;
pub use repository::CachedRepository;
pub use resilience::{CircuitBreaker, CircuitBreakerError, CircuitState};
