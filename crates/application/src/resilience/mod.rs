//! Circuit breaking for the document store call path.
//!
//! One [`CircuitBreaker`] instance guards one downstream dependency. It is
//! constructed explicitly and injected into every facade that talks to that
//! dependency; facades sharing a store share the instance by `Arc`.

pub mod circuit_breaker;

pub use circuit_breaker::{BreakerSnapshot, CircuitBreaker, CircuitBreakerError, CircuitState};
