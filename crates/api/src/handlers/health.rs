use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Liveness plus a snapshot of the resilience internals. The service is
/// "degraded" while the circuit is not closed but still answers 200, the
/// process itself is healthy.
async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let breaker = state.breaker.snapshot();
    let cache = state.cache.stats();

    let status = match breaker.state {
        corral_application::CircuitState::Closed => "ok",
        _ => "degraded",
    };

    Json(json!({
        "status": status,
        "circuit": {
            "name": state.breaker.name(),
            "state": breaker.state.to_string(),
            "window_calls": breaker.window_calls,
            "window_failures": breaker.window_failures,
        },
        "cache": {
            "mode": cache.mode,
            "local_entries": cache.local_entries,
            "hits": cache.hits,
            "misses": cache.misses,
            "evictions": cache.evictions,
        },
    }))
}
