use crate::handlers;
use crate::state::AppState;
use axum::Router;

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .merge(handlers::health::routes())
        .merge(handlers::animals::routes())
        .merge(handlers::rooms::routes())
        .with_state(state)
}
