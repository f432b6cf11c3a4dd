use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/check-host", get(handlers::check_host))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
