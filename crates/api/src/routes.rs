use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/topology/cache", get(handlers::get_cache_status))
        .route("/api/topology/counters", get(handlers::get_counters))
        .route(
            "/api/topology/endpoints/healthy",
            get(handlers::get_healthy_endpoints),
        )
        .route(
            "/api/topology/endpoints/degraded",
            get(handlers::get_degraded_endpoints),
        )
        .route("/status", get(handlers::status_page))
        .with_state(state)
}
