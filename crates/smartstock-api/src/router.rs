//! Route definitions for the SmartStock HTTP API.
//!
//! Entity routes are mounted under `/api`; stored images are served
//! from the images root under `/images`.

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::{Router, middleware as axum_middleware};
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let server = &state.config.server;
    let timeout = Duration::from_secs(server.request_timeout_seconds);

    let api_routes = Router::new()
        .merge(handlers::category::routes())
        .merge(handlers::product::routes())
        .merge(handlers::company::routes())
        .route("/health", get(handlers::health::health));

    let images = ServeDir::new(state.images.images_root());

    Router::new()
        .nest("/api", api_routes)
        .nest_service("/images", images)
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(TimeoutLayer::new(timeout))
        .layer(middleware::compression::build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors::build_cors_layer(&server.cors))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}
