//! Router configuration for the web server.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.max_upload_bytes;
    Router::new()
        .route("/", get(handlers::index))
        .route("/extract", post(handlers::extract_page))
        // JSON API
        .route("/api/extract", post(handlers::api_extract))
        .route("/api/health", get(handlers::api_health))
        // Static assets
        .route("/static/style.css", get(handlers::serve_css))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
