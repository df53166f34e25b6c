//! Router assembly for the file lock HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// File paths travel as one percent-encoded segment (`src%2Fmain.rs`);
/// axum matches on the encoded path and decodes the captured value.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // File locks
        .route(
            "/v2/file-lock/{namespace}/{name}",
            get(handlers::locks::list_locks),
        )
        .route(
            "/v2/file-lock/{namespace}/{name}/lock/{path}",
            post(handlers::locks::lock_file).delete(handlers::locks::unlock_file),
        )
        // Repository config
        .route(
            "/v2/file-lock/{namespace}/{name}/config",
            get(handlers::config::get_config).put(handlers::config::update_config),
        )
        // Repository and file views carrying lock links
        .route(
            "/v2/repositories/{namespace}/{name}",
            get(handlers::repositories::get_repository),
        )
        .route(
            "/v2/repositories/{namespace}/{name}/files/{path}",
            get(handlers::repositories::get_file),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
