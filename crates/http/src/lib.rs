//! HTTP API server for activity-log.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod api_types;
mod handlers;
mod params;
#[cfg(test)]
mod tests;

use axum::{
    Json, Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use activity_log_service::ActivityService;

pub use api_types::{MessageResponse, SearchResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Upload, search and key rotation
    pub activity_service: Arc<ActivityService>,
}

/// Routes with fully permissive CORS: any origin, method and header.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/stats", get(handlers::admin::stats))
        .route("/set-api-key", post(handlers::admin::set_api_key))
        .route("/upload", post(handlers::activity::upload))
        .route("/search", post(handlers::activity::search))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION").to_owned() })
}
