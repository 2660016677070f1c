//! bfhl-api library - HTTP service for token classification
//!
//! Exposes the router and application state so integration tests can drive
//! the service without binding a socket.

use std::sync::Arc;

use axum::Router;
use bfhl_common::IdentityConfig;
use chrono::{DateTime, Utc};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;

pub use crate::error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Identity echoed in every classification response; read-only after startup
    pub identity: Arc<IdentityConfig>,
    /// Service startup timestamp
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(identity: IdentityConfig) -> Self {
        Self {
            identity: Arc::new(identity),
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::serve_index))
        .route("/bfhl", post(api::process_bfhl))
        .route("/build_info", get(api::get_build_info))
        .merge(api::health_routes())
        .fallback(api::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Enable CORS for browser clients
        .layer(CorsLayer::permissive())
}
