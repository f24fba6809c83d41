//! Top-level router configuration.
//!
//! # Route Structure
//!
//! See [`crate::api::routes::routes`] for the endpoint list. Static segments
//! take precedence over the `/{code}` capture.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured browser origins
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors_origins` - origins allowed to call the API from a browser
pub fn app_router(state: AppState, cors_origins: &[String]) -> NormalizePath<Router> {
    let router = api::routes::routes()
        .with_state(state)
        .layer(cors::layer(cors_origins))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
