//! API route configuration.
//!
//! Fixed paths are built from [`crate::domain::reserved`] so that a custom
//! alias can never be shadowed by one of them.

use crate::api::handlers::{
    health_handler, qr_handler, redirect_handler, shorten_handler, stats_handler,
    url_list_handler,
};
use crate::domain::reserved::{
    HEALTH_SEGMENT, QR_SEGMENT, SHORTEN_SEGMENT, STATS_SEGMENT, URLS_SEGMENT,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /shorten`       - Create a short link
/// - `GET  /urls`          - List active links (paginated)
/// - `GET  /stats/{code}`  - Stored state and click count of a link
/// - `GET  /qr/{code}`     - PNG QR code of the full short link
/// - `GET  /health`        - Storage health check
/// - `GET  /{code}`        - Redirect to the original URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(&format!("/{SHORTEN_SEGMENT}"), post(shorten_handler))
        .route(&format!("/{URLS_SEGMENT}"), get(url_list_handler))
        .route(&format!("/{STATS_SEGMENT}/{{code}}"), get(stats_handler))
        .route(&format!("/{QR_SEGMENT}/{{code}}"), get(qr_handler))
        .route(&format!("/{HEALTH_SEGMENT}"), get(health_handler))
        .route("/{code}", get(redirect_handler))
}
