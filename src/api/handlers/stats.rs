//! Handler for per-mapping statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored state of a mapping.
///
/// # Endpoint
///
/// `GET /stats/{code}`
///
/// Read-only: expiry is not evaluated here, so a mapping past its expiry
/// that nobody has visited still shows `is_active: true`.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or inactive.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let mapping = state.mapping_service.get_stats(&code).await?;

    Ok(Json(mapping.into()))
}
