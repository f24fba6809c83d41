//! Handler for QR code images.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Returns a QR code encoding the full short link.
///
/// # Endpoint
///
/// `GET /qr/{code}`
///
/// Uses the same lookup as stats, so it never counts a click or
/// deactivates an expired mapping.
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or inactive.
/// Returns 500 Internal Server Error if rendering fails.
pub async fn qr_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let mapping = state.mapping_service.get_stats(&code).await?;

    let short_link = state.short_link(&mapping.short_code);
    let bytes = state.qr_renderer.render(&short_link)?;

    Ok((
        [
            (header::CONTENT_TYPE, state.qr_renderer.content_type()),
            (header::CONTENT_DISPOSITION, "inline; filename=qr.png"),
        ],
        bytes,
    ))
}
