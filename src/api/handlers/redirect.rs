//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the active mapping for `code`
/// 2. If it is past its expiry, deactivate it and answer 404
/// 3. Otherwise count the click and return 307 Temporary Redirect
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown, inactive, or just expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mapping = state.mapping_service.resolve(&code).await?;

    debug!(code = %code, clicks = mapping.click_count, "Redirecting");

    Ok(Redirect::temporary(&mapping.target_url))
}
