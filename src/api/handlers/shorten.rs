//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::mapping::UrlResponse;
use crate::api::dto::shorten::ShortenRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "expires_in": "7d",
///   "custom_alias": "my-link"
/// }
/// ```
///
/// `expires_in` is one of `1h`, `6h`, `24h`, `7d`, `30d`, `365d`, `never`.
///
/// # Response
///
/// ```json
/// {
///   "original_url": "https://example.com",
///   "short_url": "my-link",
///   "short_link": "https://sho.rt/my-link",
///   "is_active": true,
///   "expires_at": "2026-01-08T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL or alias is invalid, the alias is
/// taken, or no free code could be generated.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<UrlResponse>, AppError> {
    payload.validate()?;

    let mapping = state
        .mapping_service
        .create(
            &payload.original_url,
            payload.expires_in,
            payload.custom_alias.as_deref(),
        )
        .await?;

    let short_link = state.short_link(&mapping.short_code);

    Ok(Json(UrlResponse::from_mapping(mapping, short_link)))
}
