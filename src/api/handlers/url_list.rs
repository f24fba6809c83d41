//! Handler for the list of active mappings.

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::json;

use crate::api::dto::mapping::UrlResponse;
use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::url_list::UrlListResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists active mappings in creation order.
///
/// # Endpoint
///
/// `GET /urls`
///
/// # Query Parameters
///
/// - `page` (optional): Page number, starting at 1 (default: 1)
/// - `page_size` (optional): Items per page, 1-100 (default: 10)
///
/// # Errors
///
/// Returns 400 Bad Request if pagination parameters are out of range.
/// Returns 404 Not Found with "No URLs found" when the page is empty.
pub async fn url_list_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<UrlListResponse>, AppError> {
    let page = state
        .mapping_service
        .list(params.page(), params.page_size())
        .await?;

    if page.is_empty() {
        return Err(AppError::not_found(
            "No URLs found",
            json!({ "page": page.page, "total": page.total }),
        ));
    }

    let urls = page
        .items
        .into_iter()
        .map(|mapping| {
            let short_link = state.short_link(&mapping.short_code);
            UrlResponse::from_mapping(mapping, short_link)
        })
        .collect();

    Ok(Json(UrlListResponse {
        urls,
        total: page.total,
        page: page.page,
        page_size: page.page_size,
        total_pages: page.total_pages,
    }))
}
