//! DTOs for the paginated list of active mappings.

use serde::Serialize;

use super::mapping::UrlResponse;

/// Paginated list of active mappings.
#[derive(Debug, Serialize)]
pub struct UrlListResponse {
    pub urls: Vec<UrlResponse>,
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}
