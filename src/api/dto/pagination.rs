//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination query parameters.
///
/// Uses `serde_with` to parse page numbers from query strings as integers.
/// Bounds are checked by the service.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<u32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<u32>,
}

impl PaginationParams {
    /// Page number, defaulting to 1.
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    /// Page size, defaulting to 10.
    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
