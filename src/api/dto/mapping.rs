//! Public summary of a mapping, shared by create and list responses.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Mapping;

/// A mapping as returned by `POST /shorten` and `GET /urls`.
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    pub original_url: String,
    /// The short code.
    pub short_url: String,
    /// Fully qualified short link.
    pub short_link: String,
    pub is_active: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

impl UrlResponse {
    pub fn from_mapping(mapping: Mapping, short_link: String) -> Self {
        Self {
            original_url: mapping.target_url,
            short_url: mapping.short_code,
            short_link,
            is_active: mapping.is_active,
            expires_at: mapping.expires_at,
        }
    }
}
