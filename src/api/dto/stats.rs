//! DTOs for per-mapping statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Mapping;

/// Stored state of one mapping.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub click_count: i64,
}

impl From<Mapping> for StatsResponse {
    fn from(mapping: Mapping) -> Self {
        Self {
            original_url: mapping.target_url,
            short_url: mapping.short_code,
            created_at: mapping.created_at,
            expires_at: mapping.expires_at,
            is_active: mapping.is_active,
            click_count: mapping.click_count,
        }
    }
}
