//! Mapping entity associating a short code with a target URL.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// `is_active` only ever goes from `true` to `false`, and `click_count` only
/// ever grows. Neither invariant is enforced here; the store and the
/// lifecycle service uphold them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub id: i64,
    pub short_code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub click_count: i64,
    pub is_custom_alias: bool,
}

impl Mapping {
    /// Returns true if the mapping has an expiry and `now` has reached it.
    ///
    /// This does not look at `is_active`: an expired mapping stays active in
    /// storage until somebody resolves it.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// Input data for inserting a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub short_code: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_custom_alias: bool,
}

impl NewMapping {
    /// Materializes the record a store returns right after insertion.
    pub fn into_mapping(self, id: i64) -> Mapping {
        Mapping {
            id,
            short_code: self.short_code,
            target_url: self.target_url,
            created_at: self.created_at,
            expires_at: self.expires_at,
            is_active: true,
            click_count: 0,
            is_custom_alias: self.is_custom_alias,
        }
    }
}
