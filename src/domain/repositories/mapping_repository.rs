//! Repository trait for mapping storage.

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::errors::StoreError;
use async_trait::async_trait;

/// One page of active mappings plus the number of active mappings overall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingPageRows {
    pub items: Vec<Mapping>,
    pub total: i64,
}

/// Storage contract for mappings.
///
/// Implementations must enforce short code uniqueness themselves: two
/// concurrent [`MappingRepository::insert_if_absent`] calls for the same code
/// can never both succeed. Click increments must be atomic.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryMappingRepository`] - Process-local implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Returns true if any mapping, active or not, uses `code`.
    ///
    /// Codes are never recycled, so inactive mappings count.
    async fn exists(&self, code: &str) -> Result<bool, StoreError>;

    /// Inserts a mapping unless its code is taken.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] if the code already exists.
    /// Returns [`StoreError::Backend`] on storage failures.
    async fn insert_if_absent(&self, new_mapping: NewMapping) -> Result<Mapping, StoreError>;

    /// Finds an active mapping by its exact code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Mapping))` if an active mapping has this code
    /// - `Ok(None)` if the code is unknown or its mapping was deactivated
    async fn find_active_by_code(&self, code: &str) -> Result<Option<Mapping>, StoreError>;

    /// Atomically adds one to the click counter and returns the updated row.
    async fn increment_clicks(&self, id: i64) -> Result<Mapping, StoreError>;

    /// Marks a mapping inactive. Deactivating twice is harmless.
    async fn deactivate(&self, id: i64) -> Result<Mapping, StoreError>;

    /// Lists active mappings in insertion order.
    ///
    /// # Arguments
    ///
    /// - `offset` - Number of active mappings to skip
    /// - `limit` - Maximum number of mappings to return
    async fn list_active_page(&self, offset: i64, limit: i64)
    -> Result<MappingPageRows, StoreError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
