//! In-memory implementation of the mapping repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::errors::StoreError;
use crate::domain::repositories::{MappingPageRows, MappingRepository};

#[derive(Debug, Default)]
struct State {
    /// Rows in insertion order; a row's id is its index + 1.
    rows: Vec<Mapping>,
    by_code: HashMap<String, usize>,
}

impl State {
    fn row_mut(&mut self, id: i64) -> Result<&mut Mapping, StoreError> {
        usize::try_from(id - 1)
            .ok()
            .and_then(|idx| self.rows.get_mut(idx))
            .ok_or_else(|| StoreError::Backend(format!("no mapping with id {id}")))
    }
}

/// Process-local repository.
///
/// One `RwLock` guards both the rows and the code index, and every mutation
/// runs under the write half, which makes insert-if-absent and click
/// increments atomic. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryMappingRepository {
    state: RwLock<State>,
}

impl InMemoryMappingRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings, active or not.
    pub async fn len(&self) -> usize {
        self.state.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn exists(&self, code: &str) -> Result<bool, StoreError> {
        Ok(self.state.read().await.by_code.contains_key(code))
    }

    async fn insert_if_absent(&self, new_mapping: NewMapping) -> Result<Mapping, StoreError> {
        let mut state = self.state.write().await;

        if state.by_code.contains_key(&new_mapping.short_code) {
            return Err(StoreError::Conflict(new_mapping.short_code));
        }

        let idx = state.rows.len();
        let id = i64::try_from(idx + 1)
            .map_err(|_| StoreError::Backend("id space exhausted".to_string()))?;
        let mapping = new_mapping.into_mapping(id);

        state.by_code.insert(mapping.short_code.clone(), idx);
        state.rows.push(mapping.clone());

        Ok(mapping)
    }

    async fn find_active_by_code(&self, code: &str) -> Result<Option<Mapping>, StoreError> {
        let state = self.state.read().await;

        Ok(state
            .by_code
            .get(code)
            .and_then(|&idx| state.rows.get(idx))
            .filter(|mapping| mapping.is_active)
            .cloned())
    }

    async fn increment_clicks(&self, id: i64) -> Result<Mapping, StoreError> {
        let mut state = self.state.write().await;
        let row = state.row_mut(id)?;
        row.click_count += 1;
        Ok(row.clone())
    }

    async fn deactivate(&self, id: i64) -> Result<Mapping, StoreError> {
        let mut state = self.state.write().await;
        let row = state.row_mut(id)?;
        row.is_active = false;
        Ok(row.clone())
    }

    async fn list_active_page(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<MappingPageRows, StoreError> {
        let state = self.state.read().await;
        let active = state.rows.iter().filter(|mapping| mapping.is_active);

        let total = i64::try_from(active.clone().count()).unwrap_or(i64::MAX);
        let items = active
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect();

        Ok(MappingPageRows { items, total })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
