//! Mapping lifecycle service.

use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::domain::entities::{Mapping, NewMapping};
use crate::domain::errors::{MappingError, StoreError};
use crate::domain::expiration::{ExpirationOption, resolve_expiration};
use crate::domain::repositories::MappingRepository;
use crate::utils::alias_validator::validate_alias;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code};
use crate::utils::target_url::parse_target_url;

/// Default number of generated candidates tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Largest accepted page size for [`MappingService::list`].
pub const MAX_PAGE_SIZE: u32 = 100;

/// One page of active mappings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingPage {
    pub items: Vec<Mapping>,
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl MappingPage {
    /// An empty page means "no URLs found", which callers report but do not
    /// treat as a failure.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Service orchestrating the lifecycle of a mapping.
///
/// Holds no per-request state; everything durable lives in the repository.
pub struct MappingService {
    repository: Arc<dyn MappingRepository>,
    clock: Arc<dyn Clock>,
    code_length: usize,
    max_attempts: usize,
}

impl MappingService {
    /// Creates a service generating 10-character codes with 5 attempts.
    pub fn new(repository: Arc<dyn MappingRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            repository,
            clock,
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the generated code length and the attempt budget.
    pub fn with_code_policy(mut self, code_length: usize, max_attempts: usize) -> Self {
        self.code_length = code_length;
        self.max_attempts = max_attempts;
        self
    }

    /// Creates a new mapping.
    ///
    /// # Code Selection
    ///
    /// - With `custom_alias`: the alias is validated, lowercased and used if
    ///   no mapping (active or not) already has it
    /// - Otherwise: random codes are tried until one is free, at most
    ///   `max_attempts` times
    ///
    /// The insert itself is insert-if-absent, so a concurrent create that
    /// grabbed the same code in between is caught by the store.
    ///
    /// # Errors
    ///
    /// - [`MappingError::InvalidUrl`] if `target_url` is not an absolute HTTP(S) URL
    /// - [`MappingError::InvalidAlias`] if the alias breaks a validation rule
    /// - [`MappingError::AliasTaken`] if the alias is already in use
    /// - [`MappingError::CodeSpaceExhausted`] if every generated candidate collided
    /// - [`MappingError::Storage`] on store failures
    pub async fn create(
        &self,
        target_url: &str,
        expires_in: ExpirationOption,
        custom_alias: Option<&str>,
    ) -> Result<Mapping, MappingError> {
        let target_url =
            parse_target_url(target_url).map_err(|e| MappingError::InvalidUrl(e.to_string()))?;

        let now = self.clock.now();
        let expires_at = resolve_expiration(expires_in, now);

        let mapping = match custom_alias {
            Some(alias) => {
                self.create_with_alias(alias, target_url, now, expires_at)
                    .await?
            }
            None => {
                self.create_with_generated_code(target_url, now, expires_at)
                    .await?
            }
        };

        tracing::info!(
            code = %mapping.short_code,
            custom = mapping.is_custom_alias,
            expires_in = %expires_in,
            "Mapping created"
        );
        metrics::counter!(
            "shortlink_mappings_created_total",
            "kind" => if mapping.is_custom_alias { "custom" } else { "generated" }
        )
        .increment(1);

        Ok(mapping)
    }

    async fn create_with_alias(
        &self,
        alias: &str,
        target_url: String,
        now: chrono::DateTime<chrono::Utc>,
        expires_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Result<Mapping, MappingError> {
        let code = validate_alias(alias)?;

        if self.repository.exists(&code).await? {
            return Err(MappingError::AliasTaken(code));
        }

        let new_mapping = NewMapping {
            short_code: code.clone(),
            target_url,
            created_at: now,
            expires_at,
            is_custom_alias: true,
        };

        match self.repository.insert_if_absent(new_mapping).await {
            Ok(mapping) => Ok(mapping),
            Err(StoreError::Conflict(_)) => Err(MappingError::AliasTaken(code)),
            Err(e) => Err(e.into()),
        }
    }

    /// Bounded generate-check-insert loop.
    ///
    /// A candidate that passes the existence check but loses the insert race
    /// counts as a collision and consumes an attempt.
    async fn create_with_generated_code(
        &self,
        target_url: String,
        now: chrono::DateTime<chrono::Utc>,
        expires_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Result<Mapping, MappingError> {
        for attempt in 1..=self.max_attempts {
            let code = generate_code(self.code_length);

            if self.repository.exists(&code).await? {
                tracing::debug!(attempt, code = %code, "Generated code already exists");
                metrics::counter!("shortlink_code_collisions_total").increment(1);
                continue;
            }

            let new_mapping = NewMapping {
                short_code: code.clone(),
                target_url: target_url.clone(),
                created_at: now,
                expires_at,
                is_custom_alias: false,
            };

            match self.repository.insert_if_absent(new_mapping).await {
                Ok(mapping) => return Ok(mapping),
                Err(StoreError::Conflict(_)) => {
                    tracing::debug!(attempt, code = %code, "Generated code lost insert race");
                    metrics::counter!("shortlink_code_collisions_total").increment(1);
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::error!(
            attempts = self.max_attempts,
            code_length = self.code_length,
            "Short code space exhausted; check code length configuration"
        );

        Err(MappingError::CodeSpaceExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Resolves a code for a visit.
    ///
    /// On success the click counter is incremented once and the updated
    /// mapping is returned. A mapping found past its expiry is deactivated
    /// here, and only here; from then on it is never found again.
    ///
    /// # Errors
    ///
    /// - [`MappingError::NotFound`] if no active mapping has this code
    /// - [`MappingError::Expired`] if the mapping just got deactivated
    /// - [`MappingError::Storage`] on store failures
    pub async fn resolve(&self, code: &str) -> Result<Mapping, MappingError> {
        let mapping = self.find_active(code).await?;

        if mapping.is_expired_at(self.clock.now()) {
            self.repository.deactivate(mapping.id).await?;

            tracing::warn!(code = %code, "Mapping expired and was deactivated");
            metrics::counter!("shortlink_mappings_expired_total").increment(1);

            return Err(MappingError::Expired(code.to_string()));
        }

        let updated = self.repository.increment_clicks(mapping.id).await?;
        metrics::counter!("shortlink_redirects_total").increment(1);

        Ok(updated)
    }

    /// Returns the last stored state of an active mapping.
    ///
    /// Read-only: an expired mapping nobody resolved yet is still reported
    /// as active.
    ///
    /// # Errors
    ///
    /// - [`MappingError::NotFound`] if no active mapping has this code
    /// - [`MappingError::Storage`] on store failures
    pub async fn get_stats(&self, code: &str) -> Result<Mapping, MappingError> {
        self.find_active(code).await
    }

    /// Lists active mappings, `page` starting at 1.
    ///
    /// Like [`Self::get_stats`], this does not apply the expiry check.
    ///
    /// # Errors
    ///
    /// - [`MappingError::InvalidPage`] if `page` is 0 or `page_size` is outside 1-100
    /// - [`MappingError::Storage`] on store failures
    pub async fn list(&self, page: u32, page_size: u32) -> Result<MappingPage, MappingError> {
        if page == 0 {
            return Err(MappingError::InvalidPage(
                "Page must be greater than 0".to_string(),
            ));
        }

        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(MappingError::InvalidPage(format!(
                "Page size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        let offset = (i64::from(page) - 1) * i64::from(page_size);
        let rows = self
            .repository
            .list_active_page(offset, i64::from(page_size))
            .await?;

        Ok(MappingPage {
            items: rows.items,
            total: rows.total,
            page,
            page_size,
            total_pages: total_pages(rows.total, page_size),
        })
    }

    /// Checks that the underlying store answers.
    pub async fn ping(&self) -> Result<(), MappingError> {
        Ok(self.repository.ping().await?)
    }

    async fn find_active(&self, code: &str) -> Result<Mapping, MappingError> {
        self.repository
            .find_active_by_code(code)
            .await?
            .ok_or_else(|| MappingError::NotFound(code.to_string()))
    }
}

/// `ceil(total / page_size)`, zero when there is nothing to list.
fn total_pages(total: i64, page_size: u32) -> u32 {
    if total <= 0 {
        return 0;
    }

    let pages = (total + i64::from(page_size) - 1) / i64::from(page_size);
    u32::try_from(pages).unwrap_or(u32::MAX)
}
