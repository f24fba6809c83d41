//! Error taxonomy of the domain.
//!
//! - [`AliasError`] - why a custom alias was rejected
//! - [`StoreError`] - failures reported by a mapping store
//! - [`MappingError`] - outcomes of lifecycle operations that are not success

use thiserror::Error;

/// Reasons a custom alias fails validation, in the order they are checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasError {
    #[error("alias must be between {min} and {max} characters, got {actual}")]
    InvalidLength { min: usize, max: usize, actual: usize },

    #[error("'{0}' is a reserved word and cannot be used as a custom alias")]
    ReservedWord(String),

    #[error("alias can only contain letters, numbers, hyphens, and underscores")]
    InvalidCharacters,
}

/// Errors returned by [`crate::domain::repositories::MappingRepository`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The short code is already taken (uniqueness constraint hit).
    #[error("short code already exists: {0}")]
    Conflict(String),

    /// Anything else: connection loss, bad rows, unexpected constraint.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

/// Non-success outcomes of [`crate::application::services::MappingService`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("invalid target URL: {0}")]
    InvalidUrl(String),

    #[error("invalid alias: {0}")]
    InvalidAlias(#[from] AliasError),

    #[error("alias '{0}' is already taken")]
    AliasTaken(String),

    #[error("failed to generate a unique short code after {attempts} attempts")]
    CodeSpaceExhausted { attempts: usize },

    #[error("invalid pagination: {0}")]
    InvalidPage(String),

    #[error("URL '{0}' doesn't exist")]
    NotFound(String),

    #[error("URL '{0}' is expired")]
    Expired(String),

    #[error(transparent)]
    Storage(StoreError),
}

impl From<StoreError> for MappingError {
    fn from(e: StoreError) -> Self {
        MappingError::Storage(e)
    }
}
