//! Repository trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`MappingRepository`] - Durable, key-unique storage of mappings
//!
//! # Testing
//!
//! See `tests/repository_mapping.rs` for the contract every implementation
//! is held to.

pub mod mapping_repository;

pub use mapping_repository::{MappingPageRows, MappingRepository};

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
