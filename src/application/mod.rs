//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::mapping_service::MappingService`] - Mapping creation, resolution, stats and listing

pub mod services;
