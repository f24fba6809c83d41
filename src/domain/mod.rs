//! Domain layer containing business entities and rules.
//!
//! This module holds everything the lifecycle of a short link depends on,
//! independent of HTTP and storage concerns.
//!
//! # Architecture
//!
//! - [`entities`] - The [`entities::Mapping`] record and its creation input
//! - [`repositories`] - The mapping store contract
//! - [`expiration`] - Symbolic expiration options and their resolution
//! - [`clock`] - Injectable time source
//! - [`reserved`] - Route segments that can never be used as aliases
//! - [`errors`] - Alias, store and lifecycle error taxonomy
//!
//! # Mapping State Machine
//!
//! ```text
//! Active(unexpired) --time passes--> Active(expired, undetected) --resolve--> Inactive
//! ```
//!
//! The middle state is never stored: it is derived from `expires_at` with
//! [`entities::Mapping::is_expired_at`]. The final transition is applied only
//! by [`crate::application::services::MappingService::resolve`], and
//! `Inactive` is terminal.

pub mod clock;
pub mod entities;
pub mod errors;
pub mod expiration;
pub mod repositories;
pub mod reserved;
