//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Mapping store implementations (PostgreSQL and in-memory)
//! - [`qr`] - QR code image rendering

pub mod persistence;
pub mod qr;
