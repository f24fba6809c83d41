//! Helper functions used across the application.
//!
//! - [`code_generator`] - Random short code generation
//! - [`alias_validator`] - Custom alias rules and normalization
//! - [`target_url`] - Target URL syntax checks
//! - [`db_error`] - Database error classification

pub mod alias_validator;
pub mod code_generator;
pub mod db_error;
pub mod target_url;
