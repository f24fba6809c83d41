//! HTTP middleware for request processing.
//!
//! Provides request tracing and cross-origin policy.

pub mod cors;
pub mod tracing;
