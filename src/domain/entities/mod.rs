//! Core domain entities.
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewMapping`] carries what the caller decides, [`Mapping`] is what the
//! store hands back (with its assigned id and counters).

pub mod mapping;

pub use mapping::{Mapping, NewMapping};
