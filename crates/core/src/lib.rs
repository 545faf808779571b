//! Core types for sailing-venues
//!
//! Domain types shared across all other crates: the `SailingVenue` row, its
//! OSM-derived identity, and the SQL fixture format.

pub mod constants;
pub mod env_config;
mod error;
pub mod sql;
mod venue;

pub use constants::*;
pub use env_config::env_parse_with_default;
pub use error::*;
pub use venue::*;
