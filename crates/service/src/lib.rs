//! Service layer for sailing-venues
//!
//! Turns input files into chunked, transactional upserts and reads the store
//! back out as fixture scripts or JSON Lines.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod export_service;
mod format;
mod load_service;

pub use error::ServiceError;
pub use export_service::ExportService;
pub use format::{VenueFormat, read_venues};
pub use load_service::{LoadReport, LoadService};
