//! Typed error enum for the service layer.
//!
//! Unifies parse, storage and file failures so callers can match on the
//! failure mode instead of downcasting.

use std::path::PathBuf;

use sailing_venues_core::CoreError;
use sailing_venues_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying core, storage and I/O failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Venue data could not be parsed or validated.
    #[error("invalid venue data: {0}")]
    Core(#[from] CoreError),

    /// Parsing failed inside a named input file.
    #[error("{}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: CoreError,
    },

    /// Storage operation failed (DB, constraint, pool, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Reading or writing a file failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// Caller provided invalid input (unknown extension, empty file list).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

