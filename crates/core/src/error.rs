use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised while building, validating or parsing venue records.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("coordinates out of range: lat={lat}, lng={lng}")]
    CoordinatesOutOfRange { lat: f64, lng: f64 },

    #[error("invalid osm_type: {0}")]
    InvalidOsmType(String),

    #[error("invalid venue id: {0}")]
    InvalidVenueId(String),

    #[error("venue id {id} does not match osm_type/osm_id (expected {expected})")]
    IdMismatch { id: String, expected: String },

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = StdResult<T, CoreError>;
