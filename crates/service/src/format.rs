//! Input/output formats for venue files.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use sailing_venues_core::sql::{parse_script, render_script};
use sailing_venues_core::{CoreError, SailingVenue, parse_jsonl, to_jsonl};
use serde::{Deserialize, Serialize};

use crate::ServiceError;

/// On-disk representation of a list of venues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueFormat {
    /// One JSON object per line.
    Jsonl,
    /// `INSERT ... ON CONFLICT` fixture script.
    Sql,
}

impl VenueFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ServiceError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "jsonl" | "ndjson" | "json" => Ok(Self::Jsonl),
            "sql" => Ok(Self::Sql),
            _ => Err(ServiceError::InvalidInput(format!(
                "cannot infer format of {} (use .jsonl, .ndjson, .json or .sql)",
                path.display()
            ))),
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Jsonl => "jsonl",
            Self::Sql => "sql",
        }
    }

    pub fn parse(&self, input: &str) -> Result<Vec<SailingVenue>, CoreError> {
        match self {
            Self::Jsonl => parse_jsonl(input),
            Self::Sql => parse_script(input),
        }
    }

    pub fn render(&self, venues: &[SailingVenue]) -> Result<String, CoreError> {
        match self {
            Self::Jsonl => to_jsonl(venues),
            Self::Sql => Ok(render_script(venues)),
        }
    }
}

impl fmt::Display for VenueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VenueFormat {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jsonl" => Ok(Self::Jsonl),
            "sql" => Ok(Self::Sql),
            other => Err(ServiceError::InvalidInput(format!("unknown format: {other}"))),
        }
    }
}

/// Read and parse one venue file. `format` overrides extension inference.
pub async fn read_venues(
    path: &Path,
    format: Option<VenueFormat>,
) -> Result<Vec<SailingVenue>, ServiceError> {
    let format = match format {
        Some(f) => f,
        None => VenueFormat::from_path(path)?,
    };
    let input = tokio::fs::read_to_string(path).await?;
    let venues = format
        .parse(&input)
        .map_err(|source| ServiceError::File { path: path.to_path_buf(), source })?;
    tracing::info!(path = %path.display(), %format, count = venues.len(), "parsed venue file");
    Ok(venues)
}
