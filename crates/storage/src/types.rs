//! Storage types shared across backends

use serde::{Deserialize, Serialize};

/// What a single upsert did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    /// No row had this id; the full record was written.
    Inserted,
    /// A row existed; only its coordinates were overwritten.
    CoordinatesRefreshed,
}

/// Counts for one transactional batch of upserts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub inserted: u64,
    pub refreshed: u64,
}

impl BatchOutcome {
    pub fn record(&mut self, outcome: UpsertOutcome) {
        match outcome {
            UpsertOutcome::Inserted => self.inserted += 1,
            UpsertOutcome::CoordinatesRefreshed => self.refreshed += 1,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.inserted + self.refreshed
    }
}

/// Statistics about table contents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct VenueStats {
    pub venue_count: u64,
    pub node_count: u64,
    pub way_count: u64,
    pub relation_count: u64,
    /// Rows whose country is the `Unknown` sentinel.
    pub unknown_country_count: u64,
    pub verified_count: u64,
}

/// Generic paginated result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PaginatedResult<T> {
    /// Items in the current page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    /// Offset from the start.
    pub offset: u64,
    /// Maximum items per page.
    pub limit: u64,
}

impl<T> PaginatedResult<T> {
    #[must_use]
    pub const fn new(items: Vec<T>, total: u64, offset: u64, limit: u64) -> Self {
        Self { items, total, offset, limit }
    }
}

/// Single aggregate query used by every backend's `get_stats`.
pub(crate) const STATS_SQL: &str = "SELECT
    COUNT(*),
    COUNT(*) FILTER (WHERE osm_type = 'node'),
    COUNT(*) FILTER (WHERE osm_type = 'way'),
    COUNT(*) FILTER (WHERE osm_type = 'relation'),
    COUNT(*) FILTER (WHERE country = 'Unknown'),
    COUNT(*) FILTER (WHERE verified)
  FROM sailing_venues";
