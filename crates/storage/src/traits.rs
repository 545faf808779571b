//! Storage backend trait abstraction
//!
//! One async trait covers the upsert contract plus the read operations the
//! loader and CLI need; SQLite and PostgreSQL both implement it.

use async_trait::async_trait;
use sailing_venues_core::SailingVenue;

use crate::error::StorageError;
use crate::types::{BatchOutcome, PaginatedResult, UpsertOutcome, VenueStats};

#[async_trait]
pub trait VenueStore: Send + Sync {
    /// Insert the full row if `id` is new, otherwise overwrite only
    /// `coordinates_lat` / `coordinates_lng`.
    async fn upsert_venue(&self, venue: &SailingVenue) -> Result<UpsertOutcome, StorageError>;

    /// Apply [`VenueStore::upsert_venue`] to each venue in order inside one
    /// transaction. The first failure rolls the whole batch back.
    async fn upsert_venues(&self, venues: &[SailingVenue]) -> Result<BatchOutcome, StorageError>;

    /// Get venue by ID.
    async fn get_venue(&self, id: &str) -> Result<Option<SailingVenue>, StorageError>;

    /// Page through venues ordered by id.
    async fn list_venues(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<PaginatedResult<SailingVenue>, StorageError>;

    async fn get_stats(&self) -> Result<VenueStats, StorageError>;
}
