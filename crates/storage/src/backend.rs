//! Unified storage backend with enum dispatch.

#[cfg(feature = "sqlite")]
use std::path::Path;

use async_trait::async_trait;
use sailing_venues_core::SailingVenue;

use crate::error::StorageError;
use crate::traits::VenueStore;
use crate::types::{BatchOutcome, PaginatedResult, UpsertOutcome, VenueStats};

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite(s) => <crate::Storage as VenueStore>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as VenueStore>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "sqlite")]
    Sqlite(crate::Storage),
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
}

impl StorageBackend {
    /// # Errors
    /// Returns error if the database cannot be opened or migrated.
    #[cfg(feature = "sqlite")]
    pub fn new_sqlite(db_path: &Path) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::Storage::new(db_path)?))
    }

    /// # Errors
    /// Returns error if the server is unreachable or migrations fail.
    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url).await?))
    }

    /// Short backend name for logs and reports.
    pub const fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "sqlite",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

#[async_trait]
impl VenueStore for StorageBackend {
    async fn upsert_venue(&self, venue: &SailingVenue) -> Result<UpsertOutcome, StorageError> {
        dispatch!(self, upsert_venue(venue))
    }

    async fn upsert_venues(&self, venues: &[SailingVenue]) -> Result<BatchOutcome, StorageError> {
        dispatch!(self, upsert_venues(venues))
    }

    async fn get_venue(&self, id: &str) -> Result<Option<SailingVenue>, StorageError> {
        dispatch!(self, get_venue(id))
    }

    async fn list_venues(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<PaginatedResult<SailingVenue>, StorageError> {
        dispatch!(self, list_venues(offset, limit))
    }

    async fn get_stats(&self) -> Result<VenueStats, StorageError> {
        dispatch!(self, get_stats())
    }
}
