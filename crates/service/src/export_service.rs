//! Read-side queries and full dumps of the venue table.

use std::sync::Arc;

use sailing_venues_core::{MAX_QUERY_LIMIT, SailingVenue};
use sailing_venues_storage::{PaginatedResult, StorageBackend, VenueStats, VenueStore};

use crate::ServiceError;
use crate::format::VenueFormat;

/// Read-side access to the store: lookups, pages, stats and full dumps.
pub struct ExportService {
    storage: Arc<StorageBackend>,
}

impl ExportService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn get_venue(&self, id: &str) -> Result<Option<SailingVenue>, ServiceError> {
        Ok(self.storage.get_venue(id).await?)
    }

    pub async fn list_venues(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<PaginatedResult<SailingVenue>, ServiceError> {
        Ok(self.storage.list_venues(offset, limit).await?)
    }

    pub async fn get_stats(&self) -> Result<VenueStats, ServiceError> {
        Ok(self.storage.get_stats().await?)
    }

    /// Every venue in id order.
    pub async fn all_venues(&self) -> Result<Vec<SailingVenue>, ServiceError> {
        let mut venues = Vec::new();
        loop {
            let page = self.storage.list_venues(venues.len(), MAX_QUERY_LIMIT).await?;
            if page.items.is_empty() {
                break;
            }
            venues.extend(page.items);
            if venues.len() as u64 >= page.total {
                break;
            }
        }
        Ok(venues)
    }

    /// Dump the whole store in `format`.
    pub async fn export(&self, format: VenueFormat) -> Result<String, ServiceError> {
        let venues = self.all_venues().await?;
        tracing::info!(count = venues.len(), %format, "exporting venues");
        Ok(format.render(&venues)?)
    }
}
