//! Chunked, transactional loading of venue files into a store.

use std::path::PathBuf;
use std::sync::Arc;

use sailing_venues_core::{MAX_QUERY_LIMIT, SailingVenue};
use sailing_venues_storage::{StorageBackend, VenueStore};
use serde::Serialize;

use crate::ServiceError;
use crate::format::{VenueFormat, read_venues};

/// Summary of one load run, printed by the CLI as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub files: usize,
    pub venues: u64,
    pub inserted: u64,
    pub refreshed: u64,
    pub batches: u64,
}

impl LoadReport {
    fn merge(&mut self, other: &Self) {
        self.venues += other.venues;
        self.inserted += other.inserted;
        self.refreshed += other.refreshed;
        self.batches += other.batches;
    }
}

pub struct LoadService {
    storage: Arc<StorageBackend>,
    batch_size: usize,
}

impl LoadService {
    /// A `batch_size` of zero is treated as one.
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>, batch_size: usize) -> Self {
        Self { storage, batch_size: batch_size.max(1) }
    }

    #[must_use]
    pub const fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Upsert venues in `batch_size` chunks, one transaction per chunk.
    ///
    /// Stops at the first failing chunk; chunks before it stay committed.
    pub async fn load_venues(&self, venues: &[SailingVenue]) -> Result<LoadReport, ServiceError> {
        let mut report = LoadReport::default();
        for (index, chunk) in venues.chunks(self.batch_size).enumerate() {
            let outcome = self.storage.upsert_venues(chunk).await.inspect_err(|e| {
                tracing::error!(batch = index, size = chunk.len(), error = %e, "batch failed");
            })?;
            report.venues += chunk.len() as u64;
            report.inserted += outcome.inserted;
            report.refreshed += outcome.refreshed;
            report.batches += 1;
            tracing::info!(
                batch = index,
                inserted = outcome.inserted,
                refreshed = outcome.refreshed,
                "batch committed"
            );
        }
        Ok(report)
    }

    /// Parse every file first, then load them in the given order.
    ///
    /// A parse error in any file aborts before anything is written.
    pub async fn load_files(
        &self,
        paths: &[PathBuf],
        format: Option<VenueFormat>,
    ) -> Result<LoadReport, ServiceError> {
        if paths.is_empty() {
            return Err(ServiceError::InvalidInput("no input files".to_owned()));
        }
        let mut parsed = Vec::with_capacity(paths.len());
        for path in paths {
            parsed.push(read_venues(path, format).await?);
        }

        let mut report = LoadReport { files: paths.len(), ..LoadReport::default() };
        for (path, venues) in paths.iter().zip(&parsed) {
            let file_report = self.load_venues(venues).await?;
            tracing::info!(
                path = %path.display(),
                inserted = file_report.inserted,
                refreshed = file_report.refreshed,
                "file loaded"
            );
            report.merge(&file_report);
        }
        Ok(report)
    }

    /// Copy every venue from `source` into this service's store, page by page.
    pub async fn load_from_store(
        &self,
        source: &dyn VenueStore,
    ) -> Result<LoadReport, ServiceError> {
        let mut report = LoadReport::default();
        let mut offset = 0usize;
        loop {
            let page = source.list_venues(offset, MAX_QUERY_LIMIT).await?;
            if page.items.is_empty() {
                break;
            }
            offset += page.items.len();
            report.merge(&self.load_venues(&page.items).await?);
            if offset as u64 >= page.total {
                break;
            }
        }
        Ok(report)
    }
}
