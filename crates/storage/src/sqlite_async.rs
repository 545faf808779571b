//! Async trait implementation for SQLite `Storage` via `spawn_blocking`.

use async_trait::async_trait;
use sailing_venues_core::SailingVenue;

use crate::Storage;
use crate::error::StorageError;
use crate::traits::VenueStore;
use crate::types::{BatchOutcome, PaginatedResult, UpsertOutcome, VenueStats};

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is annotated with a capture kind:
/// - `@ref arg`: `.clone()` a `&T`, pass as `&arg`
/// - `@str arg`: `.to_owned()` a `&str`, pass as `&arg`
/// - `@slice arg`: `.to_vec()` a `&[T]`, pass as `&arg`
/// - `@val arg`: move directly (Copy/owned types)
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture ref $arg:ident) => { let $arg = $arg.clone(); };
    (@capture str $arg:ident) => { let $arg = $arg.to_owned(); };
    (@capture slice $arg:ident) => { let $arg = $arg.to_vec(); };
    (@capture val $arg:ident) => { };
    (@pass ref $arg:ident) => { &$arg };
    (@pass str $arg:ident) => { &$arg };
    (@pass slice $arg:ident) => { &$arg };
    (@pass val $arg:ident) => { $arg };
}

#[async_trait]
impl VenueStore for Storage {
    async fn upsert_venue(&self, venue: &SailingVenue) -> Result<UpsertOutcome, StorageError> {
        delegate!(self, upsert_venue, @ref venue)
    }

    async fn upsert_venues(&self, venues: &[SailingVenue]) -> Result<BatchOutcome, StorageError> {
        delegate!(self, upsert_venues, @slice venues)
    }

    async fn get_venue(&self, id: &str) -> Result<Option<SailingVenue>, StorageError> {
        delegate!(self, get_venue, @str id)
    }

    async fn list_venues(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<PaginatedResult<SailingVenue>, StorageError> {
        delegate!(self, list_venues, @val offset, @val limit)
    }

    async fn get_stats(&self) -> Result<VenueStats, StorageError> {
        delegate!(self, get_stats)
    }
}
