//! SQLite → PostgreSQL migration command.
//!
//! Copies every venue from the local SQLite database into PostgreSQL through
//! the regular upsert path, so re-running it only refreshes coordinates.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use sailing_venues_core::env_config;
use sailing_venues_service::LoadService;
use sailing_venues_storage::{StorageBackend, VenueStore};

pub(crate) async fn run(
    db: Option<&Path>,
    database_url: Option<&str>,
    batch_size: Option<usize>,
) -> Result<()> {
    let sqlite = crate::open_sqlite(db)?;
    let pg_url = database_url.context("DATABASE_URL must be set for migration target")?;
    let pg = StorageBackend::new_postgres(pg_url)
        .await
        .context("failed to connect to PostgreSQL")?;

    let source_stats = sqlite.get_stats().await?;
    println!("Migrating {} venues...", source_stats.venue_count);

    let service =
        LoadService::new(Arc::new(pg), batch_size.unwrap_or_else(env_config::batch_size));
    let report = service.load_from_store(&sqlite).await?;
    println!(
        "  venues: {} inserted, {} refreshed ({} batches)",
        report.inserted, report.refreshed, report.batches
    );
    Ok(())
}
