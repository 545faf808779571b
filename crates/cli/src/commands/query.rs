use std::sync::Arc;

use anyhow::Result;
use sailing_venues_service::ExportService;
use sailing_venues_storage::StorageBackend;

pub(crate) async fn run_get(storage: Arc<StorageBackend>, id: &str) -> Result<()> {
    match ExportService::new(storage).get_venue(id).await? {
        Some(venue) => println!("{}", serde_json::to_string_pretty(&venue)?),
        None => println!("Venue not found: {id}"),
    }
    Ok(())
}

pub(crate) async fn run_list(storage: Arc<StorageBackend>, offset: usize, limit: usize) -> Result<()> {
    let page = ExportService::new(storage).list_venues(offset, limit).await?;
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}

pub(crate) async fn run_stats(storage: Arc<StorageBackend>) -> Result<()> {
    let stats = ExportService::new(storage).get_stats().await?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
