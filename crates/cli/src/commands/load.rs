use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use sailing_venues_core::env_config;
use sailing_venues_service::{LoadService, VenueFormat};
use sailing_venues_storage::StorageBackend;

pub(crate) async fn run_load(
    storage: Arc<StorageBackend>,
    files: &[PathBuf],
    format: Option<VenueFormat>,
    batch_size: Option<usize>,
) -> Result<()> {
    let batch_size = batch_size.unwrap_or_else(env_config::batch_size);
    tracing::info!(backend = storage.kind(), files = files.len(), batch_size, "loading venues");
    let service = LoadService::new(storage, batch_size);
    let report = service.load_files(files, format).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
