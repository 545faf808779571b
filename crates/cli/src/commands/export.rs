use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use sailing_venues_service::{ExportService, VenueFormat};
use sailing_venues_storage::StorageBackend;

use crate::write_output;

pub(crate) async fn run_export(
    storage: Arc<StorageBackend>,
    format: VenueFormat,
    output: Option<&Path>,
) -> Result<()> {
    let service = ExportService::new(storage);
    let content = service.export(format).await?;
    write_output(output, &content)
}
