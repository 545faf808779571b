use std::path::Path;

use anyhow::Result;
use sailing_venues_core::sql::render_script;
use sailing_venues_service::{VenueFormat, read_venues};

use crate::write_output;

pub(crate) async fn run_render(
    file: &Path,
    format: Option<VenueFormat>,
    output: Option<&Path>,
) -> Result<()> {
    let venues = read_venues(file, format).await?;
    write_output(output, &render_script(&venues))
}
