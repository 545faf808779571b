//! Test utilities and module declarations for storage tests.

use crate::Storage;
use sailing_venues_core::{Coordinates, OsmType, SailingVenue};
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_storage() -> (Storage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    (storage, temp_dir)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_venue(osm_type: OsmType, osm_id: &str, lat: f64, lng: f64) -> SailingVenue {
    SailingVenue::builder(
        osm_type,
        osm_id,
        format!("Test Marina {osm_id}"),
        Coordinates::new(lat, lng).unwrap(),
    )
    .country("US")
    .region("FL")
    .build()
    .unwrap()
}

mod batch_tests;
mod query_tests;
