#![allow(clippy::unwrap_used, reason = "test code")]

use super::{create_test_storage, create_test_venue};
use crate::StorageError;
use sailing_venues_core::{Coordinates, MAX_QUERY_LIMIT, OsmType, SailingVenue};

#[test]
fn list_venues_pages_in_id_order() {
    let (storage, _temp_dir) = create_test_storage();
    for id in ["30", "10", "20"] {
        storage.upsert_venue(&create_test_venue(OsmType::Node, id, 0.0, 0.0)).unwrap();
    }
    storage.upsert_venue(&create_test_venue(OsmType::Way, "5", 0.0, 0.0)).unwrap();

    let first = storage.list_venues(0, 2).unwrap();
    assert_eq!(first.total, 4);
    assert_eq!(first.limit, 2);
    let ids: Vec<&str> = first.items.iter().map(|v| v.id().as_str()).collect();
    assert_eq!(ids, ["osm-node-10", "osm-node-20"]);

    let rest = storage.list_venues(2, 10).unwrap();
    let ids: Vec<&str> = rest.items.iter().map(|v| v.id().as_str()).collect();
    assert_eq!(ids, ["osm-node-30", "osm-way-5"]);
    assert_eq!(rest.offset, 2);

    assert!(storage.list_venues(10, 10).unwrap().items.is_empty());
}

#[test]
fn list_venues_clamps_limit() {
    let (storage, _temp_dir) = create_test_storage();
    let page = storage.list_venues(0, usize::MAX).unwrap();
    assert_eq!(page.limit, MAX_QUERY_LIMIT as u64);
}

#[test]
fn stats_count_by_type_country_and_verification() {
    let (storage, _temp_dir) = create_test_storage();
    storage.upsert_venue(&create_test_venue(OsmType::Node, "1", 0.0, 0.0)).unwrap();
    storage.upsert_venue(&create_test_venue(OsmType::Node, "2", 0.0, 0.0)).unwrap();
    storage.upsert_venue(&create_test_venue(OsmType::Way, "3", 0.0, 0.0)).unwrap();
    let unknown = SailingVenue::builder(
        OsmType::Relation,
        "4",
        "Nowhere Yacht Club",
        Coordinates::new(0.0, 0.0).unwrap(),
    )
    .verified(true)
    .build()
    .unwrap();
    storage.upsert_venue(&unknown).unwrap();

    let stats = storage.get_stats().unwrap();
    assert_eq!(stats.venue_count, 4);
    assert_eq!(stats.node_count, 2);
    assert_eq!(stats.way_count, 1);
    assert_eq!(stats.relation_count, 1);
    assert_eq!(stats.unknown_country_count, 1);
    assert_eq!(stats.verified_count, 1);
}

#[test]
fn stored_row_with_inconsistent_id_reports_data_corruption() {
    let (storage, _temp_dir) = create_test_storage();
    storage
        .pool
        .get()
        .unwrap()
        .execute(
            "INSERT INTO sailing_venues (id, name, coordinates_lat, coordinates_lng, country, region,
                venue_type, time_zone, data_quality, osm_id, osm_type, data_source, verified)
             VALUES ('osm-way-1', 'Drifted', 1.0, 1.0, 'US', 'FL',
                'regional', 'UTC', 'osm', '1', 'node', 'osm', 0)",
            [],
        )
        .unwrap();

    let err = storage.get_venue("osm-way-1").unwrap_err();
    assert!(matches!(err, StorageError::DataCorruption { .. }), "got {err:?}");
    let err = storage.list_venues(0, 10).unwrap_err();
    assert!(matches!(err, StorageError::DataCorruption { .. }), "got {err:?}");
}
