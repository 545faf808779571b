#![allow(clippy::unwrap_used, reason = "test code")]

use super::{create_test_storage, create_test_venue};
use crate::BatchOutcome;
use sailing_venues_core::{Coordinates, OsmType};

#[test]
fn batch_counts_inserts_and_refreshes() {
    let (storage, _temp_dir) = create_test_storage();
    storage.upsert_venue(&create_test_venue(OsmType::Node, "1", 10.0, 20.0)).unwrap();

    let batch = vec![
        create_test_venue(OsmType::Node, "1", 10.5, 20.0),
        create_test_venue(OsmType::Node, "2", 11.0, 21.0),
        create_test_venue(OsmType::Way, "3", 12.0, 22.0),
    ];
    let outcome = storage.upsert_venues(&batch).unwrap();

    assert_eq!(outcome, BatchOutcome { inserted: 2, refreshed: 1 });
    assert_eq!(outcome.total(), 3);
    assert_eq!(storage.get_venue("osm-node-1").unwrap().unwrap().lat(), 10.5);
}

#[test]
fn duplicate_ids_in_one_batch_apply_in_order() {
    let (storage, _temp_dir) = create_test_storage();
    let batch = vec![
        create_test_venue(OsmType::Node, "7", 1.0, 1.0),
        create_test_venue(OsmType::Node, "7", 2.0, 2.0),
        create_test_venue(OsmType::Node, "7", 3.0, 3.0),
    ];
    let outcome = storage.upsert_venues(&batch).unwrap();

    assert_eq!(outcome, BatchOutcome { inserted: 1, refreshed: 2 });
    let row = storage.get_venue("osm-node-7").unwrap().unwrap();
    assert_eq!(row.coordinates(), Coordinates::new(3.0, 3.0).unwrap());
}

#[test]
fn empty_batch_is_a_no_op() {
    let (storage, _temp_dir) = create_test_storage();
    assert_eq!(storage.upsert_venues(&[]).unwrap(), BatchOutcome::default());
    assert_eq!(storage.get_stats().unwrap().venue_count, 0);
}

#[test]
fn failing_row_rolls_back_whole_batch() {
    let (storage, _temp_dir) = create_test_storage();
    storage
        .pool
        .get()
        .unwrap()
        .execute_batch(
            "CREATE TRIGGER reject_bad BEFORE INSERT ON sailing_venues
             WHEN NEW.osm_id = 'bad'
             BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .unwrap();

    let batch = vec![
        create_test_venue(OsmType::Node, "1", 1.0, 1.0),
        create_test_venue(OsmType::Node, "bad", 2.0, 2.0),
        create_test_venue(OsmType::Node, "3", 3.0, 3.0),
    ];
    assert!(storage.upsert_venues(&batch).is_err());

    assert!(storage.get_venue("osm-node-1").unwrap().is_none());
    assert_eq!(storage.get_stats().unwrap().venue_count, 0);
}
