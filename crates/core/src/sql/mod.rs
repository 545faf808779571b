//! The SQL fixture format: rendering venues as upsert statements and parsing
//! such scripts back into venues.

mod parse;
mod render;

pub use parse::parse_script;
pub use render::{float_literal, quote_literal, render_script, render_upsert, render_values};

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "test code")]

    use super::*;
    use crate::error::CoreError;
    use crate::venue::{Coordinates, OsmType, SailingVenue};

    const FIXTURE: &str = "-- generated from OSM export
INSERT INTO sailing_venues (
  id, name, coordinates_lat, coordinates_lng, country, region,
  venue_type, time_zone, data_quality, osm_id, osm_type, data_source, verified
) VALUES ('osm-node-1', 'Test Marina', 10.0, 20.0, 'US', 'FL', 'regional', 'UTC', 'osm', '1', 'node', 'osm', false)
ON CONFLICT (id) DO UPDATE SET
  coordinates_lat = EXCLUDED.coordinates_lat,
  coordinates_lng = EXCLUDED.coordinates_lng;

INSERT INTO sailing_venues (
  id, name, coordinates_lat, coordinates_lng, country, region,
  venue_type, time_zone, data_quality, osm_id, osm_type, data_source, verified
) VALUES ('osm-way-42', 'Captain''s Cove /* not a comment */', -33.8688, 151.2093, 'Unknown', 'Unknown', 'regional', 'UTC', 'osm', '42', 'way', 'osm', false)
ON CONFLICT (id) DO UPDATE SET
  coordinates_lat = EXCLUDED.coordinates_lat,
  coordinates_lng = EXCLUDED.coordinates_lng;
";

    #[test]
    fn parses_fixture_statements() {
        let venues = parse_script(FIXTURE).unwrap();
        assert_eq!(venues.len(), 2);
        assert_eq!(venues[0].id().as_str(), "osm-node-1");
        assert_eq!(venues[0].lat(), 10.0);
        assert_eq!(venues[0].region, "FL");
        assert_eq!(venues[1].id().as_str(), "osm-way-42");
        assert_eq!(venues[1].name, "Captain's Cove /* not a comment */");
        assert_eq!(venues[1].lng(), 151.2093);
        assert_eq!(venues[1].country, "Unknown");
    }

    #[test]
    fn render_then_parse_preserves_unicode_and_quotes() {
        let venue = SailingVenue::builder(
            OsmType::Node,
            "7700123",
            "Société Nautique d'Ouchy - Port ⚓",
            Coordinates::new(46.5048, 6.6268).unwrap(),
        )
        .country("CH")
        .region("VD")
        .build()
        .unwrap();
        let parsed = parse_script(&render_upsert(&venue)).unwrap();
        assert_eq!(parsed, vec![venue]);
    }

    #[test]
    fn accepts_multi_row_values_any_column_order_and_transactions() {
        let script = "BEGIN;
/* batch 1 */
INSERT INTO public.sailing_venues (osm_type, osm_id, id, name, coordinates_lng, coordinates_lat,
  venue_type, time_zone, data_quality, data_source, verified)
VALUES
  ('node', '5', 'osm-node-5', 'A', 1.0, 2.0, 'regional', 'UTC', 'osm', 'osm', FALSE),
  ('way', '6', 'osm-way-6', 'B', -1e-3, 0.5, 'regional', 'UTC', 'osm', 'osm', 0);
COMMIT;";
        let venues = parse_script(script).unwrap();
        assert_eq!(venues.len(), 2);
        assert_eq!(venues[0].lat(), 2.0);
        assert_eq!(venues[0].lng(), 1.0);
        assert_eq!(venues[0].country, "Unknown");
        assert_eq!(venues[1].lng(), -0.001);
        assert!(!venues[1].verified);
    }

    #[test]
    fn reports_line_of_bad_row() {
        let script = "INSERT INTO sailing_venues (id, name, coordinates_lat, coordinates_lng, country, region,
  venue_type, time_zone, data_quality, osm_id, osm_type, data_source, verified)
VALUES
  ('osm-node-1', 'ok', 1.0, 1.0, 'US', 'FL', 'regional', 'UTC', 'osm', '1', 'node', 'osm', false),
  ('osm-node-9', 'bad', 91.0, 1.0, 'US', 'FL', 'regional', 'UTC', 'osm', '9', 'node', 'osm', false);";
        match parse_script(script).unwrap_err() {
            CoreError::Parse { line, message } => {
                assert_eq!(line, 5);
                assert!(message.contains("out of range"), "{message}");
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_other_tables_and_statements() {
        assert!(parse_script("INSERT INTO marinas (id) VALUES ('x');").is_err());
        assert!(parse_script("DELETE FROM sailing_venues;").is_err());
    }

    #[test]
    fn rejects_unterminated_string() {
        let err = parse_script("INSERT INTO sailing_venues (id) VALUES ('oops);").unwrap_err();
        assert!(matches!(err, CoreError::Parse { line: 1, .. }));
    }

    #[test]
    fn rejects_id_inconsistent_with_osm_parts() {
        let script = "INSERT INTO sailing_venues (id, name, coordinates_lat, coordinates_lng, country, region,
  venue_type, time_zone, data_quality, osm_id, osm_type, data_source, verified)
VALUES ('osm-way-1', 'x', 1.0, 1.0, 'US', 'FL', 'regional', 'UTC', 'osm', '1', 'node', 'osm', false);";
        let err = parse_script(script).unwrap_err();
        assert!(err.to_string().contains("osm-node-1"), "{err}");
    }

    #[test]
    fn rejects_statements_without_terminator() {
        let script = FIXTURE.replacen(
            "coordinates_lng = EXCLUDED.coordinates_lng;",
            "coordinates_lng = EXCLUDED.coordinates_lng",
            1,
        );
        assert!(matches!(parse_script(&script).unwrap_err(), CoreError::Parse { .. }));
    }

    #[test]
    fn rejects_conflict_clauses_other_than_coordinate_refresh() {
        let head = "INSERT INTO sailing_venues (id, name, coordinates_lat, coordinates_lng,
  venue_type, time_zone, data_quality, osm_id, osm_type, data_source, verified)
VALUES ('osm-node-1', 'x', 1.0, 1.0, 'regional', 'UTC', 'osm', '1', 'node', 'osm', false)";
        let clauses = [
            "ON CONFLICT (id) DO NOTHING",
            "ON CONFLICT DO NOTHING",
            "ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name",
            "ON CONFLICT (id) DO UPDATE SET coordinates_lat = EXCLUDED.coordinates_lat",
            "ON CONFLICT (osm_id) DO UPDATE SET coordinates_lat = EXCLUDED.coordinates_lat, \
             coordinates_lng = EXCLUDED.coordinates_lng",
            "ON CONFLICT (id) DO UPDATE SET coordinates_lat = EXCLUDED.coordinates_lat, \
             coordinates_lng = EXCLUDED.coordinates_lng WHERE sailing_venues.verified = false",
        ];
        for clause in clauses {
            let err = parse_script(&format!("{head}\n{clause};")).unwrap_err();
            assert!(matches!(err, CoreError::Parse { .. }), "{clause}: {err}");
        }

        let swapped = format!(
            "{head}\nON CONFLICT (id) DO UPDATE SET coordinates_lng = excluded.coordinates_lng, \
             coordinates_lat = excluded.coordinates_lat;"
        );
        assert_eq!(parse_script(&swapped).unwrap().len(), 1);
        assert_eq!(parse_script(&format!("{head};")).unwrap().len(), 1);
    }

    #[test]
    fn empty_and_comment_only_scripts_yield_nothing() {
        assert!(parse_script("").unwrap().is_empty());
        assert!(parse_script("-- nothing here\n/* still nothing */\n").unwrap().is_empty());
    }
}
