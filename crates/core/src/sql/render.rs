//! Rendering venues as `INSERT ... ON CONFLICT` fixture statements.

use std::fmt::Write as _;

use crate::constants::{ON_CONFLICT_REFRESH_COORDINATES, VENUES_TABLE};
use crate::venue::SailingVenue;

/// Quote a string as a SQL literal, doubling embedded single quotes.
#[must_use]
pub fn quote_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

/// Format a coordinate so it always reads back as a float (`10.0`, not `10`).
#[must_use]
pub fn float_literal(v: f64) -> String {
    format!("{v:?}")
}

/// The parenthesized VALUES tuple for one venue, in column order.
#[must_use]
pub fn render_values(venue: &SailingVenue) -> String {
    format!(
        "({}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {}, {})",
        quote_literal(venue.id().as_str()),
        quote_literal(&venue.name),
        float_literal(venue.lat()),
        float_literal(venue.lng()),
        quote_literal(&venue.country),
        quote_literal(&venue.region),
        quote_literal(&venue.venue_type),
        quote_literal(&venue.time_zone),
        quote_literal(&venue.data_quality),
        quote_literal(venue.osm_id()),
        quote_literal(venue.osm_type().as_str()),
        quote_literal(&venue.data_source),
        venue.verified,
    )
}

/// One complete upsert statement, terminated by `;`.
#[must_use]
pub fn render_upsert(venue: &SailingVenue) -> String {
    format!(
        "INSERT INTO {VENUES_TABLE} (
  id, name, coordinates_lat, coordinates_lng, country, region,
  venue_type, time_zone, data_quality, osm_id, osm_type, data_source, verified
) VALUES {}
{ON_CONFLICT_REFRESH_COORDINATES};",
        render_values(venue)
    )
}

/// A script of upsert statements separated by blank lines.
#[must_use]
pub fn render_script(venues: &[SailingVenue]) -> String {
    let mut out = String::new();
    for (i, venue) in venues.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", render_upsert(venue));
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "test code")]

    use super::*;
    use crate::venue::{Coordinates, OsmType};

    fn marina() -> SailingVenue {
        SailingVenue::builder(OsmType::Node, "1", "Test Marina", Coordinates::new(10.0, 20.0).unwrap())
            .country("US")
            .region("FL")
            .build()
            .unwrap()
    }

    #[test]
    fn renders_exact_statement_shape() {
        let expected = "INSERT INTO sailing_venues (
  id, name, coordinates_lat, coordinates_lng, country, region,
  venue_type, time_zone, data_quality, osm_id, osm_type, data_source, verified
) VALUES ('osm-node-1', 'Test Marina', 10.0, 20.0, 'US', 'FL', 'regional', 'UTC', 'osm', '1', 'node', 'osm', false)
ON CONFLICT (id) DO UPDATE SET
  coordinates_lat = EXCLUDED.coordinates_lat,
  coordinates_lng = EXCLUDED.coordinates_lng;";
        assert_eq!(render_upsert(&marina()), expected);
    }

    #[test]
    fn doubles_apostrophes() {
        assert_eq!(quote_literal("Captain's Cove"), "'Captain''s Cove'");
        assert_eq!(quote_literal("''"), "''''''");
        assert_eq!(quote_literal("Société Nautique"), "'Société Nautique'");
    }

    #[test]
    fn floats_keep_decimal_point() {
        assert_eq!(float_literal(10.0), "10.0");
        assert_eq!(float_literal(-122.4194155), "-122.4194155");
    }

    #[test]
    fn script_separates_statements_with_blank_line() {
        let second = SailingVenue::builder(OsmType::Way, "42", "Harbour", Coordinates::new(1.5, 2.5).unwrap())
            .build()
            .unwrap();
        let script = render_script(&[marina(), second]);
        assert_eq!(script.matches("INSERT INTO sailing_venues").count(), 2);
        assert!(script.contains("coordinates_lng = EXCLUDED.coordinates_lng;\n\nINSERT INTO"));
        assert!(script.ends_with(";\n"));
    }

    #[test]
    fn empty_script_is_empty() {
        assert!(render_script(&[]).is_empty());
    }
}
