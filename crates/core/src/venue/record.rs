//! Flat serde shape of a venue row, used for JSON Lines input and output.

use serde::{Deserialize, Serialize};

use super::{Coordinates, OsmType, SailingVenue, VenueId};
use crate::constants::UNKNOWN;
use crate::error::CoreError;

fn unknown() -> String {
    UNKNOWN.to_owned()
}

/// All 13 columns of `sailing_venues`, unvalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueRecord {
    pub id: String,
    pub name: String,
    pub coordinates_lat: f64,
    pub coordinates_lng: f64,
    #[serde(default = "unknown")]
    pub country: String,
    #[serde(default = "unknown")]
    pub region: String,
    pub venue_type: String,
    pub time_zone: String,
    pub data_quality: String,
    pub osm_id: String,
    pub osm_type: String,
    pub data_source: String,
    pub verified: bool,
}

impl TryFrom<VenueRecord> for SailingVenue {
    type Error = CoreError;

    fn try_from(record: VenueRecord) -> Result<Self, Self::Error> {
        let osm_type: OsmType = record.osm_type.parse()?;
        let coordinates = Coordinates::new(record.coordinates_lat, record.coordinates_lng)?;
        let expected = VenueId::from_osm(osm_type, &record.osm_id)?;
        if expected.as_str() != record.id {
            return Err(CoreError::IdMismatch { id: record.id, expected: expected.to_string() });
        }
        SailingVenue::builder(osm_type, record.osm_id, record.name, coordinates)
            .country(record.country)
            .region(record.region)
            .venue_type(record.venue_type)
            .time_zone(record.time_zone)
            .data_quality(record.data_quality)
            .data_source(record.data_source)
            .verified(record.verified)
            .build()
    }
}

impl From<SailingVenue> for VenueRecord {
    fn from(venue: SailingVenue) -> Self {
        Self {
            id: venue.id().to_string(),
            osm_id: venue.osm_id().to_owned(),
            osm_type: venue.osm_type().as_str().to_owned(),
            coordinates_lat: venue.lat(),
            coordinates_lng: venue.lng(),
            name: venue.name,
            country: venue.country,
            region: venue.region,
            venue_type: venue.venue_type,
            time_zone: venue.time_zone,
            data_quality: venue.data_quality,
            data_source: venue.data_source,
            verified: venue.verified,
        }
    }
}

/// Parse JSON Lines input, one [`VenueRecord`] per non-blank line.
///
/// # Errors
/// Returns `Parse` with the 1-based line number of the first bad line.
pub fn parse_jsonl(input: &str) -> Result<Vec<SailingVenue>, CoreError> {
    let mut venues = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let record: VenueRecord = serde_json::from_str(trimmed)
            .map_err(|e| CoreError::Parse { line: line_no, message: e.to_string() })?;
        let venue = SailingVenue::try_from(record)
            .map_err(|e| CoreError::Parse { line: line_no, message: e.to_string() })?;
        venues.push(venue);
    }
    Ok(venues)
}

/// Serialize venues as JSON Lines.
///
/// # Errors
/// Returns `Serialization` if a record cannot be encoded.
pub fn to_jsonl(venues: &[SailingVenue]) -> Result<String, CoreError> {
    let mut out = String::new();
    for venue in venues {
        out.push_str(&serde_json::to_string(venue)?);
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "test code")]

    use super::*;

    const MARINA: &str = r#"{"id":"osm-node-1","name":"Test Marina","coordinates_lat":10.0,"coordinates_lng":20.0,"country":"US","region":"FL","venue_type":"regional","time_zone":"UTC","data_quality":"osm","osm_id":"1","osm_type":"node","data_source":"osm","verified":false}"#;

    #[test]
    fn parses_full_record() {
        let venues = parse_jsonl(MARINA).unwrap();
        assert_eq!(venues.len(), 1);
        let venue = &venues[0];
        assert_eq!(venue.id().as_str(), "osm-node-1");
        assert_eq!(venue.name, "Test Marina");
        assert_eq!(venue.country, "US");
        assert_eq!(venue.region, "FL");
        assert_eq!(venue.lat(), 10.0);
    }

    #[test]
    fn missing_country_and_region_default_to_unknown() {
        let line = r#"{"id":"osm-way-42","name":"L'Anse Yacht Club","coordinates_lat":-33.5,"coordinates_lng":151.2,"venue_type":"regional","time_zone":"UTC","data_quality":"osm","osm_id":"42","osm_type":"way","data_source":"osm","verified":false}"#;
        let venues = parse_jsonl(line).unwrap();
        assert_eq!(venues[0].country, "Unknown");
        assert_eq!(venues[0].region, "Unknown");
        assert_eq!(venues[0].name, "L'Anse Yacht Club");
    }

    #[test]
    fn rejects_id_mismatch_with_line_number() {
        let bad = MARINA.replace("osm-node-1", "osm-node-2");
        let input = format!("\n{MARINA}\n{bad}\n");
        let err = parse_jsonl(&input).unwrap_err();
        match err {
            CoreError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("osm-node-2"));
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let bad = MARINA.replace("\"coordinates_lat\":10.0", "\"coordinates_lat\":95.0");
        assert!(parse_jsonl(&bad).is_err());
    }

    #[test]
    fn venue_serializes_as_flat_record() {
        let venue = parse_jsonl(MARINA).unwrap().remove(0);
        let value = serde_json::to_value(&venue).unwrap();
        assert_eq!(value["id"], "osm-node-1");
        assert_eq!(value["osm_type"], "node");
        assert_eq!(value["coordinates_lng"], 20.0);
        assert_eq!(value["verified"], false);

        let jsonl = to_jsonl(&[venue.clone()]).unwrap();
        assert_eq!(parse_jsonl(&jsonl).unwrap(), vec![venue]);
    }
}
