//! OpenStreetMap element kinds and the synthesized venue id.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::VENUE_ID_PREFIX;
use crate::error::CoreError;

/// Kind of OSM element a venue was derived from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum OsmType {
    Node,
    Way,
    Relation,
}

impl OsmType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Node => "node",
            Self::Way => "way",
            Self::Relation => "relation",
        }
    }
}

impl fmt::Display for OsmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OsmType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "node" => Ok(Self::Node),
            "way" => Ok(Self::Way),
            "relation" => Ok(Self::Relation),
            other => Err(CoreError::InvalidOsmType(other.to_owned())),
        }
    }
}

/// Primary key of a venue: `osm-<osm_type>-<osm_id>`.
///
/// Always constructed from validated parts, so the kind and raw OSM id can be
/// read back without re-parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VenueId {
    value: String,
    osm_type: OsmType,
    osm_id_offset: usize,
}

impl VenueId {
    /// Synthesize the id for an OSM element.
    ///
    /// # Errors
    /// Returns `InvalidVenueId` if `osm_id` is empty or contains whitespace.
    pub fn from_osm(osm_type: OsmType, osm_id: &str) -> Result<Self, CoreError> {
        validate_osm_id(osm_id)?;
        let prefix_len = VENUE_ID_PREFIX.len() + osm_type.as_str().len() + 2;
        Ok(Self {
            value: format!("{VENUE_ID_PREFIX}-{osm_type}-{osm_id}"),
            osm_type,
            osm_id_offset: prefix_len,
        })
    }

    /// Parse an existing `osm-<type>-<id>` string.
    ///
    /// # Errors
    /// Returns `InvalidVenueId` if the prefix, kind or OSM id part is malformed.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        let invalid = || CoreError::InvalidVenueId(s.to_owned());
        let rest = s
            .strip_prefix(VENUE_ID_PREFIX)
            .and_then(|r| r.strip_prefix('-'))
            .ok_or_else(invalid)?;
        let (kind, osm_id) = rest.split_once('-').ok_or_else(invalid)?;
        let osm_type: OsmType = kind.parse().map_err(|_| invalid())?;
        Self::from_osm(osm_type, osm_id).map_err(|_| invalid())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn osm_type(&self) -> OsmType {
        self.osm_type
    }

    #[must_use]
    pub fn osm_id(&self) -> &str {
        self.value.get(self.osm_id_offset..).unwrap_or_default()
    }
}

fn validate_osm_id(osm_id: &str) -> Result<(), CoreError> {
    if osm_id.is_empty() || osm_id.chars().any(char::is_whitespace) {
        return Err(CoreError::InvalidVenueId(format!("bad osm_id {osm_id:?}")));
    }
    Ok(())
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for VenueId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for VenueId {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl Serialize for VenueId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for VenueId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "test code")]

    use super::*;

    #[test]
    fn id_is_deterministic() {
        let a = VenueId::from_osm(OsmType::Node, "123").unwrap();
        let b = VenueId::from_osm(OsmType::Node, "123").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "osm-node-123");
    }

    #[test]
    fn same_osm_id_different_type_gives_distinct_ids() {
        let node = VenueId::from_osm(OsmType::Node, "42").unwrap();
        let way = VenueId::from_osm(OsmType::Way, "42").unwrap();
        assert_ne!(node, way);
        assert_eq!(way.as_str(), "osm-way-42");
    }

    #[test]
    fn parse_recovers_parts() {
        let id = VenueId::parse("osm-way-987654321").unwrap();
        assert_eq!(id.osm_type(), OsmType::Way);
        assert_eq!(id.osm_id(), "987654321");

        let relation = VenueId::parse("osm-relation-7").unwrap();
        assert_eq!(relation.osm_type(), OsmType::Relation);
        assert_eq!(relation.osm_id(), "7");
    }

    #[test]
    fn parse_rejects_malformed_ids() {
        for bad in ["", "osm", "osm-node", "osm-node-", "node-1", "osm-area-1", "osm-node-1 2"] {
            assert!(VenueId::parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn from_osm_rejects_empty_id() {
        assert!(matches!(
            VenueId::from_osm(OsmType::Node, ""),
            Err(CoreError::InvalidVenueId(_))
        ));
    }

    #[test]
    fn osm_type_from_str() {
        assert_eq!("node".parse::<OsmType>().unwrap(), OsmType::Node);
        assert_eq!("way".parse::<OsmType>().unwrap(), OsmType::Way);
        assert!("Node".parse::<OsmType>().is_err());
    }

    #[test]
    fn venue_id_serializes_as_plain_string() {
        let id = VenueId::from_osm(OsmType::Node, "5").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"osm-node-5\"");
        let back: VenueId = serde_json::from_str("\"osm-node-5\"").unwrap();
        assert_eq!(back, id);
    }
}
