//! The `SailingVenue` entity and its supporting types.

mod builder;
mod coordinates;
mod osm;
mod record;

pub use builder::*;
pub use coordinates::*;
pub use osm::*;
pub use record::*;

use serde::{Deserialize, Serialize};

/// One row of `sailing_venues`.
///
/// Identity (`id`, `osm_type`, `osm_id`) is fixed at construction; the id is
/// always `osm-<osm_type>-<osm_id>`. Serializes as the flat 13-column
/// [`VenueRecord`] shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "VenueRecord", try_from = "VenueRecord")]
pub struct SailingVenue {
    id: VenueId,
    coordinates: Coordinates,
    /// Human-readable name, free text
    pub name: String,
    /// Country code or `Unknown`
    pub country: String,
    /// Subnational code or `Unknown`
    pub region: String,
    pub venue_type: String,
    pub time_zone: String,
    pub data_quality: String,
    pub data_source: String,
    pub verified: bool,
}

impl SailingVenue {
    /// Returns a builder with the identity, name and position set and the
    /// observed OSM-import constants as defaults.
    #[must_use]
    pub fn builder(
        osm_type: OsmType,
        osm_id: impl Into<String>,
        name: impl Into<String>,
        coordinates: Coordinates,
    ) -> VenueBuilder {
        VenueBuilder::new(osm_type, osm_id.into(), name.into(), coordinates)
    }

    #[must_use]
    pub const fn id(&self) -> &VenueId {
        &self.id
    }

    #[must_use]
    pub const fn osm_type(&self) -> OsmType {
        self.id.osm_type()
    }

    #[must_use]
    pub fn osm_id(&self) -> &str {
        self.id.osm_id()
    }

    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.coordinates.lat()
    }

    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.coordinates.lng()
    }

    /// Replace the position. This is the only mutation the upsert path performs
    /// on an existing row.
    pub fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.coordinates = coordinates;
    }
}
