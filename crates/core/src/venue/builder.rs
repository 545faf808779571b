//! Builder for [`SailingVenue`].

use super::{Coordinates, OsmType, SailingVenue, VenueId};
use crate::constants::{
    DEFAULT_DATA_QUALITY, DEFAULT_DATA_SOURCE, DEFAULT_TIME_ZONE, DEFAULT_VENUE_TYPE, UNKNOWN,
};
use crate::error::CoreError;

/// Builder for constructing [`SailingVenue`] instances.
#[derive(Debug, Clone)]
pub struct VenueBuilder {
    osm_type: OsmType,
    osm_id: String,
    name: String,
    coordinates: Coordinates,
    country: String,
    region: String,
    venue_type: String,
    time_zone: String,
    data_quality: String,
    data_source: String,
    verified: bool,
}

impl VenueBuilder {
    #[must_use]
    pub(super) fn new(
        osm_type: OsmType,
        osm_id: String,
        name: String,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            osm_type,
            osm_id,
            name,
            coordinates,
            country: UNKNOWN.to_owned(),
            region: UNKNOWN.to_owned(),
            venue_type: DEFAULT_VENUE_TYPE.to_owned(),
            time_zone: DEFAULT_TIME_ZONE.to_owned(),
            data_quality: DEFAULT_DATA_QUALITY.to_owned(),
            data_source: DEFAULT_DATA_SOURCE.to_owned(),
            verified: false,
        }
    }

    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = or_unknown(country.into());
        self
    }

    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = or_unknown(region.into());
        self
    }

    #[must_use]
    pub fn venue_type(mut self, venue_type: impl Into<String>) -> Self {
        self.venue_type = venue_type.into();
        self
    }

    #[must_use]
    pub fn time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = time_zone.into();
        self
    }

    #[must_use]
    pub fn data_quality(mut self, data_quality: impl Into<String>) -> Self {
        self.data_quality = data_quality.into();
        self
    }

    #[must_use]
    pub fn data_source(mut self, data_source: impl Into<String>) -> Self {
        self.data_source = data_source.into();
        self
    }

    #[must_use]
    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    /// # Errors
    /// Returns `InvalidVenueId` if the OSM id cannot form a venue id.
    pub fn build(self) -> Result<SailingVenue, CoreError> {
        let id = VenueId::from_osm(self.osm_type, &self.osm_id)?;
        Ok(SailingVenue {
            id,
            coordinates: self.coordinates,
            name: self.name,
            country: self.country,
            region: self.region,
            venue_type: self.venue_type,
            time_zone: self.time_zone,
            data_quality: self.data_quality,
            data_source: self.data_source,
            verified: self.verified,
        })
    }
}

/// Blank country/region values collapse to the `Unknown` sentinel; anything
/// else is kept verbatim.
fn or_unknown(value: String) -> String {
    if value.trim().is_empty() { UNKNOWN.to_owned() } else { value }
}
