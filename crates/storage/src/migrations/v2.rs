//! Migration v2: lookup indexes

pub(super) const SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_venues_osm ON sailing_venues(osm_type, osm_id);
CREATE INDEX IF NOT EXISTS idx_venues_country ON sailing_venues(country);
";
