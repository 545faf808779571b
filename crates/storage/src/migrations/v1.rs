//! Migration v1: sailing_venues table

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS sailing_venues (
    id TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    coordinates_lat REAL NOT NULL CHECK (coordinates_lat BETWEEN -90 AND 90),
    coordinates_lng REAL NOT NULL CHECK (coordinates_lng BETWEEN -180 AND 180),
    country TEXT NOT NULL DEFAULT 'Unknown',
    region TEXT NOT NULL DEFAULT 'Unknown',
    venue_type TEXT NOT NULL,
    time_zone TEXT NOT NULL,
    data_quality TEXT NOT NULL,
    osm_id TEXT NOT NULL,
    osm_type TEXT NOT NULL CHECK (osm_type IN ('node', 'way', 'relation')),
    data_source TEXT NOT NULL,
    verified INTEGER NOT NULL DEFAULT 0 CHECK (verified IN (0, 1))
);
";
