//! Shared constants for sailing-venues.
//!
//! Table and column names live here so the SQLite and PostgreSQL backends and
//! the fixture renderer all agree on one statement shape.

/// Target table for every upsert.
pub const VENUES_TABLE: &str = "sailing_venues";

/// Column order used by every INSERT, SELECT and rendered fixture.
pub const VENUE_COLUMNS: [&str; 13] = [
    "id",
    "name",
    "coordinates_lat",
    "coordinates_lng",
    "country",
    "region",
    "venue_type",
    "time_zone",
    "data_quality",
    "osm_id",
    "osm_type",
    "data_source",
    "verified",
];

/// Comma-joined form of [`VENUE_COLUMNS`] for single-line queries.
pub const VENUE_COLUMNS_SQL: &str = "id, name, coordinates_lat, coordinates_lng, country, region, \
     venue_type, time_zone, data_quality, osm_id, osm_type, data_source, verified";

/// Conflict clause shared by all backends. Only the coordinates are refreshed.
pub const ON_CONFLICT_REFRESH_COORDINATES: &str = "ON CONFLICT (id) DO UPDATE SET
  coordinates_lat = EXCLUDED.coordinates_lat,
  coordinates_lng = EXCLUDED.coordinates_lng";

/// Sentinel used instead of NULL for missing country/region.
pub const UNKNOWN: &str = "Unknown";

/// Observed constant `venue_type` for OSM imports.
pub const DEFAULT_VENUE_TYPE: &str = "regional";

/// Observed constant `time_zone`; not geographically resolved.
pub const DEFAULT_TIME_ZONE: &str = "UTC";

/// Observed constant `data_quality` tag.
pub const DEFAULT_DATA_QUALITY: &str = "osm";

/// Observed constant `data_source` tag.
pub const DEFAULT_DATA_SOURCE: &str = "osm";

/// Prefix of every synthesized venue id.
pub const VENUE_ID_PREFIX: &str = "osm";

/// Default number of venues per loader transaction.
pub const DEFAULT_BATCH_SIZE: usize = 500;

/// Maximum number of venues returned by a single list call.
pub const MAX_QUERY_LIMIT: usize = 1000;

/// Default number of results when limit is not specified by the caller.
pub const DEFAULT_QUERY_LIMIT: usize = 20;

/// SQLite connection pool size.
pub const SQLITE_POOL_SIZE: u32 = 4;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Environment variable: SQLite database path.
pub const ENV_DB_PATH: &str = "SAILING_VENUES_DB";

/// Environment variable: SQLite pool size.
pub const ENV_DB_POOL_SIZE: &str = "SAILING_VENUES_DB_POOL_SIZE";

/// Environment variable: loader chunk size.
pub const ENV_BATCH_SIZE: &str = "SAILING_VENUES_BATCH_SIZE";

/// Environment variable: PostgreSQL connection string.
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
