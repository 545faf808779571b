//! PostgreSQL storage backend using sqlx.

mod venues;

use std::sync::LazyLock;

use sailing_venues_core::{
    ON_CONFLICT_REFRESH_COORDINATES, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS,
    PG_POOL_MAX_CONNECTIONS, SailingVenue, VENUE_COLUMNS_SQL, VENUES_TABLE, VenueRecord,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;

use crate::pg_migrations::run_pg_migrations;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// # Errors
    /// Returns error if the connection or migrations fail.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

/// `xmax = 0` only holds for a freshly inserted tuple, so it tells an insert
/// apart from the conflict-update branch.
pub(crate) static UPSERT_SQL: LazyLock<String> = LazyLock::new(|| {
    format!(
        "INSERT INTO {VENUES_TABLE} ({VENUE_COLUMNS_SQL})
         VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9,$10,$11,$12,$13)
         {ON_CONFLICT_REFRESH_COORDINATES}
         RETURNING (xmax = 0) AS inserted"
    )
});

pub(crate) static SELECT_SQL: LazyLock<String> =
    LazyLock::new(|| format!("SELECT {VENUE_COLUMNS_SQL} FROM {VENUES_TABLE}"));

pub(crate) fn row_to_venue(row: &sqlx::postgres::PgRow) -> Result<SailingVenue, StorageError> {
    let record = VenueRecord {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        coordinates_lat: row.try_get("coordinates_lat")?,
        coordinates_lng: row.try_get("coordinates_lng")?,
        country: row.try_get("country")?,
        region: row.try_get("region")?,
        venue_type: row.try_get("venue_type")?,
        time_zone: row.try_get("time_zone")?,
        data_quality: row.try_get("data_quality")?,
        osm_id: row.try_get("osm_id")?,
        osm_type: row.try_get("osm_type")?,
        data_source: row.try_get("data_source")?,
        verified: row.try_get("verified")?,
    };
    Ok(SailingVenue::try_from(record)?)
}

/// Convert a DB count to u64, treating a negative value as corruption.
pub(crate) fn count_to_u64(value: i64, what: &str) -> Result<u64, StorageError> {
    u64::try_from(value).map_err(|e| StorageError::DataCorruption {
        context: format!("negative {what}"),
        source: Box::new(e),
    })
}
