//! `SQLite` storage implementation
//!
//! All methods are synchronous; `sqlite_async` wraps them for the async
//! `VenueStore` trait.

// SQLite uses i64 for counts/limits, Rust uses usize - safe conversions within DB context
#![allow(
    clippy::as_conversions,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "SQLite i64 <-> Rust usize conversions are safe within DB row counts"
)]

mod venues;

use std::path::Path;
use std::sync::LazyLock;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use sailing_venues_core::env_config::sqlite_pool_size;
use sailing_venues_core::{
    ON_CONFLICT_REFRESH_COORDINATES, SailingVenue, VENUE_COLUMNS_SQL, VENUES_TABLE, VenueRecord,
};

use crate::error::StorageError;
use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Main storage struct wrapping `SQLite` connection pool
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

pub(crate) static UPSERT_SQL: LazyLock<String> = LazyLock::new(|| {
    format!(
        "INSERT INTO {VENUES_TABLE} ({VENUE_COLUMNS_SQL})
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
         {ON_CONFLICT_REFRESH_COORDINATES}"
    )
});

pub(crate) static SELECT_SQL: LazyLock<String> =
    LazyLock::new(|| format!("SELECT {VENUE_COLUMNS_SQL} FROM {VENUES_TABLE}"));

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Map a 13-column venue row (in `VENUE_COLUMNS` order) back into a `SailingVenue`.
pub(crate) fn row_to_venue(row: &rusqlite::Row<'_>) -> rusqlite::Result<SailingVenue> {
    let record = VenueRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        coordinates_lat: row.get(2)?,
        coordinates_lng: row.get(3)?,
        country: row.get(4)?,
        region: row.get(5)?,
        venue_type: row.get(6)?,
        time_zone: row.get(7)?,
        data_quality: row.get(8)?,
        osm_id: row.get(9)?,
        osm_type: row.get(10)?,
        data_source: row.get(11)?,
        verified: row.get(12)?,
    };
    SailingVenue::try_from(record).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Custom connection initializer for concurrency settings
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

impl Storage {
    /// Create new storage instance with `SQLite` connection pool
    ///
    /// # Errors
    /// Returns error if the pool cannot be built or migrations fail.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = sqlite_pool_size();
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        // Run migrations on first connection
        let conn = pool.get()?;
        migrations::run_migrations(&conn)?;
        drop(conn);

        tracing::info!(pool_size = pool_size, path = %db_path.display(), "Storage initialized with connection pool");

        Ok(Self { pool })
    }
}
