use rusqlite::{Connection, TransactionBehavior, params};
use sailing_venues_core::{MAX_QUERY_LIMIT, SailingVenue};

use super::{SELECT_SQL, Storage, UPSERT_SQL, get_conn, row_to_venue};
use crate::error::StorageError;
use crate::types::{BatchOutcome, PaginatedResult, STATS_SQL, UpsertOutcome, VenueStats};

/// Run one upsert on an open connection/transaction.
///
/// The existence probe and the write share the caller's transaction, so the
/// reported outcome matches what the statement did. Callers open that
/// transaction IMMEDIATE so the probe already holds the write lock.
fn upsert_on(conn: &Connection, venue: &SailingVenue) -> Result<UpsertOutcome, StorageError> {
    let existed: bool = conn
        .prepare_cached("SELECT EXISTS(SELECT 1 FROM sailing_venues WHERE id = ?1)")?
        .query_row(params![venue.id().as_str()], |row| row.get(0))?;

    conn.prepare_cached(&UPSERT_SQL)?.execute(params![
        venue.id().as_str(),
        venue.name,
        venue.lat(),
        venue.lng(),
        venue.country,
        venue.region,
        venue.venue_type,
        venue.time_zone,
        venue.data_quality,
        venue.osm_id(),
        venue.osm_type().as_str(),
        venue.data_source,
        venue.verified,
    ])?;

    let outcome =
        if existed { UpsertOutcome::CoordinatesRefreshed } else { UpsertOutcome::Inserted };
    tracing::debug!(id = %venue.id(), ?outcome, "venue upserted");
    Ok(outcome)
}

impl Storage {
    /// Upsert one venue, refreshing only coordinates on conflict.
    ///
    /// # Errors
    /// Returns error if the statement violates a constraint or the database fails.
    pub fn upsert_venue(&self, venue: &SailingVenue) -> Result<UpsertOutcome, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let outcome = upsert_on(&tx, venue)?;
        tx.commit()?;
        Ok(outcome)
    }

    /// Upsert venues in order inside a single transaction.
    ///
    /// # Errors
    /// Returns the first failure; nothing from this batch is committed.
    pub fn upsert_venues(&self, venues: &[SailingVenue]) -> Result<BatchOutcome, StorageError> {
        let mut batch = BatchOutcome::default();
        if venues.is_empty() {
            return Ok(batch);
        }
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        for venue in venues {
            batch.record(upsert_on(&tx, venue)?);
        }
        tx.commit()?;
        Ok(batch)
    }

    /// Get venue by ID.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_venue(&self, id: &str) -> Result<Option<SailingVenue>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!("{} WHERE id = ?1", *SELECT_SQL))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(row_to_venue(row)?))
        } else {
            Ok(None)
        }
    }

    /// Page through venues ordered by id.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn list_venues(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<PaginatedResult<SailingVenue>, StorageError> {
        let limit = limit.min(MAX_QUERY_LIMIT);
        let conn = get_conn(&self.pool)?;
        let total: i64 =
            conn.query_row("SELECT COUNT(*) FROM sailing_venues", [], |row| row.get(0))?;
        let mut stmt =
            conn.prepare(&format!("{} ORDER BY id LIMIT ?1 OFFSET ?2", *SELECT_SQL))?;
        let items = stmt
            .query_map(params![limit as i64, offset as i64], row_to_venue)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PaginatedResult::new(items, total as u64, offset as u64, limit as u64))
    }

    /// Aggregate counts over the table.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_stats(&self) -> Result<VenueStats, StorageError> {
        let conn = get_conn(&self.pool)?;
        let stats = conn.query_row(STATS_SQL, [], |row| {
            Ok(VenueStats {
                venue_count: row.get::<_, i64>(0)? as u64,
                node_count: row.get::<_, i64>(1)? as u64,
                way_count: row.get::<_, i64>(2)? as u64,
                relation_count: row.get::<_, i64>(3)? as u64,
                unknown_country_count: row.get::<_, i64>(4)? as u64,
                verified_count: row.get::<_, i64>(5)? as u64,
            })
        })?;
        Ok(stats)
    }
}
