//! VenueStore implementation for PgStorage.

use async_trait::async_trait;
use sailing_venues_core::{MAX_QUERY_LIMIT, SailingVenue};
use sqlx::{PgConnection, Row};

use super::{PgStorage, SELECT_SQL, UPSERT_SQL, count_to_u64, row_to_venue};
use crate::error::StorageError;
use crate::traits::VenueStore;
use crate::types::{BatchOutcome, PaginatedResult, STATS_SQL, UpsertOutcome, VenueStats};

async fn upsert_on(
    conn: &mut PgConnection,
    venue: &SailingVenue,
) -> Result<UpsertOutcome, StorageError> {
    let inserted: bool = sqlx::query_scalar(UPSERT_SQL.as_str())
        .bind(venue.id().as_str())
        .bind(&venue.name)
        .bind(venue.lat())
        .bind(venue.lng())
        .bind(&venue.country)
        .bind(&venue.region)
        .bind(&venue.venue_type)
        .bind(&venue.time_zone)
        .bind(&venue.data_quality)
        .bind(venue.osm_id())
        .bind(venue.osm_type().as_str())
        .bind(&venue.data_source)
        .bind(venue.verified)
        .fetch_one(conn)
        .await?;
    let outcome =
        if inserted { UpsertOutcome::Inserted } else { UpsertOutcome::CoordinatesRefreshed };
    tracing::debug!(id = %venue.id(), ?outcome, "venue upserted");
    Ok(outcome)
}

#[async_trait]
impl VenueStore for PgStorage {
    async fn upsert_venue(&self, venue: &SailingVenue) -> Result<UpsertOutcome, StorageError> {
        let mut conn = self.pool.acquire().await?;
        upsert_on(&mut conn, venue).await
    }

    async fn upsert_venues(&self, venues: &[SailingVenue]) -> Result<BatchOutcome, StorageError> {
        let mut batch = BatchOutcome::default();
        if venues.is_empty() {
            return Ok(batch);
        }
        let mut tx = self.pool.begin().await?;
        for venue in venues {
            batch.record(upsert_on(&mut tx, venue).await?);
        }
        tx.commit().await?;
        Ok(batch)
    }

    async fn get_venue(&self, id: &str) -> Result<Option<SailingVenue>, StorageError> {
        let row = sqlx::query(&format!("{} WHERE id = $1", *SELECT_SQL))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_venue(&r)).transpose()
    }

    async fn list_venues(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<PaginatedResult<SailingVenue>, StorageError> {
        let limit = limit.min(MAX_QUERY_LIMIT);
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sailing_venues")
            .fetch_one(&self.pool)
            .await?;
        let rows = sqlx::query(&format!("{} ORDER BY id LIMIT $1 OFFSET $2", *SELECT_SQL))
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .bind(i64::try_from(offset).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await?;
        let items = rows.iter().map(row_to_venue).collect::<Result<Vec<_>, _>>()?;
        Ok(PaginatedResult::new(
            items,
            count_to_u64(total, "venue count")?,
            offset as u64,
            limit as u64,
        ))
    }

    async fn get_stats(&self) -> Result<VenueStats, StorageError> {
        let row = sqlx::query(STATS_SQL).fetch_one(&self.pool).await?;
        Ok(VenueStats {
            venue_count: count_to_u64(row.try_get(0)?, "venue_count")?,
            node_count: count_to_u64(row.try_get(1)?, "node_count")?,
            way_count: count_to_u64(row.try_get(2)?, "way_count")?,
            relation_count: count_to_u64(row.try_get(3)?, "relation_count")?,
            unknown_country_count: count_to_u64(row.try_get(4)?, "unknown_country_count")?,
            verified_count: count_to_u64(row.try_get(5)?, "verified_count")?,
        })
    }
}
