//! PostgreSQL schema migrations for the sailing venues store.

use sqlx::PgPool;

/// Run all PostgreSQL migrations.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sailing_venues (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            coordinates_lat DOUBLE PRECISION NOT NULL
                CHECK (coordinates_lat BETWEEN -90 AND 90),
            coordinates_lng DOUBLE PRECISION NOT NULL
                CHECK (coordinates_lng BETWEEN -180 AND 180),
            country TEXT NOT NULL DEFAULT 'Unknown',
            region TEXT NOT NULL DEFAULT 'Unknown',
            venue_type TEXT NOT NULL,
            time_zone TEXT NOT NULL,
            data_quality TEXT NOT NULL,
            osm_id TEXT NOT NULL,
            osm_type TEXT NOT NULL CHECK (osm_type IN ('node', 'way', 'relation')),
            data_source TEXT NOT NULL,
            verified BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_venues_osm ON sailing_venues (osm_type, osm_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_venues_country ON sailing_venues (country)")
        .execute(pool)
        .await?;

    tracing::info!("PostgreSQL migrations complete");
    Ok(())
}
