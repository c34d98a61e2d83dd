//! Database setup and initialization.
//!
//! `setup_database()` connects to PostgreSQL and ensures the PostGIS
//! extension, the hotels table and its spatial index exist. Entry points
//! call this once with the configured connection string.

use anyhow::Result;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Connect to the database and ensure the schema exists.
///
/// Safe to call against an already-initialized database: every statement
/// uses `IF NOT EXISTS`.
///
/// # Errors
///
/// Returns an error if the database cannot be reached, the PostGIS
/// extension cannot be created (it needs superuser or a pre-installed
/// extension), or schema creation fails.
pub async fn setup_database(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    create_schema(&pool).await?;

    Ok(pool)
}

/// Create the PostGIS extension, tables and indexes.
async fn create_schema(pool: &PgPool) -> Result<()> {
    sqlx::query("CREATE EXTENSION IF NOT EXISTS postgis")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS hotels (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            location geography(Point, 4326) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Spatial index so ST_DWithin stays an index scan as the table grows.
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_hotels_location ON hotels USING GIST (location)")
        .execute(pool)
        .await?;

    Ok(())
}

/// Empty the hotels table and restart ID assignment.
///
/// Test-harness helper for integration tests that need a pristine store
/// with IDs starting from 1.
pub async fn reset_database(pool: &PgPool) -> Result<()> {
    sqlx::query("TRUNCATE TABLE hotels RESTART IDENTITY")
        .execute(pool)
        .await?;
    Ok(())
}
