//! PostGIS implementation of the `HotelRepository` trait.
//!
//! Locations are stored as `geography(Point, 4326)`, so distances are true
//! geographic meters on the WGS84 ellipsoid. This is the authoritative
//! backend the planar substitute must agree with.

use async_trait::async_trait;
use sqlx::PgPool;

use stayfinder_core::domain::{GeoPoint, Hotel, NewHotel, SRID_WGS84};
use stayfinder_core::ports::{HotelRepository, RepositoryError};

use super::row_mappers::{HOTEL_SELECT_COLUMNS, row_to_hotel};

/// PostGIS implementation of the `HotelRepository` trait.
///
/// Holds a connection pool; every call checks a connection out of the pool
/// for the duration of that query only.
pub struct PostgresHotelRepository {
    pool: PgPool,
}

impl PostgresHotelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Pool/connection failures mean the backend is unreachable; everything
/// else is a storage-level failure.
fn map_sqlx_err(err: sqlx::Error) -> RepositoryError {
    use sqlx::Error;
    match err {
        Error::Io(_) | Error::Tls(_) | Error::PoolTimedOut | Error::PoolClosed => {
            RepositoryError::Unavailable(err.to_string())
        }
        _ => RepositoryError::Storage(err.to_string()),
    }
}

/// The geography column is WGS84; reject points declared in another system
/// instead of storing coordinates that would silently mean something else.
fn wgs84_lon_lat(point: &GeoPoint) -> Result<(f64, f64), RepositoryError> {
    if point.srid_or_default() != SRID_WGS84 {
        return Err(RepositoryError::Storage(format!(
            "hotel locations must be WGS84 longitude/latitude, got SRID {}",
            point.srid_or_default()
        )));
    }
    Ok((point.x, point.y))
}

#[async_trait]
impl HotelRepository for PostgresHotelRepository {
    async fn list(&self) -> Result<Vec<Hotel>, RepositoryError> {
        let query = format!("SELECT {HOTEL_SELECT_COLUMNS} FROM hotels ORDER BY id");

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        rows.iter().map(row_to_hotel).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Hotel, RepositoryError> {
        let query = format!("SELECT {HOTEL_SELECT_COLUMNS} FROM hotels WHERE id = $1");

        let row = sqlx::query(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_err)?
            .ok_or_else(|| RepositoryError::NotFound(format!("Hotel with ID {id}")))?;

        row_to_hotel(&row)
    }

    async fn insert(&self, hotel: &NewHotel) -> Result<Hotel, RepositoryError> {
        let (lon, lat) = wgs84_lon_lat(&hotel.location)?;

        let query = format!(
            "INSERT INTO hotels (name, price, location) \
             VALUES ($1, $2, ST_SetSRID(ST_MakePoint($3, $4), 4326)::geography) \
             RETURNING {HOTEL_SELECT_COLUMNS}"
        );

        let row = sqlx::query(&query)
            .bind(&hotel.name)
            .bind(hotel.price)
            .bind(lon)
            .bind(lat)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        row_to_hotel(&row)
    }

    async fn update(&self, hotel: &Hotel) -> Result<(), RepositoryError> {
        let (lon, lat) = wgs84_lon_lat(&hotel.location)?;

        let result = sqlx::query(
            "UPDATE hotels SET name = $1, price = $2, \
             location = ST_SetSRID(ST_MakePoint($3, $4), 4326)::geography \
             WHERE id = $5",
        )
        .bind(&hotel.name)
        .bind(hotel.price)
        .bind(lon)
        .bind(lat)
        .bind(hotel.id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Hotel with ID {}",
                hotel.id
            )));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM hotels WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Hotel with ID {id}")));
        }
        Ok(())
    }

    async fn search_within_distance(
        &self,
        origin: &GeoPoint,
        max_distance_m: f64,
        limit: i64,
    ) -> Result<Vec<Hotel>, RepositoryError> {
        let (lon, lat) = wgs84_lon_lat(origin)?;

        tracing::debug!(lon, lat, max_distance_m, limit, "hotel radius query");

        // ST_DWithin on geography is meters and uses the GIST index; the
        // distance ordering makes truncation under LIMIT deterministic and
        // identical to the planar substitute's nearest-first selection.
        let query = format!(
            "SELECT {HOTEL_SELECT_COLUMNS}, \
             ST_Distance(location, ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography) AS distance_m \
             FROM hotels \
             WHERE ST_DWithin(location, ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography, $3) \
             ORDER BY distance_m, id \
             LIMIT $4"
        );

        let rows = sqlx::query(&query)
            .bind(lon)
            .bind(lat)
            .bind(max_distance_m)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        rows.iter().map(row_to_hotel).collect()
    }
}
