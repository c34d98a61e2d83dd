//! Row-to-domain mapping for the Postgres repository.

use sqlx::Row;
use sqlx::postgres::PgRow;

use stayfinder_core::domain::{GeoPoint, Hotel, SRID_WGS84};
use stayfinder_core::ports::RepositoryError;

/// SELECT column list shared by every hotel query.
///
/// The geography value is unpacked into WGS84 longitude/latitude here so
/// no PostGIS wire types cross into the domain.
pub(crate) const HOTEL_SELECT_COLUMNS: &str =
    "id, name, price, ST_X(location::geometry) AS lon, ST_Y(location::geometry) AS lat";

pub(crate) fn row_to_hotel(row: &PgRow) -> Result<Hotel, RepositoryError> {
    let id: i64 = get(row, "id")?;
    let name: String = get(row, "name")?;
    let price: f64 = get(row, "price")?;
    let lon: f64 = get(row, "lon")?;
    let lat: f64 = get(row, "lat")?;

    Ok(Hotel {
        id,
        name,
        price,
        location: GeoPoint::with_srid(lon, lat, SRID_WGS84),
    })
}

fn get<'r, T>(row: &'r PgRow, column: &str) -> Result<T, RepositoryError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(column)
        .map_err(|e| RepositoryError::Storage(format!("column {column}: {e}")))
}
