//! Distance between two points, in meters.
//!
//! The metric depends on the reference system: great-circle distance for
//! geodetic coordinates, planar Euclidean distance for projected ones.
//! This is what lets the same scoring code run unchanged over WGS84 data
//! (the PostGIS backend) and projected data (the planar substitute).

use geo::{EuclideanDistance, HaversineDistance, Point};

use super::crs;
use super::projection::ProjectionError;
use crate::domain::GeoPoint;

/// Distance in meters between two points in the same reference system.
///
/// Geodetic systems use great-circle (haversine) distance; projected
/// systems use planar distance on their meter-based coordinates. Points in
/// different systems are rejected rather than silently mixed.
pub fn distance_meters(a: &GeoPoint, b: &GeoPoint) -> Result<f64, ProjectionError> {
    let srid = a.srid_or_default();
    let other = b.srid_or_default();
    if srid != other {
        return Err(ProjectionError::MismatchedReferenceSystems {
            left: srid,
            right: other,
        });
    }

    let crs = crs::lookup(srid).ok_or(ProjectionError::UnknownReferenceSystem(srid))?;

    let pa = Point::new(a.x, a.y);
    let pb = Point::new(b.x, b.y);
    if crs.is_geographic() {
        Ok(pa.haversine_distance(&pb))
    } else {
        Ok(pa.euclidean_distance(&pb))
    }
}
