//! Geographic point type.

use serde::{Deserialize, Serialize};

/// SRID of the standard geodetic system (WGS84, EPSG:4326).
///
/// Points that carry no reference system identifier are interpreted as
/// WGS84 longitude/latitude.
pub const SRID_WGS84: i32 = 4326;

/// A point in some coordinate reference system.
///
/// `x`/`y` are longitude/latitude for geographic systems and
/// easting/northing (meters) for projected ones. The optional `srid`
/// identifies the reference system; `None` or `0` means "unset" and
/// defaults to WGS84, matching the convention of spatial stores where a
/// zero SRID marks an unassigned system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub x: f64,
    pub y: f64,
    /// Optional elevation. Carried through projections untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srid: Option<i32>,
}

impl GeoPoint {
    /// Create a point with no explicit reference system (treated as WGS84).
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            srid: None,
        }
    }

    /// Create a point in an explicit reference system.
    #[must_use]
    pub const fn with_srid(x: f64, y: f64, srid: i32) -> Self {
        Self {
            x,
            y,
            z: None,
            srid: Some(srid),
        }
    }

    /// The effective SRID of this point (`None`/`0` default to WGS84).
    #[must_use]
    pub fn srid_or_default(&self) -> i32 {
        match self.srid {
            None | Some(0) => SRID_WGS84,
            Some(srid) => srid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_srid_defaults_to_wgs84() {
        assert_eq!(GeoPoint::new(15.95, 45.77).srid_or_default(), SRID_WGS84);
        assert_eq!(
            GeoPoint::with_srid(15.95, 45.77, 0).srid_or_default(),
            SRID_WGS84
        );
        assert_eq!(
            GeoPoint::with_srid(500_000.0, 5_070_000.0, 32633).srid_or_default(),
            32633
        );
    }

    #[test]
    fn serializes_without_optional_fields() {
        let json = serde_json::to_string(&GeoPoint::new(15.95, 45.77)).unwrap();
        assert_eq!(json, r#"{"x":15.95,"y":45.77}"#);
    }
}
