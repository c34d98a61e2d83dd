//! The coordinate reference system registry.
//!
//! A fixed, process-wide table mapping SRIDs to their defining parameters.
//! Read-only after initialization, safe for concurrent access from any
//! number of requests. Unknown SRIDs are a configuration/deployment error,
//! not a runtime query error.

/// Reference ellipsoid, given as semi-major axis (meters) and inverse
/// flattening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub semi_major_axis: f64,
    pub inverse_flattening: f64,
}

impl Ellipsoid {
    pub const WGS84: Self = Self {
        semi_major_axis: 6_378_137.0,
        inverse_flattening: 298.257_223_563,
    };

    pub const GRS80: Self = Self {
        semi_major_axis: 6_378_137.0,
        inverse_flattening: 298.257_222_101,
    };

    /// First eccentricity squared: `e² = f(2 - f)`.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        let f = 1.0 / self.inverse_flattening;
        f * (2.0 - f)
    }
}

/// How a reference system maps the ellipsoid to coordinates.
///
/// Angles are degrees, lengths meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Geodetic longitude/latitude, no projection.
    Geographic,
    TransverseMercator {
        latitude_of_origin: f64,
        central_meridian: f64,
        scale_factor: f64,
        false_easting: f64,
        false_northing: f64,
    },
    /// Two-standard-parallel variant.
    LambertConformalConic {
        standard_parallel_1: f64,
        standard_parallel_2: f64,
        latitude_of_origin: f64,
        central_meridian: f64,
        false_easting: f64,
        false_northing: f64,
    },
}

/// One registry entry: an SRID plus its defining parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crs {
    pub srid: i32,
    pub name: &'static str,
    pub ellipsoid: Ellipsoid,
    pub projection: Projection,
}

impl Crs {
    /// Whether coordinates in this system are geodetic degrees.
    #[must_use]
    pub fn is_geographic(&self) -> bool {
        matches!(self.projection, Projection::Geographic)
    }
}

// Datum shifts between these systems and WGS84 are zero or sub-meter
// (HTRS96 declares TOWGS84[0,0,0,...]), so the registry carries ellipsoid
// parameters only.
static REGISTRY: &[Crs] = &[
    Crs {
        srid: 4326,
        name: "WGS 84",
        ellipsoid: Ellipsoid::WGS84,
        projection: Projection::Geographic,
    },
    Crs {
        srid: 2855,
        name: "NAD83(HARN) / Washington North",
        ellipsoid: Ellipsoid::GRS80,
        projection: Projection::LambertConformalConic {
            standard_parallel_1: 48.733_333_333_333_33,
            standard_parallel_2: 47.5,
            latitude_of_origin: 47.0,
            central_meridian: -120.833_333_333_333_3,
            false_easting: 500_000.0,
            false_northing: 0.0,
        },
    },
    Crs {
        srid: 32633,
        name: "WGS 84 / UTM zone 33N",
        ellipsoid: Ellipsoid::WGS84,
        projection: Projection::TransverseMercator {
            latitude_of_origin: 0.0,
            central_meridian: 15.0,
            scale_factor: 0.9996,
            false_easting: 500_000.0,
            false_northing: 0.0,
        },
    },
    Crs {
        srid: 3765,
        name: "HTRS96 / Croatia TM",
        ellipsoid: Ellipsoid::GRS80,
        projection: Projection::TransverseMercator {
            latitude_of_origin: 0.0,
            central_meridian: 16.5,
            scale_factor: 0.9999,
            false_easting: 500_000.0,
            false_northing: 0.0,
        },
    },
];

/// Look up a reference system by SRID.
#[must_use]
pub fn lookup(srid: i32) -> Option<&'static Crs> {
    REGISTRY.iter().find(|crs| crs.srid == srid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_contains_known_systems() {
        for srid in [4326, 2855, 32633, 3765] {
            assert!(lookup(srid).is_some(), "SRID {srid} missing from registry");
        }
        assert!(lookup(9999).is_none());
    }

    #[test]
    fn wgs84_is_geographic_utm_is_not() {
        assert!(lookup(4326).unwrap().is_geographic());
        assert!(!lookup(32633).unwrap().is_geographic());
    }

    #[test]
    fn eccentricity_matches_wgs84() {
        // Known WGS84 value: e² ≈ 0.00669437999014
        let e2 = Ellipsoid::WGS84.eccentricity_squared();
        assert!((e2 - 0.006_694_379_990_14).abs() < 1e-12);
    }
}
