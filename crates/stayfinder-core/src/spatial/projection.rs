//! Forward coordinate transforms between registered reference systems.
//!
//! `project_to` takes a point whose SRID identifies a geodetic system
//! (absent SRID defaults to WGS84) and produces the same location expressed
//! in a target system from the registry. The transforms are the standard
//! ellipsoidal series for the transverse Mercator and Lambert conformal
//! conic (2SP) projections; accuracy is millimeter-level within each
//! system's area of use, far beyond what metric-consistent distance checks
//! need.

use thiserror::Error;

use super::crs::{self, Ellipsoid, Projection};
use crate::domain::GeoPoint;

/// Errors from the projection helper.
///
/// Both variants indicate a configuration/deployment defect rather than a
/// bad query: the registry is fixed at build time and callers only ask for
/// systems they were configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// The SRID is not present in the reference system registry.
    #[error("unknown reference system: SRID {0} is not registered")]
    UnknownReferenceSystem(i32),

    /// The source system is projected; only geodetic sources are supported.
    #[error("unsupported transform from SRID {from} to SRID {to}: source must be geodetic")]
    UnsupportedTransform { from: i32, to: i32 },

    /// Two points given to a distance computation are in different systems.
    #[error("points are in different reference systems: SRID {left} vs SRID {right}")]
    MismatchedReferenceSystems { left: i32, right: i32 },
}

/// Project a point into the target reference system.
///
/// The source system comes from the point itself; an absent (or zero) SRID
/// defaults to WGS84. The input is not mutated; the returned point carries
/// the target SRID. `z` passes through untouched.
pub fn project_to(point: &GeoPoint, target_srid: i32) -> Result<GeoPoint, ProjectionError> {
    let source_srid = point.srid_or_default();
    let source =
        crs::lookup(source_srid).ok_or(ProjectionError::UnknownReferenceSystem(source_srid))?;
    let target =
        crs::lookup(target_srid).ok_or(ProjectionError::UnknownReferenceSystem(target_srid))?;

    if source.srid == target.srid {
        return Ok(GeoPoint {
            srid: Some(target.srid),
            ..*point
        });
    }

    if !source.is_geographic() {
        return Err(ProjectionError::UnsupportedTransform {
            from: source.srid,
            to: target.srid,
        });
    }

    let (x, y) = match target.projection {
        // Same-datum geodetic target: coordinates are unchanged.
        Projection::Geographic => (point.x, point.y),
        Projection::TransverseMercator {
            latitude_of_origin,
            central_meridian,
            scale_factor,
            false_easting,
            false_northing,
        } => tm_forward(
            &target.ellipsoid,
            latitude_of_origin,
            central_meridian,
            scale_factor,
            false_easting,
            false_northing,
            point.x,
            point.y,
        ),
        Projection::LambertConformalConic {
            standard_parallel_1,
            standard_parallel_2,
            latitude_of_origin,
            central_meridian,
            false_easting,
            false_northing,
        } => lcc_forward(
            &target.ellipsoid,
            standard_parallel_1,
            standard_parallel_2,
            latitude_of_origin,
            central_meridian,
            false_easting,
            false_northing,
            point.x,
            point.y,
        ),
    };

    Ok(GeoPoint {
        x,
        y,
        z: point.z,
        srid: Some(target.srid),
    })
}

/// Meridian arc length from the equator to latitude `phi` (radians).
fn meridian_arc(ellipsoid: &Ellipsoid, phi: f64) -> f64 {
    let a = ellipsoid.semi_major_axis;
    let e2 = ellipsoid.eccentricity_squared();
    let e4 = e2 * e2;
    let e6 = e4 * e2;

    a * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
        - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
        + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
        - (35.0 * e6 / 3072.0) * (6.0 * phi).sin())
}

/// Ellipsoidal transverse Mercator forward transform.
#[allow(clippy::too_many_arguments)]
fn tm_forward(
    ellipsoid: &Ellipsoid,
    latitude_of_origin: f64,
    central_meridian: f64,
    scale_factor: f64,
    false_easting: f64,
    false_northing: f64,
    lon: f64,
    lat: f64,
) -> (f64, f64) {
    let a = ellipsoid.semi_major_axis;
    let e2 = ellipsoid.eccentricity_squared();
    let ep2 = e2 / (1.0 - e2);

    let phi = lat.to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();

    // Radius of curvature in the prime vertical.
    let nu = a / (1.0 - e2 * sin_phi * sin_phi).sqrt();
    let t = phi.tan().powi(2);
    let c = ep2 * cos_phi * cos_phi;
    let aa = (lon - central_meridian).to_radians() * cos_phi;

    let m = meridian_arc(ellipsoid, phi);
    let m0 = meridian_arc(ellipsoid, latitude_of_origin.to_radians());

    let x = false_easting
        + scale_factor
            * nu
            * (aa
                + (1.0 - t + c) * aa.powi(3) / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * aa.powi(5) / 120.0);

    let y = false_northing
        + scale_factor
            * (m - m0
                + nu * phi.tan()
                    * (aa.powi(2) / 2.0
                        + (5.0 - t + 9.0 * c + 4.0 * c * c) * aa.powi(4) / 24.0
                        + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * aa.powi(6)
                            / 720.0));

    (x, y)
}

/// Lambert conformal conic (two standard parallels) forward transform.
#[allow(clippy::too_many_arguments)]
fn lcc_forward(
    ellipsoid: &Ellipsoid,
    standard_parallel_1: f64,
    standard_parallel_2: f64,
    latitude_of_origin: f64,
    central_meridian: f64,
    false_easting: f64,
    false_northing: f64,
    lon: f64,
    lat: f64,
) -> (f64, f64) {
    let a = ellipsoid.semi_major_axis;
    let e2 = ellipsoid.eccentricity_squared();
    let e = e2.sqrt();

    // m(φ) = cos φ / sqrt(1 - e² sin² φ)
    let m = |phi: f64| phi.cos() / (1.0 - e2 * phi.sin() * phi.sin()).sqrt();
    // t(φ) = tan(π/4 - φ/2) / [(1 - e sin φ)/(1 + e sin φ)]^(e/2)
    let t = |phi: f64| {
        let sin_phi = phi.sin();
        (std::f64::consts::FRAC_PI_4 - phi / 2.0).tan()
            / ((1.0 - e * sin_phi) / (1.0 + e * sin_phi)).powf(e / 2.0)
    };

    let phi1 = standard_parallel_1.to_radians();
    let phi2 = standard_parallel_2.to_radians();
    let phi0 = latitude_of_origin.to_radians();
    let phi = lat.to_radians();

    let n = (m(phi1).ln() - m(phi2).ln()) / (t(phi1).ln() - t(phi2).ln());
    let f = m(phi1) / (n * t(phi1).powf(n));
    let rho = |phi: f64| a * f * t(phi).powf(n);

    let theta = n * (lon - central_meridian).to_radians();

    let x = false_easting + rho(phi) * theta.sin();
    let y = false_northing + rho(phi0) - rho(phi) * theta.cos();

    (x, y)
}
