//! Coordinate reference systems, projections and distance math.
//!
//! A planar distance computed directly on geodetic degrees is not
//! comparable to the meters-based distance a geographic engine computes on
//! an ellipsoid. Projecting the query point and the stored points into the
//! same metric-consistent projected system before doing planar math makes
//! client-side distance checks agree with the authoritative engine, to
//! within the projection's accuracy for the region of interest. This is
//! what keeps the in-memory substitute backend numerically consistent with
//! PostGIS.
//!
//! # Structure
//!
//! - `crs` - the immutable reference system registry
//! - `projection` - forward transforms (`project_to`)
//! - `distance` - great-circle vs planar distance dispatch

mod crs;
mod distance;
mod projection;

pub use crs::{Crs, Ellipsoid, Projection, lookup};
pub use distance::distance_meters;
pub use projection::{ProjectionError, project_to};
