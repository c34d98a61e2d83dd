//! Storage backends for stayfinder.
//!
//! Two conforming implementations of the `HotelRepository` port:
//!
//! - [`PostgresHotelRepository`]: the authoritative engine. Locations are
//!   PostGIS `geography` values and radius queries use true geographic
//!   (ellipsoidal) distance in meters.
//! - [`MemoryHotelRepository`]: a planar substitute for environments
//!   without PostGIS (fast/offline testing). It projects every coordinate
//!   into a configured planar reference system so its distances agree with
//!   the authoritative engine.
//!
//! Both backends must return the same hotel-ID set for the same logical
//! radius query; the test suite holds them to that.

pub mod factory;
pub mod repositories;
pub mod setup;

pub use factory::CoreFactory;
pub use repositories::{MemoryHotelRepository, PostgresHotelRepository};
pub use setup::{reset_database, setup_database};
