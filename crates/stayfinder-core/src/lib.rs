//! Core domain types and port definitions for stayfinder.
//!
//! This crate is infrastructure-free: it holds the domain model, the
//! coordinate reference system registry and projection math, the port
//! traits storage adapters implement, and the services that orchestrate
//! them. Adapters (database, web, CLI) live in sibling crates.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod settings;
pub mod spatial;

#[cfg(any(test, feature = "test-utils"))]
pub mod testdata;

// Re-export commonly used types for convenience
pub use domain::{GeoPoint, Hotel, HotelSearchResult, NewHotel, SRID_WGS84};
pub use ports::{CoreError, HotelRepository, RepositoryError, ScoreCalculator};
pub use services::{
    DistanceWeightedScoreCalculator, HotelSearchService, HotelService, SearchError,
};
pub use settings::{
    DEFAULT_CANDIDATE_LIMIT, DEFAULT_MAX_DISTANCE_M, DEFAULT_PAGE_SIZE, SearchSettings,
    SettingsError,
};
pub use spatial::{Crs, Ellipsoid, Projection, ProjectionError, distance_meters, project_to};
