//! Hotel repository trait definition.
//!
//! This port defines the interface for hotel persistence and the spatial
//! radius query. Implementations must handle all storage details
//! internally, including how distance is computed: geographic meters on a
//! true spatial engine, consistently-projected planar meters on a
//! substitute.

use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::{GeoPoint, Hotel, NewHotel};

/// Repository for hotel persistence and proximity queries.
///
/// Any connection or session the implementation needs is acquired and
/// released within each call; no state is retained across calls.
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// List all hotels.
    async fn list(&self) -> Result<Vec<Hotel>, RepositoryError>;

    /// Get a hotel by its store-assigned ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the hotel doesn't exist.
    async fn get_by_id(&self, id: i64) -> Result<Hotel, RepositoryError>;

    /// Insert a new hotel.
    ///
    /// Returns the persisted hotel with its assigned ID.
    async fn insert(&self, hotel: &NewHotel) -> Result<Hotel, RepositoryError>;

    /// Update an existing hotel.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the hotel doesn't exist.
    async fn update(&self, hotel: &Hotel) -> Result<(), RepositoryError>;

    /// Delete a hotel by its store-assigned ID.
    ///
    /// Returns `Err(RepositoryError::NotFound)` if the hotel doesn't exist.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    /// All hotels within `max_distance_m` meters of `origin`, capped at
    /// `limit` entries.
    ///
    /// Membership is defined by the backend's distance metric; conforming
    /// backends must agree on the resulting ID set for the same logical
    /// query. When more than `limit` hotels are eligible the nearest
    /// `limit` are kept (ties by ascending ID), which keeps truncation
    /// deterministic. Callers get no ordering guarantee beyond that:
    /// ranking is the search service's job.
    ///
    /// Returns `Err(RepositoryError::Unavailable)` if the backend cannot
    /// be reached; there are no internal retries.
    async fn search_within_distance(
        &self,
        origin: &GeoPoint,
        max_distance_m: f64,
        limit: i64,
    ) -> Result<Vec<Hotel>, RepositoryError>;
}
