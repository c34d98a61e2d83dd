//! Hotel service - orchestrates hotel CRUD operations.

use std::sync::Arc;

use crate::domain::{Hotel, NewHotel};
use crate::ports::{CoreError, HotelRepository, RepositoryError};

/// Service for hotel CRUD operations.
///
/// A thin facade over the injected [`HotelRepository`]: it adds input
/// validation and Option-shaped lookups, nothing more.
pub struct HotelService {
    repo: Arc<dyn HotelRepository>,
}

impl HotelService {
    pub fn new(repo: Arc<dyn HotelRepository>) -> Self {
        Self { repo }
    }

    /// List all hotels.
    pub async fn list(&self) -> Result<Vec<Hotel>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// Get a hotel by ID. Returns `Ok(None)` if it doesn't exist.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Hotel>, CoreError> {
        match self.repo.get_by_id(id).await {
            Ok(hotel) => Ok(Some(hotel)),
            Err(RepositoryError::NotFound(_)) => Ok(None),
            Err(e) => Err(CoreError::from(e)),
        }
    }

    /// Add a new hotel. Returns the persisted hotel with its assigned ID.
    pub async fn add(&self, hotel: NewHotel) -> Result<Hotel, CoreError> {
        validate_name_and_price(&hotel.name, hotel.price)?;
        self.repo.insert(&hotel).await.map_err(CoreError::from)
    }

    /// Update an existing hotel.
    pub async fn update(&self, hotel: &Hotel) -> Result<(), CoreError> {
        validate_name_and_price(&hotel.name, hotel.price)?;
        self.repo.update(hotel).await.map_err(CoreError::from)
    }

    /// Delete a hotel by ID.
    pub async fn delete(&self, id: i64) -> Result<(), CoreError> {
        self.repo.delete(id).await.map_err(CoreError::from)
    }
}

fn validate_name_and_price(name: &str, price: f64) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Hotel name cannot be empty".into()));
    }
    if !(price >= 0.0) {
        return Err(CoreError::Validation(format!(
            "Hotel price must be non-negative, got {price}"
        )));
    }
    Ok(())
}
