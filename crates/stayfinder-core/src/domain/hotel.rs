//! Hotel domain types.

use serde::{Deserialize, Serialize};

use super::point::GeoPoint;

/// A hotel that exists in the system with a store-assigned ID.
///
/// Use [`NewHotel`] for hotels that haven't been persisted yet. The search
/// subsystem reads hotels as immutable snapshots taken at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    /// Store-assigned identifier (always present for persisted hotels).
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Nightly price. Non-negative, enforced at the service boundary.
    pub price: f64,
    /// Geographic location. Stored in WGS84 unless an SRID says otherwise.
    pub location: GeoPoint,
}

/// A hotel to be inserted into the system (no ID yet).
///
/// After insertion the repository returns a [`Hotel`] with the assigned ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHotel {
    pub name: String,
    pub price: f64,
    pub location: GeoPoint,
}

impl NewHotel {
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64, location: GeoPoint) -> Self {
        Self {
            name: name.into(),
            price,
            location,
        }
    }
}

impl Hotel {
    /// Convert this hotel to a [`NewHotel`] (drops the ID).
    #[must_use]
    pub fn to_new_hotel(&self) -> NewHotel {
        NewHotel {
            name: self.name.clone(),
            price: self.price,
            location: self.location,
        }
    }
}

/// One entry of a ranked search response: a hotel snapshot plus its score.
///
/// Ephemeral: exists only for the duration of one search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelSearchResult {
    pub hotel: Hotel,
    pub score: f64,
}
