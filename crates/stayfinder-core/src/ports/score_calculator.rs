//! Score calculator trait definition.

use crate::domain::{GeoPoint, Hotel};

/// Relevance scoring for one hotel against one query point.
///
/// Implementations must be pure and total: deterministic, no I/O, never
/// failing for a validly-constructed hotel/point pair. Higher scores are
/// more relevant, and, all else equal, a closer hotel must never score
/// lower than a farther one, so ranking reflects proximity.
pub trait ScoreCalculator: Send + Sync {
    fn calculate_score(&self, hotel: &Hotel, origin: &GeoPoint) -> f64;
}
