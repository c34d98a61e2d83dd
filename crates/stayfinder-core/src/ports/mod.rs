//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` types in any signature
//! - Repositories are CRUD plus the one spatial query; ranking and
//!   pagination belong to the search service, not here

pub mod hotel_repository;
pub mod score_calculator;

use thiserror::Error;

pub use hotel_repository::HotelRepository;
pub use score_calculator::ScoreCalculator;

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (sqlx
/// errors, lock poisoning, etc.) and gives services a clean interface for
/// handling storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The storage backend could not be reached. Not retried here; retry
    /// policy, if any, belongs to the caller's infrastructure.
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),

    /// Storage backend error (bad query, constraint failure, etc.).
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (HTTP status codes, CLI exit
/// codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),
}
