//! Search settings and validation.
//!
//! Process-wide configuration for the proximity search, loaded once at
//! startup. Pure domain types with no infrastructure dependencies.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default search radius in meters.
pub const DEFAULT_MAX_DISTANCE_M: f64 = 5_000.0;

/// Default cap on candidates the repository may return before scoring.
pub const DEFAULT_CANDIDATE_LIMIT: i64 = 100;

/// Default number of entries per result page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Settings for the proximity search pipeline.
///
/// Invariants (checked by [`SearchSettings::validate`], enforced once at
/// startup): all three values strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum search distance in meters.
    pub max_distance_m: f64,
    /// Maximum number of candidates fetched from the repository. Bounds
    /// per-request scoring/sorting cost independent of table size.
    pub limit: i64,
    /// Entries per page of the ranked response.
    pub page_size: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_distance_m: DEFAULT_MAX_DISTANCE_M,
            limit: DEFAULT_CANDIDATE_LIMIT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchSettings {
    /// Check the positivity invariants. Called once at startup; a failure
    /// aborts boot rather than surfacing per-request.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.max_distance_m > 0.0) {
            return Err(SettingsError::InvalidMaxDistance(self.max_distance_m));
        }
        if self.limit <= 0 {
            return Err(SettingsError::InvalidCandidateLimit(self.limit));
        }
        if self.page_size == 0 {
            return Err(SettingsError::InvalidPageSize(self.page_size));
        }
        Ok(())
    }
}

/// Search settings validation error.
#[derive(Debug, Clone, Error)]
pub enum SettingsError {
    #[error("Max search distance must be positive meters, got {0}")]
    InvalidMaxDistance(f64),

    #[error("Candidate limit must be positive, got {0}")]
    InvalidCandidateLimit(i64),

    #[error("Page size must be positive, got {0}")]
    InvalidPageSize(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SearchSettings::default().validate().is_ok());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let bad_distance = SearchSettings {
            max_distance_m: 0.0,
            ..SearchSettings::default()
        };
        assert!(matches!(
            bad_distance.validate(),
            Err(SettingsError::InvalidMaxDistance(_))
        ));

        let bad_distance_nan = SearchSettings {
            max_distance_m: f64::NAN,
            ..SearchSettings::default()
        };
        assert!(bad_distance_nan.validate().is_err());

        let bad_limit = SearchSettings {
            limit: -1,
            ..SearchSettings::default()
        };
        assert!(matches!(
            bad_limit.validate(),
            Err(SettingsError::InvalidCandidateLimit(-1))
        ));

        let bad_page_size = SearchSettings {
            page_size: 0,
            ..SearchSettings::default()
        };
        assert!(matches!(
            bad_page_size.validate(),
            Err(SettingsError::InvalidPageSize(0))
        ));
    }
}
