//! Proximity search service - scoring, ranking and pagination.

use std::cmp::Ordering;
use std::sync::Arc;

use thiserror::Error;

use crate::domain::{GeoPoint, HotelSearchResult};
use crate::ports::{HotelRepository, RepositoryError, ScoreCalculator};
use crate::settings::SearchSettings;

/// Errors from the search pipeline.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Caller supplied a negative page index. Rejected before any storage
    /// access.
    #[error("Page index must be non-negative, got {0}")]
    InvalidPage(i64),

    /// The repository call failed; the whole pipeline fails with it: no
    /// partial or best-effort pages.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Orchestrates one search request: fetch a bounded candidate set, score
/// every candidate, rank, and slice out one page.
///
/// Holds no mutable state: concurrent searches never observe each other,
/// and every call recomputes candidates fresh (no caching across pages).
pub struct HotelSearchService {
    repo: Arc<dyn HotelRepository>,
    calculator: Arc<dyn ScoreCalculator>,
    settings: SearchSettings,
}

impl HotelSearchService {
    pub fn new(
        repo: Arc<dyn HotelRepository>,
        calculator: Arc<dyn ScoreCalculator>,
        settings: SearchSettings,
    ) -> Self {
        Self {
            repo,
            calculator,
            settings,
        }
    }

    /// Return page `page` (zero-indexed) of the ranked results around
    /// `origin`.
    ///
    /// Entries are ordered by score descending; equal scores fall back to
    /// ascending hotel ID, so pagination stays deterministic and
    /// duplicate-free even under a constant score function. A start index
    /// past the end of the ranked set yields an empty vec, the
    /// end-of-results signal, not an error.
    pub async fn search(
        &self,
        origin: &GeoPoint,
        page: i64,
    ) -> Result<Vec<HotelSearchResult>, SearchError> {
        if page < 0 {
            return Err(SearchError::InvalidPage(page));
        }

        let candidates = self
            .repo
            .search_within_distance(origin, self.settings.max_distance_m, self.settings.limit)
            .await?;

        tracing::debug!(
            candidates = candidates.len(),
            page,
            max_distance_m = self.settings.max_distance_m,
            "scoring search candidates"
        );

        let mut scored: Vec<HotelSearchResult> = candidates
            .into_iter()
            .map(|hotel| {
                let score = self.calculator.calculate_score(&hotel, origin);
                HotelSearchResult { hotel, score }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.hotel.id.cmp(&b.hotel.id))
        });

        let start = (page as usize).saturating_mul(self.settings.page_size);
        if start >= scored.len() {
            return Ok(Vec::new());
        }
        let end = scored.len().min(start + self.settings.page_size);
        Ok(scored.drain(start..end).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Hotel, NewHotel};
    use crate::services::DistanceWeightedScoreCalculator;
    use crate::testdata;
    use async_trait::async_trait;

    /// Repository stub returning a fixed candidate set, ignoring the
    /// radius and limit arguments entirely.
    struct FixedCandidates(Vec<Hotel>);

    #[async_trait]
    impl HotelRepository for FixedCandidates {
        async fn list(&self) -> Result<Vec<Hotel>, RepositoryError> {
            Ok(self.0.clone())
        }
        async fn get_by_id(&self, id: i64) -> Result<Hotel, RepositoryError> {
            self.0
                .iter()
                .find(|h| h.id == id)
                .cloned()
                .ok_or_else(|| RepositoryError::NotFound(format!("Hotel with ID {id}")))
        }
        async fn insert(&self, _hotel: &NewHotel) -> Result<Hotel, RepositoryError> {
            unimplemented!("not exercised by search tests")
        }
        async fn update(&self, _hotel: &Hotel) -> Result<(), RepositoryError> {
            unimplemented!("not exercised by search tests")
        }
        async fn delete(&self, _id: i64) -> Result<(), RepositoryError> {
            unimplemented!("not exercised by search tests")
        }
        async fn search_within_distance(
            &self,
            _origin: &GeoPoint,
            _max_distance_m: f64,
            _limit: i64,
        ) -> Result<Vec<Hotel>, RepositoryError> {
            Ok(self.0.clone())
        }
    }

    /// Score calculator stub returning the same score for every hotel,
    /// collapsing the ranking onto the ID tie-break.
    struct ConstantScore(f64);

    impl ScoreCalculator for ConstantScore {
        fn calculate_score(&self, _hotel: &Hotel, _origin: &GeoPoint) -> f64 {
            self.0
        }
    }

    fn service_with_page_size(page_size: usize) -> HotelSearchService {
        // Radius and limit are irrelevant here; the repository stub
        // returns the full fixture regardless.
        let settings = SearchSettings {
            max_distance_m: 1.0,
            limit: 1,
            page_size,
        };
        HotelSearchService::new(
            Arc::new(FixedCandidates(testdata::hotels())),
            Arc::new(ConstantScore(0.0)),
            settings,
        )
    }

    #[tokio::test]
    async fn negative_page_is_rejected() {
        let service = service_with_page_size(3);
        let result = service.search(&testdata::query_point(), -1).await;
        assert!(matches!(result, Err(SearchError::InvalidPage(-1))));
    }

    #[tokio::test]
    async fn pagination_slices_the_ranked_set() {
        // (page size, page, expected count, expected first id). With a
        // constant score over the 15-hotel fixture, ranking degenerates to
        // ascending ID.
        struct PageCase {
            size: usize,
            page: i64,
            count: usize,
            first_id: Option<i64>,
        }
        let cases = [
            PageCase {
                size: 3,
                page: 0,
                count: 3,
                first_id: Some(1),
            },
            PageCase {
                size: 5,
                page: 1,
                count: 5,
                first_id: Some(6),
            },
            PageCase {
                size: 4,
                page: 3,
                count: 3,
                first_id: Some(13),
            },
            PageCase {
                size: 10,
                page: 2,
                count: 0,
                first_id: None,
            },
        ];

        for case in cases {
            let service = service_with_page_size(case.size);
            let results = service.search(&testdata::query_point(), case.page).await.unwrap();
            assert_eq!(results.len(), case.count, "page size {}", case.size);
            assert_eq!(
                results.first().map(|r| r.hotel.id),
                case.first_id,
                "page size {}",
                case.size
            );
        }
    }

    #[tokio::test]
    async fn pages_are_complete_and_disjoint() {
        let service = service_with_page_size(4);
        let origin = testdata::query_point();

        let mut seen = Vec::new();
        for page in 0..10 {
            let results = service.search(&origin, page).await.unwrap();
            if results.is_empty() {
                break;
            }
            seen.extend(results.into_iter().map(|r| r.hotel.id));
        }

        let mut expected: Vec<i64> = testdata::hotels().iter().map(|h| h.id).collect();
        expected.sort_unstable();
        let mut actual = seen.clone();
        actual.sort_unstable();
        actual.dedup();
        assert_eq!(actual, expected, "every hotel exactly once: {seen:?}");
    }

    #[tokio::test]
    async fn scores_are_non_increasing_across_pages() {
        let settings = SearchSettings {
            max_distance_m: 1.0,
            limit: 1,
            page_size: 4,
        };
        let service = HotelSearchService::new(
            Arc::new(FixedCandidates(testdata::hotels())),
            Arc::new(DistanceWeightedScoreCalculator::default()),
            settings,
        );
        let origin = testdata::query_point();

        let mut all = Vec::new();
        for page in 0..10 {
            let results = service.search(&origin, page).await.unwrap();
            if results.is_empty() {
                break;
            }
            all.extend(results);
        }

        assert_eq!(all.len(), testdata::hotels().len());
        for pair in all.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "ranking out of order: {} before {}",
                pair[0].score,
                pair[1].score
            );
        }
    }

    #[tokio::test]
    async fn repeated_search_returns_identical_sequence() {
        let settings = SearchSettings {
            max_distance_m: 1.0,
            limit: 1,
            page_size: 15,
        };
        let service = HotelSearchService::new(
            Arc::new(FixedCandidates(testdata::hotels())),
            Arc::new(DistanceWeightedScoreCalculator::default()),
            settings,
        );
        let origin = testdata::query_point();

        let first = service.search(&origin, 0).await.unwrap();
        let second = service.search(&origin, 0).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn repository_failure_fails_the_whole_call() {
        struct Unreachable;

        #[async_trait]
        impl HotelRepository for Unreachable {
            async fn list(&self) -> Result<Vec<Hotel>, RepositoryError> {
                Err(RepositoryError::Unavailable("down".into()))
            }
            async fn get_by_id(&self, _id: i64) -> Result<Hotel, RepositoryError> {
                Err(RepositoryError::Unavailable("down".into()))
            }
            async fn insert(&self, _hotel: &NewHotel) -> Result<Hotel, RepositoryError> {
                Err(RepositoryError::Unavailable("down".into()))
            }
            async fn update(&self, _hotel: &Hotel) -> Result<(), RepositoryError> {
                Err(RepositoryError::Unavailable("down".into()))
            }
            async fn delete(&self, _id: i64) -> Result<(), RepositoryError> {
                Err(RepositoryError::Unavailable("down".into()))
            }
            async fn search_within_distance(
                &self,
                _origin: &GeoPoint,
                _max_distance_m: f64,
                _limit: i64,
            ) -> Result<Vec<Hotel>, RepositoryError> {
                Err(RepositoryError::Unavailable("down".into()))
            }
        }

        let service = HotelSearchService::new(
            Arc::new(Unreachable),
            Arc::new(ConstantScore(0.0)),
            SearchSettings::default(),
        );
        let result = service.search(&testdata::query_point(), 0).await;
        assert!(matches!(
            result,
            Err(SearchError::Repository(RepositoryError::Unavailable(_)))
        ));
    }
}
