//! Search handler - the ranked "nearby hotels" endpoint.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use stayfinder_core::domain::GeoPoint;

use crate::error::HttpError;
use crate::state::AppState;

/// Query parameters for the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub lat: f64,
    pub lon: f64,
    /// Zero-indexed page of the ranked results.
    #[serde(default)]
    pub page: i64,
}

/// Ranked nearby-hotels search.
///
/// Returns one page of `{hotel, score}` entries ordered by score
/// descending. An exhausted page is 204 No Content; that is how clients
/// detect the end of the results, not by an error.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Response, HttpError> {
    let origin = GeoPoint::new(query.lon, query.lat);
    let results = state.search.search(&origin, query.page).await?;

    if results.is_empty() {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Ok(Json(results).into_response())
    }
}
