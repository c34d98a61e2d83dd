//! Hotel handlers - CRUD operations.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use stayfinder_core::domain::{GeoPoint, Hotel, NewHotel};

use crate::error::HttpError;
use crate::state::AppState;

/// Request body for creating or updating a hotel.
#[derive(Debug, Deserialize)]
pub struct HotelPayload {
    pub name: String,
    pub price: f64,
    pub location: GeoPoint,
}

/// List all hotels.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Hotel>>, HttpError> {
    Ok(Json(state.hotels.list().await?))
}

/// Get a single hotel by ID.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Hotel>, HttpError> {
    state
        .hotels
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| HttpError::NotFound(format!("Hotel with id {id} not found")))
}

/// Create a new hotel. The store assigns the ID.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<HotelPayload>,
) -> Result<(StatusCode, Json<Hotel>), HttpError> {
    let hotel = state
        .hotels
        .add(NewHotel::new(payload.name, payload.price, payload.location))
        .await?;
    Ok((StatusCode::CREATED, Json(hotel)))
}

/// Update an existing hotel.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<HotelPayload>,
) -> Result<Json<Hotel>, HttpError> {
    let hotel = Hotel {
        id,
        name: payload.name,
        price: payload.price,
        location: payload.location,
    };
    state.hotels.update(&hotel).await?;
    Ok(Json(hotel))
}

/// Delete a hotel.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    state.hotels.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
