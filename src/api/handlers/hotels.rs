//! Handlers for hotel endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::{CityFilterParams, HotelDto};
use crate::domain::entities::Hotel;
use crate::error::AppError;
use crate::state::AppState;

fn to_dtos(hotels: Vec<Hotel>) -> Json<Vec<HotelDto>> {
    Json(hotels.into_iter().map(HotelDto::from).collect())
}

/// Lists all hotels ordered by name.
///
/// # Endpoint
///
/// `GET /hotels`
pub async fn list_hotels_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<HotelDto>>, AppError> {
    let hotels = state.hotel_service.list_hotels().await?;
    Ok(to_dtos(hotels))
}

/// Returns a single hotel.
///
/// # Endpoint
///
/// `GET /hotels/{name}`
///
/// # Errors
///
/// Returns 404 if the hotel does not exist.
pub async fn get_hotel_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<HotelDto>, AppError> {
    let hotel = state.hotel_service.get_hotel(&name).await?;
    Ok(Json(hotel.into()))
}

/// Returns the best rated hotels.
///
/// # Endpoint
///
/// `GET /hotels/topHotels`
pub async fn top_hotels_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<HotelDto>>, AppError> {
    let hotels = state.hotel_service.top_hotels().await?;
    Ok(to_dtos(hotels))
}

/// Lists hotels located in a city.
///
/// # Endpoint
///
/// `GET /hotels/filterByCity?cityName=...`
///
/// # Errors
///
/// Returns 404 if no city has that name.
pub async fn hotels_by_city_handler(
    State(state): State<AppState>,
    Query(params): Query<CityFilterParams>,
) -> Result<Json<Vec<HotelDto>>, AppError> {
    let hotels = state.hotel_service.hotels_in_city(&params.city_name).await?;
    Ok(to_dtos(hotels))
}

/// Creates a hotel.
///
/// # Endpoint
///
/// `POST /hotels/addHotel` (ADMIN)
///
/// # Errors
///
/// Returns 400 if the body fails validation.
/// Returns 409 if the hotel name is taken.
pub async fn add_hotel_handler(
    State(state): State<AppState>,
    Json(payload): Json<HotelDto>,
) -> Result<(StatusCode, &'static str), AppError> {
    payload.validate()?;

    state.hotel_service.add_hotel(payload.into()).await?;

    Ok((StatusCode::CREATED, "Hotel created"))
}

/// Overwrites a hotel.
///
/// # Endpoint
///
/// `PUT /hotels/{name}` (ADMIN)
pub async fn update_hotel_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<HotelDto>,
) -> Result<(StatusCode, &'static str), AppError> {
    payload.validate()?;

    state
        .hotel_service
        .update_hotel(&name, payload.into())
        .await?;

    Ok((StatusCode::ACCEPTED, "Hotel updated"))
}

/// Deletes a hotel together with its offers.
///
/// # Endpoint
///
/// `DELETE /hotels/{name}` (ADMIN)
pub async fn delete_hotel_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<(StatusCode, &'static str), AppError> {
    state.hotel_service.delete_hotel(&name).await?;

    Ok((StatusCode::ACCEPTED, "Hotel deleted"))
}
