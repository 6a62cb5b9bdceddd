//! Handlers for offer endpoints.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::{HotelFilterParams, OfferDto, PriceFilterParams};
use crate::domain::entities::{ActiveIdentity, Offer};
use crate::error::AppError;
use crate::state::AppState;

fn to_dtos(offers: Vec<Offer>) -> Json<Vec<OfferDto>> {
    Json(offers.into_iter().map(OfferDto::from).collect())
}

/// Lists all offers ordered by name.
///
/// # Endpoint
///
/// `GET /offers`
pub async fn list_offers_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<OfferDto>>, AppError> {
    let offers = state.offer_service.list_offers().await?;
    Ok(to_dtos(offers))
}

/// Returns a single offer.
///
/// # Endpoint
///
/// `GET /offers/{name}`
///
/// # Errors
///
/// Returns 404 if the offer does not exist.
pub async fn get_offer_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<OfferDto>, AppError> {
    let offer = state.offer_service.get_offer(&name).await?;
    Ok(Json(offer.into()))
}

/// Lists the offers of a hotel.
///
/// # Endpoint
///
/// `GET /offers/filterByHotel?hotelName=...`
pub async fn offers_by_hotel_handler(
    State(state): State<AppState>,
    Query(params): Query<HotelFilterParams>,
) -> Result<Json<Vec<OfferDto>>, AppError> {
    let offers = state
        .offer_service
        .offers_for_hotel(&params.hotel_name)
        .await?;
    Ok(to_dtos(offers))
}

/// Lists offers within an inclusive price range.
///
/// # Endpoint
///
/// `GET /offers/filterByPrice?minPrice=...&maxPrice=...`
pub async fn offers_by_price_handler(
    State(state): State<AppState>,
    Query(params): Query<PriceFilterParams>,
) -> Result<Json<Vec<OfferDto>>, AppError> {
    let offers = state
        .offer_service
        .offers_in_price_range(params.min_price, params.max_price)
        .await?;
    Ok(to_dtos(offers))
}

/// Creates an offer. A missing hotel is created with rating 0.
///
/// # Endpoint
///
/// `POST /offers/addOffer` (ADMIN)
pub async fn add_offer_handler(
    State(state): State<AppState>,
    Json(payload): Json<OfferDto>,
) -> Result<(StatusCode, &'static str), AppError> {
    payload.validate()?;

    state.offer_service.add_offer(payload.into()).await?;

    Ok((StatusCode::CREATED, "Offer created"))
}

/// Overwrites an offer, keeping its reservation.
///
/// # Endpoint
///
/// `PUT /offers/{name}` (ADMIN)
pub async fn update_offer_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<OfferDto>,
) -> Result<(StatusCode, &'static str), AppError> {
    payload.validate()?;

    state
        .offer_service
        .update_offer(&name, payload.into())
        .await?;

    Ok((StatusCode::ACCEPTED, "Offer updated"))
}

/// Deletes an offer.
///
/// # Endpoint
///
/// `DELETE /offers/{name}` (ADMIN)
pub async fn delete_offer_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
) -> Result<(StatusCode, &'static str), AppError> {
    state.offer_service.delete_offer(&name).await?;

    Ok((StatusCode::ACCEPTED, "Offer deleted"))
}

/// Reserves an offer for the caller.
///
/// # Endpoint
///
/// `PUT /offers/reserve/{name}` (USER)
pub async fn reserve_offer_handler(
    Path(name): Path<String>,
    State(state): State<AppState>,
    Extension(identity): Extension<ActiveIdentity>,
) -> Result<(StatusCode, &'static str), AppError> {
    state.offer_service.reserve_offer(&name, &identity).await?;

    Ok((StatusCode::ACCEPTED, "Offer reserved"))
}
