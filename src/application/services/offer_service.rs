//! Offer management and reservation service.

use crate::application::services::hotel_service::HOTEL_NOT_FOUND;
use crate::domain::entities::{ActiveIdentity, Offer, OfferInput};
use crate::domain::repositories::{HotelRepository, OfferRepository};
use crate::error::AppError;
use rust_decimal::Decimal;
use serde_json::json;
use std::sync::Arc;

const OFFER_NOT_FOUND: &str = "No such offer exists";

/// Service for browsing, maintaining and reserving offers.
///
/// Reservations are last-write-wins: reserving an already reserved offer
/// replaces the previous holder.
pub struct OfferService<O, H>
where
    O: OfferRepository + ?Sized,
    H: HotelRepository + ?Sized,
{
    offers: Arc<O>,
    hotels: Arc<H>,
}

impl<O, H> OfferService<O, H>
where
    O: OfferRepository + ?Sized,
    H: HotelRepository + ?Sized,
{
    /// Creates a new offer service.
    pub fn new(offers: Arc<O>, hotels: Arc<H>) -> Self {
        Self { offers, hotels }
    }

    /// Lists all offers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_offers(&self) -> Result<Vec<Offer>, AppError> {
        self.offers.list().await
    }

    /// Retrieves an offer by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the offer does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_offer(&self, name: &str) -> Result<Offer, AppError> {
        self.offers
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found(OFFER_NOT_FOUND))
    }

    /// Lists the offers of a hotel.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the hotel does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn offers_for_hotel(&self, hotel_name: &str) -> Result<Vec<Offer>, AppError> {
        if self.hotels.find_by_name(hotel_name).await?.is_none() {
            return Err(AppError::not_found(HOTEL_NOT_FOUND));
        }

        self.offers.list_by_hotel(hotel_name).await
    }

    /// Lists offers priced within `[min, max]`, both ends inclusive.
    ///
    /// An inverted range matches nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn offers_in_price_range(
        &self,
        min: Decimal,
        max: Decimal,
    ) -> Result<Vec<Offer>, AppError> {
        if min > max {
            return Ok(Vec::new());
        }

        self.offers.list_by_price(min, max).await
    }

    /// Creates an offer, creating its hotel and geography when missing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the offer name is taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_offer(&self, input: OfferInput) -> Result<Offer, AppError> {
        if self.offers.find_by_name(&input.name).await?.is_some() {
            return Err(AppError::conflict(
                "Offer already exists",
                json!({ "name": input.name }),
            ));
        }

        let offer = self.offers.create(input).await?;
        tracing::info!(offer = %offer.name, hotel = %offer.hotel_name, price = %offer.price, "offer created");

        Ok(offer)
    }

    /// Overwrites name, price and hotel of the offer named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the offer does not exist.
    /// Returns [`AppError::Conflict`] if the new name belongs to another offer.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_offer(&self, name: &str, input: OfferInput) -> Result<Offer, AppError> {
        let offer = self
            .offers
            .update(name, input)
            .await?
            .ok_or_else(|| AppError::not_found(OFFER_NOT_FOUND))?;

        tracing::info!(offer = name, new_name = %offer.name, "offer updated");
        Ok(offer)
    }

    /// Deletes an offer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the offer does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_offer(&self, name: &str) -> Result<(), AppError> {
        if !self.offers.delete(name).await? {
            return Err(AppError::not_found(OFFER_NOT_FOUND));
        }

        tracing::info!(offer = name, "offer deleted");
        Ok(())
    }

    /// Reserves an offer for the active identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the offer does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn reserve_offer(
        &self,
        name: &str,
        identity: &ActiveIdentity,
    ) -> Result<Offer, AppError> {
        let offer = self
            .offers
            .reserve(name, &identity.username)
            .await?
            .ok_or_else(|| AppError::not_found(OFFER_NOT_FOUND))?;

        tracing::info!(offer = name, username = %identity.username, "offer reserved");
        Ok(offer)
    }
}
