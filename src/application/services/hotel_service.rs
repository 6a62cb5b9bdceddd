//! Hotel management service.

use crate::domain::entities::{Hotel, HotelInput};
use crate::domain::repositories::HotelRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

pub(crate) const HOTEL_NOT_FOUND: &str = "No such hotel exists";
const CITY_NOT_FOUND: &str = "No such city exists";

/// Service for browsing and maintaining hotels.
pub struct HotelService<R: HotelRepository + ?Sized> {
    repository: Arc<R>,
    top_limit: i64,
}

impl<R: HotelRepository + ?Sized> HotelService<R> {
    /// Creates a new hotel service.
    ///
    /// `top_limit` caps the number of hotels returned by [`Self::top_hotels`].
    pub fn new(repository: Arc<R>, top_limit: i64) -> Self {
        Self {
            repository,
            top_limit,
        }
    }

    /// Lists all hotels.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_hotels(&self) -> Result<Vec<Hotel>, AppError> {
        self.repository.list().await
    }

    /// Retrieves a hotel by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the hotel does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_hotel(&self, name: &str) -> Result<Hotel, AppError> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found(HOTEL_NOT_FOUND))
    }

    /// Returns the best rated hotels.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn top_hotels(&self) -> Result<Vec<Hotel>, AppError> {
        self.repository.top_rated(self.top_limit).await
    }

    /// Lists hotels in cities named `city`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no city has that name.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn hotels_in_city(&self, city: &str) -> Result<Vec<Hotel>, AppError> {
        if !self.repository.city_exists(city).await? {
            return Err(AppError::not_found(CITY_NOT_FOUND));
        }

        self.repository.list_by_city(city).await
    }

    /// Creates a hotel, creating its geography path when missing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the hotel name is taken.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_hotel(&self, input: HotelInput) -> Result<Hotel, AppError> {
        if self.repository.find_by_name(&input.name).await?.is_some() {
            return Err(AppError::conflict(
                "Hotel already exists",
                json!({ "name": input.name }),
            ));
        }

        let hotel = self.repository.create(input).await?;
        tracing::info!(hotel = %hotel.name, city = %hotel.location.city, "hotel created");

        Ok(hotel)
    }

    /// Overwrites the hotel named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the hotel does not exist.
    /// Returns [`AppError::Conflict`] if the new name belongs to another hotel.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_hotel(&self, name: &str, input: HotelInput) -> Result<Hotel, AppError> {
        let hotel = self
            .repository
            .update(name, input)
            .await?
            .ok_or_else(|| AppError::not_found(HOTEL_NOT_FOUND))?;

        tracing::info!(hotel = name, new_name = %hotel.name, "hotel updated");
        Ok(hotel)
    }

    /// Deletes a hotel and its offers.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the hotel does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_hotel(&self, name: &str) -> Result<(), AppError> {
        if !self.repository.delete(name).await? {
            return Err(AppError::not_found(HOTEL_NOT_FOUND));
        }

        tracing::info!(hotel = name, "hotel deleted");
        Ok(())
    }
}
