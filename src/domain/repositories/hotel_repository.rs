//! Repository trait for hotels and the geography they live in.

use crate::domain::entities::{Hotel, HotelInput};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for hotels.
///
/// Writes resolve the hotel's [`crate::domain::entities::Location`], creating
/// missing continent, country and city rows in the same transaction.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgHotelRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Lists all hotels ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Hotel>, AppError>;

    /// Finds a hotel by its unique name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<Hotel>, AppError>;

    /// Returns the best rated hotels, highest rating first, ties by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn top_rated(&self, limit: i64) -> Result<Vec<Hotel>, AppError>;

    /// Lists hotels located in any city with this name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_city(&self, city: &str) -> Result<Vec<Hotel>, AppError>;

    /// Returns whether at least one city has this name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn city_exists(&self, city: &str) -> Result<bool, AppError>;

    /// Creates a hotel.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the hotel name is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, input: HotelInput) -> Result<Hotel, AppError>;

    /// Overwrites the hotel currently named `name`.
    ///
    /// Returns `None` when no hotel has this name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if renaming collides with another hotel.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, name: &str, input: HotelInput) -> Result<Option<Hotel>, AppError>;

    /// Deletes a hotel together with its offers.
    ///
    /// Returns `false` when no hotel has this name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, name: &str) -> Result<bool, AppError>;
}
