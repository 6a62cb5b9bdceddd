//! Repository trait for offers.

use crate::domain::entities::{Offer, OfferInput};
use crate::error::AppError;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Repository interface for offers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOfferRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OfferRepository: Send + Sync {
    /// Lists all offers ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Offer>, AppError>;

    /// Finds an offer by its unique name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_name(&self, name: &str) -> Result<Option<Offer>, AppError>;

    /// Lists the offers of one hotel ordered by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_hotel(&self, hotel_name: &str) -> Result<Vec<Offer>, AppError>;

    /// Lists offers with `min <= price <= max`, cheapest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_price(&self, min: Decimal, max: Decimal) -> Result<Vec<Offer>, AppError>;

    /// Creates an offer, creating its hotel and geography when missing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the offer name is taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, input: OfferInput) -> Result<Offer, AppError>;

    /// Overwrites name, price and hotel of the offer named `name`.
    ///
    /// The reservation is left untouched. Returns `None` when no offer has
    /// this name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if renaming collides with another offer.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, name: &str, input: OfferInput) -> Result<Option<Offer>, AppError>;

    /// Deletes an offer.
    ///
    /// Returns `false` when no offer has this name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, name: &str) -> Result<bool, AppError>;

    /// Marks the offer as reserved by `username`.
    ///
    /// Overwrites any previous reservation. Returns `None` when no offer has
    /// this name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn reserve(&self, name: &str, username: &str) -> Result<Option<Offer>, AppError>;
}
