//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. JSON keys are camelCase.

pub mod account;
pub mod hotel;
pub mod offer;

pub use account::{AccountRequest, ChangePasswordParams};
pub use hotel::{CityFilterParams, HotelDto};
pub use offer::{HotelFilterParams, OfferDto, PriceFilterParams};
