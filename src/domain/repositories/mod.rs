//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and
//! are implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`AccountRepository`] - Accounts and their roles
//! - [`HotelRepository`] - Hotels and geography resolution
//! - [`OfferRepository`] - Offers, filters and reservations

pub mod account_repository;
pub mod hotel_repository;
pub mod offer_repository;

pub use account_repository::AccountRepository;
pub use hotel_repository::HotelRepository;
pub use offer_repository::OfferRepository;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use hotel_repository::MockHotelRepository;
#[cfg(test)]
pub use offer_repository::MockOfferRepository;
