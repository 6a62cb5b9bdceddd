//! Business logic services for the application layer.

pub mod account_service;
pub mod hotel_service;
pub mod offer_service;

pub use account_service::AccountService;
pub use hotel_service::HotelService;
pub use offer_service::OfferService;
