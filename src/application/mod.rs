//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::account_service::AccountService`] - Signup, authentication, password changes
//! - [`services::hotel_service::HotelService`] - Hotel browsing and maintenance
//! - [`services::offer_service::OfferService`] - Offer browsing, maintenance and reservations

pub mod services;
