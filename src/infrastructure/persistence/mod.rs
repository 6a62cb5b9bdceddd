//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgAccountRepository`] - Accounts and roles
//! - [`PgHotelRepository`] - Hotels and geography resolution
//! - [`PgOfferRepository`] - Offers, filters and reservations

mod geography;
pub mod pg_account_repository;
pub mod pg_hotel_repository;
pub mod pg_offer_repository;

pub use pg_account_repository::PgAccountRepository;
pub use pg_hotel_repository::PgHotelRepository;
pub use pg_offer_repository::PgOfferRepository;
