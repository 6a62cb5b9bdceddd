//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`Account`] - A login with its roles
//! - [`Hotel`] - A hotel placed in the geography hierarchy
//! - [`Offer`] - A priced, reservable offer for a hotel
//! - [`Location`] - Continent / country / city names
//!
//! Creation and overwrite use separate input structs (`NewAccount`,
//! `HotelInput`, `OfferInput`) that carry no database identifiers.

pub mod account;
pub mod hotel;
pub mod location;
pub mod offer;

pub use account::{Account, ActiveIdentity, NewAccount, Role};
pub use hotel::{Hotel, HotelInput, MAX_RATING};
pub use location::Location;
pub use offer::{Offer, OfferInput};
