//! Offer entity.

use rust_decimal::Decimal;

use super::Location;

/// A priced offer for a stay in a hotel.
///
/// `reserved_by` holds the username that reserved the offer; `None` means
/// the offer is still free.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub hotel_name: String,
    pub location: Location,
    pub reserved_by: Option<String>,
}

/// Input data for creating an offer or overwriting an existing one.
///
/// The hotel is looked up by `hotel_name`; when it does not exist it is
/// created under `location`.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferInput {
    pub name: String,
    pub price: Decimal,
    pub hotel_name: String,
    pub location: Location,
}
