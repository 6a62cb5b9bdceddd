//! Hotel entity.

use super::Location;

/// Highest rating a hotel can have.
pub const MAX_RATING: i16 = 5;

/// A hotel located in a city.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i64,
    pub name: String,
    pub rating: i16,
    pub location: Location,
}

/// Input data for creating a hotel or overwriting an existing one.
///
/// The location is resolved on write: missing continent, country or city
/// rows are created.
#[derive(Debug, Clone, PartialEq)]
pub struct HotelInput {
    pub name: String,
    pub rating: i16,
    pub location: Location,
}
