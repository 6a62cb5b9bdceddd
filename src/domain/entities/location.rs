//! Geography hierarchy flattened to names.

/// Continent / country / city path locating a hotel.
///
/// Each level is unique within its parent, so the three names together
/// identify exactly one city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub continent: String,
    pub country: String,
    pub city: String,
}

impl Location {
    pub fn new(
        continent: impl Into<String>,
        country: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            continent: continent.into(),
            country: country.into(),
            city: city.into(),
        }
    }
}
