//! DTOs for hotel endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::MAX_RATING;

/// Hotel as exchanged over HTTP, with its geography flattened to names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HotelDto {
    #[validate(length(min = 1, max = 255, message = "Hotel name must be 1-255 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(range(min = 0, max = MAX_RATING, message = "Rating must be between 0 and 5"))]
    pub rating: i16,

    #[validate(length(min = 1, max = 255))]
    pub city_name: String,

    #[validate(length(min = 1, max = 255))]
    pub country_name: String,

    #[validate(length(min = 1, max = 255))]
    pub continent_name: String,
}

/// Query string of `GET /hotels/filterByCity`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityFilterParams {
    pub city_name: String,
}
