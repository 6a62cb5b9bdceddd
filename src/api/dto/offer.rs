//! DTOs for offer endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::{Validate, ValidationError};

/// Offer as exchanged over HTTP.
///
/// `userName` is the reserving account. It is returned on reads and ignored
/// on writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OfferDto {
    #[validate(length(min = 1, max = 255, message = "Offer name must be 1-255 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 255))]
    pub hotel_name: String,

    #[validate(length(min = 1, max = 255))]
    pub city_name: String,

    #[validate(length(min = 1, max = 255))]
    pub country_name: String,

    #[validate(length(min = 1, max = 255))]
    pub continent_name: String,

    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,

    #[serde(default)]
    pub user_name: Option<String>,
}

/// Largest scale the `offers.price NUMERIC(12, 2)` column keeps.
const PRICE_SCALE: u32 = 2;

/// Prices must stay below 10^10, the integer range of `NUMERIC(12, 2)`.
const PRICE_LIMIT: Decimal = Decimal::from_parts(1_410_065_408, 2, 0, false, 0);

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        return Err(ValidationError::new("negative_price")
            .with_message("Price must not be negative".into()));
    }
    if *price >= PRICE_LIMIT {
        return Err(ValidationError::new("price_too_large")
            .with_message("Price must be below 10000000000".into()));
    }
    if price.normalize().scale() > PRICE_SCALE {
        return Err(ValidationError::new("price_precision")
            .with_message("Price must have at most 2 decimal places".into()));
    }
    Ok(())
}

/// Query string of `GET /offers/filterByHotel`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelFilterParams {
    pub hotel_name: String,
}

/// Query string of `GET /offers/filterByPrice`.
///
/// Bounds are parsed from their decimal string form.
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceFilterParams {
    #[serde_as(as = "DisplayFromStr")]
    pub min_price: Decimal,

    #[serde_as(as = "DisplayFromStr")]
    pub max_price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(price: Decimal) -> OfferDto {
        OfferDto {
            name: "Deal1".to_string(),
            hotel_name: "Grand".to_string(),
            city_name: "Paris".to_string(),
            country_name: "France".to_string(),
            continent_name: "Europe".to_string(),
            price,
            user_name: None,
        }
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let errors = dto(Decimal::new(-1, 0)).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn test_zero_price_is_accepted() {
        assert!(dto(Decimal::ZERO).validate().is_ok());
    }

    #[test]
    fn test_price_limit_is_ten_billion() {
        assert_eq!(PRICE_LIMIT, Decimal::from(10_000_000_000_i64));
    }

    #[test]
    fn test_too_large_price_is_rejected() {
        let errors = dto(Decimal::from(100_000_000_000_i64))
            .validate()
            .unwrap_err();
        assert_eq!(errors.field_errors()["price"][0].code, "price_too_large");

        assert!(dto(Decimal::new(999_999_999_999, 2)).validate().is_ok());
    }

    #[test]
    fn test_price_with_three_decimals_is_rejected() {
        let errors = dto(Decimal::new(99_999, 3)).validate().unwrap_err();
        assert_eq!(errors.field_errors()["price"][0].code, "price_precision");

        // trailing zeros are not extra precision
        assert!(dto(Decimal::new(99_990, 3)).validate().is_ok());
    }

    #[test]
    fn test_user_name_is_optional_on_input() {
        let parsed: OfferDto = serde_json::from_str(
            r#"{"name":"Deal1","hotelName":"Grand","cityName":"Paris","countryName":"France","continentName":"Europe","price":100}"#,
        )
        .unwrap();

        assert_eq!(parsed.price, Decimal::from(100));
        assert!(parsed.user_name.is_none());
    }
}
