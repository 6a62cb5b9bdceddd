//! Conversions between domain entities and HTTP DTOs.

use crate::api::dto::{HotelDto, OfferDto};
use crate::domain::entities::{Hotel, HotelInput, Location, Offer, OfferInput};

impl From<Hotel> for HotelDto {
    fn from(hotel: Hotel) -> Self {
        Self {
            name: hotel.name,
            rating: hotel.rating,
            city_name: hotel.location.city,
            country_name: hotel.location.country,
            continent_name: hotel.location.continent,
        }
    }
}

impl From<HotelDto> for HotelInput {
    fn from(dto: HotelDto) -> Self {
        Self {
            name: dto.name,
            rating: dto.rating,
            location: Location::new(dto.continent_name, dto.country_name, dto.city_name),
        }
    }
}

impl From<Offer> for OfferDto {
    fn from(offer: Offer) -> Self {
        Self {
            name: offer.name,
            hotel_name: offer.hotel_name,
            city_name: offer.location.city,
            country_name: offer.location.country,
            continent_name: offer.location.continent,
            price: offer.price,
            user_name: offer.reserved_by,
        }
    }
}

// The reserver is not writable through the API.
impl From<OfferDto> for OfferInput {
    fn from(dto: OfferDto) -> Self {
        Self {
            name: dto.name,
            price: dto.price,
            hotel_name: dto.hotel_name,
            location: Location::new(dto.continent_name, dto.country_name, dto.city_name),
        }
    }
}
