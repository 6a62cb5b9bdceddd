//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one resource.

pub mod accounts;
pub mod hotels;
pub mod offers;

pub use accounts::{
    change_password_handler, create_admin_handler, create_user_handler, delete_user_handler,
};
pub use hotels::{
    add_hotel_handler, delete_hotel_handler, get_hotel_handler, hotels_by_city_handler,
    list_hotels_handler, top_hotels_handler, update_hotel_handler,
};
pub use offers::{
    add_offer_handler, delete_offer_handler, get_offer_handler, list_offers_handler,
    offers_by_hotel_handler, offers_by_price_handler, reserve_offer_handler, update_offer_handler,
};
