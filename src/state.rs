//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AccountService, HotelService, OfferService};
use crate::domain::repositories::{AccountRepository, HotelRepository, OfferRepository};

/// Services behind trait objects so HTTP tests can swap in in-memory stores.
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService<dyn AccountRepository>>,
    pub hotel_service: Arc<HotelService<dyn HotelRepository>>,
    pub offer_service: Arc<OfferService<dyn OfferRepository, dyn HotelRepository>>,
}

impl AppState {
    pub fn new(
        account_service: Arc<AccountService<dyn AccountRepository>>,
        hotel_service: Arc<HotelService<dyn HotelRepository>>,
        offer_service: Arc<OfferService<dyn OfferRepository, dyn HotelRepository>>,
    ) -> Self {
        Self {
            account_service,
            hotel_service,
            offer_service,
        }
    }
}
