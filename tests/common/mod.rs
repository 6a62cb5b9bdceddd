#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::HeaderValue;
use axum_test::TestServer;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use rust_decimal::Decimal;
use serde_json::json;
use std::sync::{Arc, Mutex};
use travel_agency::api;
use travel_agency::application::services::{AccountService, HotelService, OfferService};
use travel_agency::domain::entities::{
    Account, Hotel, HotelInput, Location, NewAccount, Offer, OfferInput,
};
use travel_agency::domain::password::PasswordHasher;
use travel_agency::domain::repositories::{AccountRepository, HotelRepository, OfferRepository};
use travel_agency::error::AppError;
use travel_agency::state::AppState;

pub const TOP_LIMIT: i64 = 5;

/// Reversible stand-in for Argon2 so tests stay fast.
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<String, AppError> {
        Ok(format!("plain:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        Ok(hash == format!("plain:{password}"))
    }
}

struct StoredOffer {
    id: i64,
    name: String,
    price: Decimal,
    hotel_id: i64,
    reserved_by: Option<String>,
}

#[derive(Default)]
struct Data {
    next_id: i64,
    accounts: Vec<Account>,
    cities: Vec<Location>,
    hotels: Vec<Hotel>,
    offers: Vec<StoredOffer>,
}

impl Data {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn remember_city(&mut self, location: &Location) {
        if !self.cities.contains(location) {
            self.cities.push(location.clone());
        }
    }

    fn hotel_id_for(&mut self, hotel_name: &str, location: &Location) -> i64 {
        if let Some(hotel) = self.hotels.iter().find(|h| h.name == hotel_name) {
            return hotel.id;
        }

        self.remember_city(location);
        let id = self.next_id();
        self.hotels.push(Hotel {
            id,
            name: hotel_name.to_string(),
            rating: 0,
            location: location.clone(),
        });
        id
    }

    fn offer(&self, stored: &StoredOffer) -> Offer {
        let hotel = self
            .hotels
            .iter()
            .find(|h| h.id == stored.hotel_id)
            .expect("offer references a stored hotel");

        Offer {
            id: stored.id,
            name: stored.name.clone(),
            price: stored.price,
            hotel_name: hotel.name.clone(),
            location: hotel.location.clone(),
            reserved_by: stored.reserved_by.clone(),
        }
    }

    fn offers_where(&self, keep: impl Fn(&Offer) -> bool) -> Vec<Offer> {
        let mut offers: Vec<Offer> = self
            .offers
            .iter()
            .map(|o| self.offer(o))
            .filter(|o| keep(o))
            .collect();
        offers.sort_by(|a, b| a.name.cmp(&b.name));
        offers
    }
}

fn duplicate() -> AppError {
    AppError::conflict("Unique constraint violation", json!({}))
}

/// In-memory implementation of every repository trait.
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<Data>,
}

impl MemoryStore {
    fn lock(&self) -> std::sync::MutexGuard<'_, Data> {
        self.data.lock().expect("store mutex poisoned")
    }

    pub fn account(&self, username: &str) -> Option<Account> {
        self.lock()
            .accounts
            .iter()
            .find(|a| a.username == username)
            .cloned()
    }

    pub fn offer_count(&self) -> usize {
        self.lock().offers.len()
    }
}

#[async_trait]
impl AccountRepository for MemoryStore {
    async fn exists(&self, username: &str) -> Result<bool, AppError> {
        Ok(self.lock().accounts.iter().any(|a| a.username == username))
    }

    async fn create(&self, new_account: NewAccount) -> Result<Account, AppError> {
        let mut data = self.lock();
        if data
            .accounts
            .iter()
            .any(|a| a.username == new_account.username)
        {
            return Err(duplicate());
        }

        let account = Account {
            id: data.next_id(),
            username: new_account.username,
            password_hash: new_account.password_hash,
            roles: new_account.roles,
            created_at: Utc::now(),
        };
        data.accounts.push(account.clone());
        Ok(account)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, AppError> {
        Ok(self.account(username))
    }

    async fn list(&self) -> Result<Vec<Account>, AppError> {
        let mut accounts = self.lock().accounts.clone();
        accounts.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(accounts)
    }

    async fn update_password(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<bool, AppError> {
        let mut data = self.lock();
        match data.accounts.iter_mut().find(|a| a.username == username) {
            Some(account) => {
                account.password_hash = password_hash.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, username: &str) -> Result<bool, AppError> {
        let mut data = self.lock();
        let before = data.accounts.len();
        data.accounts.retain(|a| a.username != username);
        Ok(data.accounts.len() != before)
    }
}

#[async_trait]
impl HotelRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Hotel>, AppError> {
        let mut hotels = self.lock().hotels.clone();
        hotels.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(hotels)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Hotel>, AppError> {
        Ok(self.lock().hotels.iter().find(|h| h.name == name).cloned())
    }

    async fn top_rated(&self, limit: i64) -> Result<Vec<Hotel>, AppError> {
        let mut hotels = self.lock().hotels.clone();
        hotels.sort_by(|a, b| b.rating.cmp(&a.rating).then_with(|| a.name.cmp(&b.name)));
        hotels.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(hotels)
    }

    async fn list_by_city(&self, city: &str) -> Result<Vec<Hotel>, AppError> {
        let mut hotels: Vec<Hotel> = self
            .lock()
            .hotels
            .iter()
            .filter(|h| h.location.city == city)
            .cloned()
            .collect();
        hotels.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(hotels)
    }

    async fn city_exists(&self, city: &str) -> Result<bool, AppError> {
        Ok(self.lock().cities.iter().any(|c| c.city == city))
    }

    async fn create(&self, input: HotelInput) -> Result<Hotel, AppError> {
        let mut data = self.lock();
        if data.hotels.iter().any(|h| h.name == input.name) {
            return Err(duplicate());
        }

        data.remember_city(&input.location);
        let hotel = Hotel {
            id: data.next_id(),
            name: input.name,
            rating: input.rating,
            location: input.location,
        };
        data.hotels.push(hotel.clone());
        Ok(hotel)
    }

    async fn update(&self, name: &str, input: HotelInput) -> Result<Option<Hotel>, AppError> {
        let mut data = self.lock();
        let Some(id) = data.hotels.iter().find(|h| h.name == name).map(|h| h.id) else {
            return Ok(None);
        };
        if data.hotels.iter().any(|h| h.name == input.name && h.id != id) {
            return Err(duplicate());
        }

        data.remember_city(&input.location);
        let hotel = data
            .hotels
            .iter_mut()
            .find(|h| h.id == id)
            .expect("hotel located above");
        hotel.name = input.name;
        hotel.rating = input.rating;
        hotel.location = input.location;
        Ok(Some(hotel.clone()))
    }

    async fn delete(&self, name: &str) -> Result<bool, AppError> {
        let mut data = self.lock();
        let Some(id) = data.hotels.iter().find(|h| h.name == name).map(|h| h.id) else {
            return Ok(false);
        };

        data.hotels.retain(|h| h.id != id);
        data.offers.retain(|o| o.hotel_id != id);
        Ok(true)
    }
}

#[async_trait]
impl OfferRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Offer>, AppError> {
        Ok(self.lock().offers_where(|_| true))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Offer>, AppError> {
        Ok(self.lock().offers_where(|o| o.name == name).pop())
    }

    async fn list_by_hotel(&self, hotel_name: &str) -> Result<Vec<Offer>, AppError> {
        Ok(self.lock().offers_where(|o| o.hotel_name == hotel_name))
    }

    async fn list_by_price(&self, min: Decimal, max: Decimal) -> Result<Vec<Offer>, AppError> {
        let mut offers = self
            .lock()
            .offers_where(|o| o.price >= min && o.price <= max);
        offers.sort_by(|a, b| a.price.cmp(&b.price).then_with(|| a.name.cmp(&b.name)));
        Ok(offers)
    }

    async fn create(&self, input: OfferInput) -> Result<Offer, AppError> {
        let mut data = self.lock();
        if data.offers.iter().any(|o| o.name == input.name) {
            return Err(duplicate());
        }

        let hotel_id = data.hotel_id_for(&input.hotel_name, &input.location);
        let stored = StoredOffer {
            id: data.next_id(),
            name: input.name,
            price: input.price,
            hotel_id,
            reserved_by: None,
        };
        let offer = data.offer(&stored);
        data.offers.push(stored);
        Ok(offer)
    }

    async fn update(&self, name: &str, input: OfferInput) -> Result<Option<Offer>, AppError> {
        let mut data = self.lock();
        let Some(id) = data.offers.iter().find(|o| o.name == name).map(|o| o.id) else {
            return Ok(None);
        };
        if data.offers.iter().any(|o| o.name == input.name && o.id != id) {
            return Err(duplicate());
        }

        let hotel_id = data.hotel_id_for(&input.hotel_name, &input.location);
        let stored = data
            .offers
            .iter_mut()
            .find(|o| o.id == id)
            .expect("offer located above");
        stored.name = input.name;
        stored.price = input.price;
        stored.hotel_id = hotel_id;

        let data = &*data;
        let stored = data.offers.iter().find(|o| o.id == id);
        Ok(stored.map(|o| data.offer(o)))
    }

    async fn delete(&self, name: &str) -> Result<bool, AppError> {
        let mut data = self.lock();
        let before = data.offers.len();
        data.offers.retain(|o| o.name != name);
        Ok(data.offers.len() != before)
    }

    async fn reserve(&self, name: &str, username: &str) -> Result<Option<Offer>, AppError> {
        let mut data = self.lock();
        let Some(stored) = data.offers.iter_mut().find(|o| o.name == name) else {
            return Ok(None);
        };
        stored.reserved_by = Some(username.to_string());

        let data = &*data;
        Ok(data
            .offers
            .iter()
            .find(|o| o.name == name)
            .map(|o| data.offer(o)))
    }
}

pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());

    let accounts: Arc<dyn AccountRepository> = store.clone();
    let hotels: Arc<dyn HotelRepository> = store.clone();
    let offers: Arc<dyn OfferRepository> = store.clone();

    let state = AppState::new(
        Arc::new(AccountService::new(accounts, Arc::new(PlainHasher))),
        Arc::new(HotelService::new(hotels.clone(), TOP_LIMIT)),
        Arc::new(OfferService::new(offers, hotels)),
    );

    (state, store)
}

/// Full API router backed by a fresh store, with `admin`/`admin-pass`
/// and `alice`/`alice-pass` already registered.
pub async fn make_server() -> (TestServer, AppState, Arc<MemoryStore>) {
    let (state, store) = create_test_state();

    state
        .account_service
        .create_admin("admin", "admin-pass")
        .await
        .unwrap();
    state
        .account_service
        .create_user("alice", "alice-pass")
        .await
        .unwrap();

    let server = TestServer::new(api::routes::router(state.clone())).unwrap();
    (server, state, store)
}

/// `Authorization` header value for HTTP Basic credentials.
pub fn basic(username: &str, password: &str) -> HeaderValue {
    let encoded = STANDARD.encode(format!("{username}:{password}"));
    HeaderValue::from_str(&format!("Basic {encoded}")).unwrap()
}

pub fn admin() -> HeaderValue {
    basic("admin", "admin-pass")
}

pub fn alice() -> HeaderValue {
    basic("alice", "alice-pass")
}

pub fn hotel_json(name: &str, rating: i16, city: &str) -> serde_json::Value {
    json!({
        "name": name,
        "rating": rating,
        "cityName": city,
        "countryName": "France",
        "continentName": "Europe"
    })
}

pub fn offer_json(name: &str, hotel: &str, price: i64) -> serde_json::Value {
    json!({
        "name": name,
        "hotelName": hotel,
        "cityName": "Paris",
        "countryName": "France",
        "continentName": "Europe",
        "price": price
    })
}
