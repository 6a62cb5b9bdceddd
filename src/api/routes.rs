//! API route tables.
//!
//! Reads of hotels and offers and signup are public. Everything else sits
//! behind a Basic-auth role guard from [`crate::api::middleware::auth`].

use crate::api::handlers::{
    add_hotel_handler, add_offer_handler, change_password_handler, create_admin_handler,
    create_user_handler, delete_hotel_handler, delete_offer_handler, delete_user_handler,
    get_hotel_handler, get_offer_handler, hotels_by_city_handler, list_hotels_handler,
    list_offers_handler, offers_by_hotel_handler, offers_by_price_handler, reserve_offer_handler,
    top_hotels_handler, update_hotel_handler, update_offer_handler,
};
use crate::api::middleware::auth;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

/// Routes open to anonymous callers.
///
/// # Endpoints
///
/// - `POST /users/create`            - Sign up
/// - `GET  /hotels`                  - All hotels
/// - `GET  /hotels/topHotels`        - Best rated hotels
/// - `GET  /hotels/filterByCity`     - Hotels in a city
/// - `GET  /hotels/{name}`           - One hotel
/// - `GET  /offers`                  - All offers
/// - `GET  /offers/filterByHotel`    - Offers of a hotel
/// - `GET  /offers/filterByPrice`    - Offers within a price range
/// - `GET  /offers/{name}`           - One offer
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/users/create", post(create_user_handler))
        .route("/hotels", get(list_hotels_handler))
        .route("/hotels/topHotels", get(top_hotels_handler))
        .route("/hotels/filterByCity", get(hotels_by_city_handler))
        .route("/hotels/{name}", get(get_hotel_handler))
        .route("/offers", get(list_offers_handler))
        .route("/offers/filterByHotel", get(offers_by_hotel_handler))
        .route("/offers/filterByPrice", get(offers_by_price_handler))
        .route("/offers/{name}", get(get_offer_handler))
}

/// Routes requiring the `USER` role.
///
/// # Endpoints
///
/// - `DELETE /users/delete`          - Delete own account
/// - `PUT    /users/changePassword`  - Change own password
/// - `PUT    /offers/reserve/{name}` - Reserve an offer
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/delete", delete(delete_user_handler))
        .route("/users/changePassword", put(change_password_handler))
        .route("/offers/reserve/{name}", put(reserve_offer_handler))
}

/// Routes requiring the `ADMIN` role.
///
/// # Endpoints
///
/// - `POST   /users/admin/create`    - Create an administrator
/// - `POST   /hotels/addHotel`       - Create a hotel
/// - `PUT    /hotels/{name}`         - Overwrite a hotel
/// - `DELETE /hotels/{name}`         - Delete a hotel and its offers
/// - `POST   /offers/addOffer`       - Create an offer
/// - `PUT    /offers/{name}`         - Overwrite an offer
/// - `DELETE /offers/{name}`         - Delete an offer
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/users/admin/create", post(create_admin_handler))
        .route("/hotels/addHotel", post(add_hotel_handler))
        .route(
            "/hotels/{name}",
            put(update_hotel_handler).delete(delete_hotel_handler),
        )
        .route("/offers/addOffer", post(add_offer_handler))
        .route(
            "/offers/{name}",
            put(update_offer_handler).delete(delete_offer_handler),
        )
}

/// All API routes with their guards applied and state attached.
///
/// Guards are attached with `route_layer`, so unmatched paths still yield
/// 404 rather than 401.
pub fn router(state: AppState) -> Router {
    let user = user_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::require_user,
    ));

    let admin = admin_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::require_admin,
    ));

    Router::new()
        .merge(public_routes())
        .merge(user)
        .merge(admin)
        .with_state(state)
}
