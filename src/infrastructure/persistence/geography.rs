//! Resolution of the continent / country / city / hotel chain.
//!
//! Every level is upserted by its natural key, so resolving the same path
//! twice returns the same ids. Callers run these inside a transaction.

use sqlx::PgConnection;

use crate::domain::entities::Location;

/// Returns the id of the city at `location`, creating missing levels.
pub(crate) async fn resolve_city(
    conn: &mut PgConnection,
    location: &Location,
) -> Result<i64, sqlx::Error> {
    let continent_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO continents (name)
        VALUES ($1)
        ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
        RETURNING id
        "#,
    )
    .bind(&location.continent)
    .fetch_one(&mut *conn)
    .await?;

    let country_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO countries (continent_id, name)
        VALUES ($1, $2)
        ON CONFLICT (continent_id, name) DO UPDATE SET name = EXCLUDED.name
        RETURNING id
        "#,
    )
    .bind(continent_id)
    .bind(&location.country)
    .fetch_one(&mut *conn)
    .await?;

    let city_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO cities (country_id, name)
        VALUES ($1, $2)
        ON CONFLICT (country_id, name) DO UPDATE SET name = EXCLUDED.name
        RETURNING id
        "#,
    )
    .bind(country_id)
    .bind(&location.city)
    .fetch_one(&mut *conn)
    .await?;

    Ok(city_id)
}

/// Returns the id of the hotel named `hotel_name`.
///
/// A missing hotel is created unrated under `location`. An existing hotel
/// keeps its own location.
pub(crate) async fn resolve_hotel(
    conn: &mut PgConnection,
    hotel_name: &str,
    location: &Location,
) -> Result<i64, sqlx::Error> {
    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM hotels WHERE name = $1")
        .bind(hotel_name)
        .fetch_optional(&mut *conn)
        .await?;

    if let Some(id) = existing {
        return Ok(id);
    }

    let city_id = resolve_city(conn, location).await?;

    tracing::debug!(hotel = hotel_name, city = %location.city, "creating hotel for offer");

    sqlx::query_scalar(
        r#"
        INSERT INTO hotels (name, rating, city_id)
        VALUES ($1, 0, $2)
        ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
        RETURNING id
        "#,
    )
    .bind(hotel_name)
    .bind(city_id)
    .fetch_one(&mut *conn)
    .await
}
