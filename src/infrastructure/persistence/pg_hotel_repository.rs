//! PostgreSQL implementation of the hotel repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::geography::resolve_city;
use crate::domain::entities::{Hotel, HotelInput, Location};
use crate::domain::repositories::HotelRepository;
use crate::error::AppError;

/// Hotel columns joined with their geography path.
const HOTEL_SELECT: &str = r#"
    SELECT h.id, h.name, h.rating,
           ci.name AS city, co.name AS country, ct.name AS continent
    FROM hotels h
    JOIN cities ci ON ci.id = h.city_id
    JOIN countries co ON co.id = ci.country_id
    JOIN continents ct ON ct.id = co.continent_id
"#;

/// PostgreSQL repository for hotels.
///
/// Writes run in a transaction so that geography rows created for a hotel
/// are rolled back together with it.
pub struct PgHotelRepository {
    pool: Arc<PgPool>,
}

impl PgHotelRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct HotelRow {
    id: i64,
    name: String,
    rating: i16,
    city: String,
    country: String,
    continent: String,
}

impl From<HotelRow> for Hotel {
    fn from(row: HotelRow) -> Self {
        Hotel {
            id: row.id,
            name: row.name,
            rating: row.rating,
            location: Location {
                continent: row.continent,
                country: row.country,
                city: row.city,
            },
        }
    }
}

#[async_trait]
impl HotelRepository for PgHotelRepository {
    async fn list(&self) -> Result<Vec<Hotel>, AppError> {
        let sql = format!("{HOTEL_SELECT} ORDER BY h.name");
        let rows = sqlx::query_as::<_, HotelRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Hotel>, AppError> {
        let sql = format!("{HOTEL_SELECT} WHERE h.name = $1");
        let row = sqlx::query_as::<_, HotelRow>(&sql)
            .bind(name)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Hotel::from))
    }

    async fn top_rated(&self, limit: i64) -> Result<Vec<Hotel>, AppError> {
        let sql = format!("{HOTEL_SELECT} ORDER BY h.rating DESC, h.name LIMIT $1");
        let rows = sqlx::query_as::<_, HotelRow>(&sql)
            .bind(limit)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn list_by_city(&self, city: &str) -> Result<Vec<Hotel>, AppError> {
        let sql = format!("{HOTEL_SELECT} WHERE ci.name = $1 ORDER BY h.name");
        let rows = sqlx::query_as::<_, HotelRow>(&sql)
            .bind(city)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Hotel::from).collect())
    }

    async fn city_exists(&self, city: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM cities WHERE name = $1)")
                .bind(city)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn create(&self, input: HotelInput) -> Result<Hotel, AppError> {
        let mut tx = self.pool.begin().await?;

        let city_id = resolve_city(&mut tx, &input.location).await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO hotels (name, rating, city_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(input.rating)
        .bind(city_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Hotel {
            id,
            name: input.name,
            rating: input.rating,
            location: input.location,
        })
    }

    async fn update(&self, name: &str, input: HotelInput) -> Result<Option<Hotel>, AppError> {
        let mut tx = self.pool.begin().await?;

        let city_id = resolve_city(&mut tx, &input.location).await?;

        let id: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE hotels
            SET name = $2, rating = $3, city_id = $4, updated_at = NOW()
            WHERE name = $1
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(&input.name)
        .bind(input.rating)
        .bind(city_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(id) = id else {
            tx.rollback().await?;
            return Ok(None);
        };

        tx.commit().await?;

        Ok(Some(Hotel {
            id,
            name: input.name,
            rating: input.rating,
            location: input.location,
        }))
    }

    async fn delete(&self, name: &str) -> Result<bool, AppError> {
        // Offers go with the hotel via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM hotels WHERE name = $1")
            .bind(name)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
