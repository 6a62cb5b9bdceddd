//! PostgreSQL implementation of the offer repository.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};
use std::sync::Arc;

use super::geography::resolve_hotel;
use crate::domain::entities::{Location, Offer, OfferInput};
use crate::domain::repositories::OfferRepository;
use crate::error::AppError;

/// Offer columns joined with hotel and geography names.
const OFFER_SELECT: &str = r#"
    SELECT o.id, o.name, o.price, o.reserved_by,
           h.name AS hotel_name,
           ci.name AS city, co.name AS country, ct.name AS continent
    FROM offers o
    JOIN hotels h ON h.id = o.hotel_id
    JOIN cities ci ON ci.id = h.city_id
    JOIN countries co ON co.id = ci.country_id
    JOIN continents ct ON ct.id = co.continent_id
"#;

/// PostgreSQL repository for offers.
///
/// Reservations are a plain `reserved_by` username column; no foreign key to
/// `accounts`, so reservations outlive deleted accounts.
pub struct PgOfferRepository {
    pool: Arc<PgPool>,
}

impl PgOfferRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OfferRow {
    id: i64,
    name: String,
    price: Decimal,
    reserved_by: Option<String>,
    hotel_name: String,
    city: String,
    country: String,
    continent: String,
}

impl From<OfferRow> for Offer {
    fn from(row: OfferRow) -> Self {
        Offer {
            id: row.id,
            name: row.name,
            price: row.price,
            hotel_name: row.hotel_name,
            location: Location {
                continent: row.continent,
                country: row.country,
                city: row.city,
            },
            reserved_by: row.reserved_by,
        }
    }
}

async fn fetch_by_id(conn: &mut PgConnection, id: i64) -> Result<Offer, sqlx::Error> {
    let sql = format!("{OFFER_SELECT} WHERE o.id = $1");
    let row = sqlx::query_as::<_, OfferRow>(&sql)
        .bind(id)
        .fetch_one(conn)
        .await?;

    Ok(row.into())
}

#[async_trait]
impl OfferRepository for PgOfferRepository {
    async fn list(&self) -> Result<Vec<Offer>, AppError> {
        let sql = format!("{OFFER_SELECT} ORDER BY o.name");
        let rows = sqlx::query_as::<_, OfferRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Offer::from).collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Offer>, AppError> {
        let sql = format!("{OFFER_SELECT} WHERE o.name = $1");
        let row = sqlx::query_as::<_, OfferRow>(&sql)
            .bind(name)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Offer::from))
    }

    async fn list_by_hotel(&self, hotel_name: &str) -> Result<Vec<Offer>, AppError> {
        let sql = format!("{OFFER_SELECT} WHERE h.name = $1 ORDER BY o.name");
        let rows = sqlx::query_as::<_, OfferRow>(&sql)
            .bind(hotel_name)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Offer::from).collect())
    }

    async fn list_by_price(&self, min: Decimal, max: Decimal) -> Result<Vec<Offer>, AppError> {
        let sql = format!(
            "{OFFER_SELECT} WHERE o.price >= $1 AND o.price <= $2 ORDER BY o.price, o.name"
        );
        let rows = sqlx::query_as::<_, OfferRow>(&sql)
            .bind(min)
            .bind(max)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Offer::from).collect())
    }

    async fn create(&self, input: OfferInput) -> Result<Offer, AppError> {
        let mut tx = self.pool.begin().await?;

        let hotel_id = resolve_hotel(&mut tx, &input.hotel_name, &input.location).await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO offers (name, price, hotel_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(hotel_id)
        .fetch_one(&mut *tx)
        .await?;

        let offer = fetch_by_id(&mut tx, id).await?;
        tx.commit().await?;

        Ok(offer)
    }

    async fn update(&self, name: &str, input: OfferInput) -> Result<Option<Offer>, AppError> {
        let mut tx = self.pool.begin().await?;

        let hotel_id = resolve_hotel(&mut tx, &input.hotel_name, &input.location).await?;

        let id: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE offers
            SET name = $2, price = $3, hotel_id = $4, updated_at = NOW()
            WHERE name = $1
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(&input.name)
        .bind(input.price)
        .bind(hotel_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(id) = id else {
            tx.rollback().await?;
            return Ok(None);
        };

        let offer = fetch_by_id(&mut tx, id).await?;
        tx.commit().await?;

        Ok(Some(offer))
    }

    async fn delete(&self, name: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM offers WHERE name = $1")
            .bind(name)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn reserve(&self, name: &str, username: &str) -> Result<Option<Offer>, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE offers
            SET reserved_by = $2, updated_at = NOW()
            WHERE name = $1
            "#,
        )
        .bind(name)
        .bind(username)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.find_by_name(name).await
    }
}
