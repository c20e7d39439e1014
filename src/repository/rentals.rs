//! Rentals repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::rental::{NewRental, Rental, RentalQuery},
};

const RENTAL_COLUMNS: &str = "id, gear_id, gear_name, gear_image, user_id, email, name, phone, \
     start_date, end_date, duration, daily_rate, total_price, status, location, notes, \
     created_at, updated_at";

#[derive(Clone)]
pub struct RentalsRepository {
    pool: Pool<Postgres>,
}

impl RentalsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a batch of rental orders atomically.
    ///
    /// All orders from one checkout land together or not at all.
    pub async fn create_many(&self, rentals: &[NewRental]) -> AppResult<Vec<Rental>> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let mut created = Vec::with_capacity(rentals.len());
        for rental in rentals {
            let row = sqlx::query_as::<_, Rental>(&format!(
                r#"
                INSERT INTO rentals (
                    gear_id, gear_name, gear_image, user_id, email, name, phone,
                    start_date, end_date, duration, daily_rate, total_price,
                    status, location, notes, created_at, updated_at
                ) VALUES (
                    $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $16
                ) RETURNING {}
                "#,
                RENTAL_COLUMNS
            ))
            .bind(rental.gear_id)
            .bind(&rental.gear_name)
            .bind(&rental.gear_image)
            .bind(rental.user_id)
            .bind(&rental.email)
            .bind(&rental.name)
            .bind(&rental.phone)
            .bind(rental.start_date)
            .bind(rental.end_date)
            .bind(rental.duration)
            .bind(rental.daily_rate)
            .bind(rental.total_price)
            .bind(rental.status)
            .bind(&rental.location)
            .bind(&rental.notes)
            .bind(now)
            .fetch_one(&mut *tx)
            .await?;

            created.push(row);
        }

        tx.commit().await?;
        Ok(created)
    }

    /// List rental orders, newest first, optionally filtered by renter email
    /// and/or status.
    pub async fn search(&self, query: &RentalQuery) -> AppResult<Vec<Rental>> {
        let mut conditions = vec!["1=1".to_string()];
        let mut binds: Vec<String> = Vec::new();

        if let Some(ref email) = query.email {
            binds.push(email.clone());
            conditions.push(format!("email = ${}", binds.len()));
        }

        if let Some(ref status) = query.status {
            binds.push(status.clone());
            conditions.push(format!("status = ${}", binds.len()));
        }

        let select_query = format!(
            "SELECT {} FROM rentals WHERE {} ORDER BY created_at DESC",
            RENTAL_COLUMNS,
            conditions.join(" AND ")
        );

        let mut select = sqlx::query_as::<_, Rental>(&select_query);
        for bind in &binds {
            select = select.bind(bind);
        }

        Ok(select.fetch_all(&self.pool).await?)
    }
}
