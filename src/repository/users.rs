//! Users repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, User},
};

const USER_COLUMNS: &str =
    "id, name, email, phone, password, image, provider, provider_id, role, created_at, updated_at";

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE id = $1", USER_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Get user by email (login identifier)
    pub async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?)
    }

    /// Check whether an account already exists for this email
    pub async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Create a new user with a pre-hashed password
    pub async fn create(&self, user: &CreateUser, password_hash: &str) -> AppResult<User> {
        let now = Utc::now();

        let created = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (name, email, phone, password, image, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, 'user', $6, $6)
            RETURNING {}
            "#,
            USER_COLUMNS
        ))
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(password_hash)
        .bind(&user.image)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}
