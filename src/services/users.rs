//! Authentication and user management service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{CreateUser, User, UserClaims},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    config: AuthConfig,
}

impl UsersService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Register a new user account
    pub async fn register(&self, user: CreateUser) -> AppResult<User> {
        user.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if self.repository.users.email_exists(&user.email).await? {
            return Err(AppError::Conflict(
                "An account with this email already exists".to_string(),
            ));
        }

        let password_hash = self.hash_password(&user.password)?;
        self.repository.users.create(&user, &password_hash).await
    }

    /// Authenticate by email and password, returning a JWT token
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<(String, User)> {
        let user = self
            .repository
            .users
            .get_by_email(email)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid email or password".to_string()))?;

        if !self.verify_password(&user, password)? {
            return Err(AppError::Authentication(
                "Invalid email or password".to_string(),
            ));
        }

        let token = self.create_token_for_user(&user)?;
        Ok((token, user))
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    /// Create JWT token for a user
    fn create_token_for_user(&self, user: &User) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = UserClaims {
            sub: user.email.clone(),
            user_id: user.id,
            role: user.role.clone(),
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Verify user password
    fn verify_password(&self, user: &User, password: &str) -> AppResult<bool> {
        if let Some(ref hash) = user.password {
            let parsed_hash = PasswordHash::new(hash)
                .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
            return Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok());
        }

        // Accounts created through an external provider have no local password
        Ok(false)
    }

    /// Hash a password using Argon2
    fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }
}
