//! User service: registration, login, and account lookups

use crate::auth::{PasswordService, Session};
use crate::error::{AppError, AppResult};
use crate::repositories::UserRepository;
use chrono::Utc;
use fittrack_shared::validation;
use sqlx::SqlitePool;
use tracing::{debug, info};
use validator::ValidateEmail;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user
    ///
    /// Uniqueness is checked up front and enforced again by the schema, so
    /// a racing duplicate still surfaces as `Conflict` rather than a raw
    /// constraint violation.
    pub async fn register(
        pool: &SqlitePool,
        username: &str,
        email: &str,
        password: &str,
    ) -> AppResult<()> {
        validation::validate_username(username).map_err(AppError::Validation)?;
        if !email.validate_email() {
            return Err(AppError::Validation("Invalid email format".to_string()));
        }
        validation::validate_password(password).map_err(AppError::Validation)?;

        if UserRepository::username_exists(pool, username).await? {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }
        if UserRepository::email_exists(pool, email).await? {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        let password_hash = PasswordService::hash(password);
        UserRepository::create(pool, username, email, &password_hash, Utc::now().date_naive())
            .await
            .map_err(|e| AppError::conflict_on_unique(e, "Username or email already exists"))?;

        info!(username, "User registered");
        Ok(())
    }

    /// Validate credentials
    ///
    /// Wrong password and unknown username both return `None`; only storage
    /// faults are errors.
    pub async fn authenticate(
        pool: &SqlitePool,
        username: &str,
        password: &str,
    ) -> AppResult<Option<Session>> {
        if username.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "Username and password are required".to_string(),
            ));
        }

        let password_hash = PasswordService::hash(password);
        let user = UserRepository::find_by_credentials(pool, username, &password_hash).await?;
        if user.is_none() {
            debug!(username, "Login rejected");
        }

        Ok(user.map(|u| Session {
            user_id: u.id,
            username: u.username,
            email: u.email,
            joined_on: u.joined_on,
        }))
    }

    /// Email lookup for password recovery; `None` when the username is unknown
    pub async fn email_for(pool: &SqlitePool, username: &str) -> AppResult<Option<String>> {
        Ok(UserRepository::email(pool, username).await?)
    }
}
