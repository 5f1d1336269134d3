//! User and body-measurement repository

use chrono::NaiveDate;
use sqlx::SqlitePool;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub joined_on: NaiveDate,
}

/// Body-measurement record; at most one row per user, maintained by upsert
#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct MeasurementRecord {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub body_fat_pct: f64,
    pub bmi: f64,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Insert a new user
    pub async fn create(
        pool: &SqlitePool,
        username: &str,
        email: &str,
        password_hash: &str,
        joined_on: NaiveDate,
    ) -> sqlx::Result<UserRecord> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (username, email, password_hash, joined_on)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, username, email, password_hash, joined_on
            "#,
        )
        .bind(username)
        .bind(email)
        .bind(password_hash)
        .bind(joined_on)
        .fetch_one(pool)
        .await
    }

    /// Find user by username
    pub async fn find_by_username(
        pool: &SqlitePool,
        username: &str,
    ) -> sqlx::Result<Option<UserRecord>> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, email, password_hash, joined_on
            FROM users
            WHERE username = ?1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await
    }

    /// Credential lookup: username plus stored-digest equality
    pub async fn find_by_credentials(
        pool: &SqlitePool,
        username: &str,
        password_hash: &str,
    ) -> sqlx::Result<Option<UserRecord>> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, username, email, password_hash, joined_on
            FROM users
            WHERE username = ?1 AND password_hash = ?2
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_optional(pool)
        .await
    }

    /// Check if username exists
    pub async fn username_exists(pool: &SqlitePool, username: &str) -> sqlx::Result<bool> {
        sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM users WHERE username = ?1)"#,
        )
        .bind(username)
        .fetch_one(pool)
        .await
    }

    /// Check if email exists
    pub async fn email_exists(pool: &SqlitePool, email: &str) -> sqlx::Result<bool> {
        sqlx::query_scalar::<_, bool>(r#"SELECT EXISTS(SELECT 1 FROM users WHERE email = ?1)"#)
            .bind(email)
            .fetch_one(pool)
            .await
    }

    /// Email associated with a username
    pub async fn email(pool: &SqlitePool, username: &str) -> sqlx::Result<Option<String>> {
        sqlx::query_scalar::<_, String>(r#"SELECT email FROM users WHERE username = ?1"#)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Measurements for a user, if any were ever recorded
    pub async fn measurements(
        pool: &SqlitePool,
        username: &str,
    ) -> sqlx::Result<Option<MeasurementRecord>> {
        sqlx::query_as::<_, MeasurementRecord>(
            r#"
            SELECT weight_kg, height_cm, body_fat_pct, bmi
            FROM body_measurements
            WHERE username = ?1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await
    }

    /// Insert-or-update the measurement row keyed by username
    pub async fn upsert_measurements(
        pool: &SqlitePool,
        username: &str,
        weight_kg: f64,
        height_cm: f64,
        body_fat_pct: f64,
        bmi: f64,
    ) -> sqlx::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO body_measurements (username, weight_kg, height_cm, body_fat_pct, bmi)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(username) DO UPDATE SET
                weight_kg = excluded.weight_kg,
                height_cm = excluded.height_cm,
                body_fat_pct = excluded.body_fat_pct,
                bmi = excluded.bmi
            "#,
        )
        .bind(username)
        .bind(weight_kg)
        .bind(height_cm)
        .bind(body_fat_pct)
        .bind(bmi)
        .execute(pool)
        .await
        .map(|_| ())
    }
}
