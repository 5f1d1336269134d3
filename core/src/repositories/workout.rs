//! Workout repository

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Workout record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutRecord {
    pub id: i64,
    pub username: String,
    pub workout_type: String,
    pub duration_minutes: i64,
    pub calories: i64,
    pub logged_at: DateTime<Utc>,
}

/// Aggregate row for a user's workout totals
#[derive(Debug, Clone, Copy, Default, sqlx::FromRow)]
pub struct WorkoutTotals {
    pub total_workouts: i64,
    pub total_minutes: i64,
    pub total_calories: i64,
}

/// Workout repository
pub struct WorkoutRepository;

impl WorkoutRepository {
    /// Insert a workout entry
    pub async fn create(
        pool: &SqlitePool,
        username: &str,
        workout_type: &str,
        duration_minutes: i64,
        calories: i64,
        logged_at: DateTime<Utc>,
    ) -> sqlx::Result<WorkoutRecord> {
        sqlx::query_as::<_, WorkoutRecord>(
            r#"
            INSERT INTO workouts (username, workout_type, duration_minutes, calories, logged_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, username, workout_type, duration_minutes, calories, logged_at
            "#,
        )
        .bind(username)
        .bind(workout_type)
        .bind(duration_minutes)
        .bind(calories)
        .bind(logged_at)
        .fetch_one(pool)
        .await
    }

    /// Aggregate totals; zero-valued when no rows exist
    pub async fn totals(pool: &SqlitePool, username: &str) -> sqlx::Result<WorkoutTotals> {
        sqlx::query_as::<_, WorkoutTotals>(
            r#"
            SELECT COUNT(*) AS total_workouts,
                   COALESCE(SUM(duration_minutes), 0) AS total_minutes,
                   COALESCE(SUM(calories), 0) AS total_calories
            FROM workouts
            WHERE username = ?1
            "#,
        )
        .bind(username)
        .fetch_one(pool)
        .await
    }

    /// Most recent entries, newest first, bounded by `limit`
    pub async fn history(
        pool: &SqlitePool,
        username: &str,
        limit: i64,
    ) -> sqlx::Result<Vec<WorkoutRecord>> {
        sqlx::query_as::<_, WorkoutRecord>(
            r#"
            SELECT id, username, workout_type, duration_minutes, calories, logged_at
            FROM workouts
            WHERE username = ?1
            ORDER BY logged_at DESC, id DESC
            LIMIT ?2
            "#,
        )
        .bind(username)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Delete every workout row for a user, returning the number removed
    pub async fn delete_all(pool: &SqlitePool, username: &str) -> sqlx::Result<u64> {
        let result = sqlx::query(r#"DELETE FROM workouts WHERE username = ?1"#)
            .bind(username)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
