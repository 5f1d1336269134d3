//! Workout service: logging, summaries, history, reset

use crate::error::{AppError, AppResult};
use crate::repositories::{UserRepository, WorkoutRepository};
use chrono::Utc;
use fittrack_shared::validation;
use fittrack_shared::{WorkoutEntry, WorkoutSummary};
use sqlx::SqlitePool;
use tracing::info;

/// History rows returned when the caller does not ask for a specific limit
pub const DEFAULT_HISTORY_LIMIT: i64 = 10;

/// Workout service
pub struct WorkoutService;

impl WorkoutService {
    /// Log a workout for an existing user
    pub async fn log(
        pool: &SqlitePool,
        username: &str,
        workout_type: &str,
        duration_minutes: i64,
        calories: i64,
    ) -> AppResult<WorkoutEntry> {
        validation::validate_workout_type(workout_type).map_err(AppError::Validation)?;
        validation::validate_duration_minutes(duration_minutes).map_err(AppError::Validation)?;
        validation::validate_calories(calories).map_err(AppError::Validation)?;

        if !UserRepository::username_exists(pool, username).await? {
            return Err(AppError::NotFound(format!("User '{username}' not found")));
        }

        let record = WorkoutRepository::create(
            pool,
            username,
            workout_type,
            duration_minutes,
            calories,
            Utc::now(),
        )
        .await?;

        info!(username, workout_type, duration_minutes, "Workout logged");

        Ok(WorkoutEntry {
            id: record.id,
            workout_type: record.workout_type,
            duration_minutes: record.duration_minutes,
            calories: record.calories,
            logged_at: record.logged_at,
        })
    }

    /// Aggregate totals; all zeros for a user with no entries
    pub async fn summary(pool: &SqlitePool, username: &str) -> AppResult<WorkoutSummary> {
        let totals = WorkoutRepository::totals(pool, username).await?;
        Ok(WorkoutSummary {
            total_workouts: totals.total_workouts,
            total_minutes: totals.total_minutes,
            total_calories: totals.total_calories,
        })
    }

    /// Most recent entries, newest first
    pub async fn history(
        pool: &SqlitePool,
        username: &str,
        limit: Option<i64>,
    ) -> AppResult<Vec<WorkoutEntry>> {
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
        if limit < 1 {
            return Err(AppError::Validation(
                "History limit must be at least 1".to_string(),
            ));
        }

        let records = WorkoutRepository::history(pool, username, limit).await?;
        Ok(records
            .into_iter()
            .map(|r| WorkoutEntry {
                id: r.id,
                workout_type: r.workout_type,
                duration_minutes: r.duration_minutes,
                calories: r.calories,
                logged_at: r.logged_at,
            })
            .collect())
    }

    /// Delete all of a user's workout entries, returning how many were removed
    pub async fn reset(pool: &SqlitePool, username: &str) -> AppResult<u64> {
        let removed = WorkoutRepository::delete_all(pool, username).await?;
        info!(username, removed, "Workout history reset");
        Ok(removed)
    }
}
