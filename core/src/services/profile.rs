//! Profile service: merged account/measurement reads and measurement upserts

use crate::error::{AppError, AppResult};
use crate::repositories::UserRepository;
use fittrack_shared::validation;
use fittrack_shared::UserProfile;
use sqlx::SqlitePool;
use tracing::info;

/// Profile service
pub struct ProfileService;

impl ProfileService {
    /// Merged profile: account fields plus measurements
    ///
    /// Measurements default to zero when the user has never recorded any;
    /// `None` when the user does not exist.
    pub async fn profile(pool: &SqlitePool, username: &str) -> AppResult<Option<UserProfile>> {
        let Some(user) = UserRepository::find_by_username(pool, username).await? else {
            return Ok(None);
        };

        let m = UserRepository::measurements(pool, username)
            .await?
            .unwrap_or_default();

        Ok(Some(UserProfile {
            username: user.username,
            email: user.email,
            joined_on: user.joined_on,
            weight_kg: m.weight_kg,
            height_cm: m.height_cm,
            body_fat_pct: m.body_fat_pct,
            bmi: m.bmi,
        }))
    }

    /// Upsert the user's body measurements
    ///
    /// BMI is derived from weight and height at write time.
    pub async fn update_measurements(
        pool: &SqlitePool,
        username: &str,
        weight_kg: f64,
        height_cm: f64,
        body_fat_pct: f64,
    ) -> AppResult<()> {
        validation::validate_weight_kg(weight_kg).map_err(AppError::Validation)?;
        validation::validate_height_cm(height_cm).map_err(AppError::Validation)?;
        validation::validate_body_fat_pct(body_fat_pct).map_err(AppError::Validation)?;

        if !UserRepository::username_exists(pool, username).await? {
            return Err(AppError::NotFound(format!("User '{username}' not found")));
        }

        let bmi = Self::bmi(weight_kg, height_cm);
        UserRepository::upsert_measurements(pool, username, weight_kg, height_cm, body_fat_pct, bmi)
            .await?;

        info!(username, weight_kg, height_cm, "Measurements updated");
        Ok(())
    }

    /// Body mass index from weight and height, rounded to one decimal
    fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
        let height_m = height_cm / 100.0;
        ((weight_kg / (height_m * height_m)) * 10.0).round() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi() {
        assert_eq!(ProfileService::bmi(70.0, 175.0), 22.9);
        assert_eq!(ProfileService::bmi(80.0, 180.0), 24.7);
    }
}
