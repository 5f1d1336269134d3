//! Domain models for the FitTrack application

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Merged user profile: account fields plus body measurements.
///
/// Measurement fields are zero when the user has never recorded any.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub joined_on: NaiveDate,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub body_fat_pct: f64,
    pub bmi: f64,
}

/// A single logged workout, newest first in history listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutEntry {
    pub id: i64,
    pub workout_type: String,
    pub duration_minutes: i64,
    pub calories: i64,
    pub logged_at: DateTime<Utc>,
}

/// Aggregate workout totals for one user.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutSummary {
    pub total_workouts: i64,
    pub total_minutes: i64,
    pub total_calories: i64,
}

/// Team listing entry with member count (zero-member teams included).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamOverview {
    pub name: String,
    pub member_count: i64,
}

/// Dietary goal a meal plan is generated for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealGoal {
    MuscleGain,
    WeightLoss,
    Maintenance,
}

impl MealGoal {
    pub const ALL: [MealGoal; 3] = [
        MealGoal::MuscleGain,
        MealGoal::WeightLoss,
        MealGoal::Maintenance,
    ];
}

impl fmt::Display for MealGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MealGoal::MuscleGain => "Muscle Gain",
            MealGoal::WeightLoss => "Weight Loss",
            MealGoal::Maintenance => "Maintenance",
        };
        f.write_str(label)
    }
}

impl FromStr for MealGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', " ").as_str() {
            "muscle gain" => Ok(MealGoal::MuscleGain),
            "weight loss" => Ok(MealGoal::WeightLoss),
            "maintenance" => Ok(MealGoal::Maintenance),
            other => Err(format!("Unknown meal goal: {other}")),
        }
    }
}

/// One suggested meal per slot of the day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealPlan {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snack: String,
}

/// UI theme.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Measurement unit system.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

/// Workout timer behavior.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    #[default]
    Stopwatch,
    Countdown,
}

/// Persisted UI preferences.
///
/// Missing keys in the stored document fall back to defaults, so documents
/// written by older versions keep loading.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Preferences {
    pub theme: Theme,
    pub units: Units,
    pub timer_mode: TimerMode,
}
