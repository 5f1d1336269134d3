//! Input validation functions
//!
//! Validation happens before any statement reaches the storage layer, so
//! malformed input never turns into a constraint violation.

/// Validate a username
pub fn validate_username(username: &str) -> Result<(), String> {
    if username.is_empty() {
        return Err("Username cannot be empty".to_string());
    }
    if username.chars().any(char::is_whitespace) {
        return Err("Username cannot contain spaces".to_string());
    }
    if username.len() > 32 {
        return Err("Username too long".to_string());
    }
    Ok(())
}

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    if email.len() > 255 {
        return Err("Email too long".to_string());
    }
    let email_regex = regex_lite::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    if !email_regex.is_match(email) {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < 6 {
        return Err("Password must be at least 6 characters".to_string());
    }
    if password.len() > 128 {
        return Err("Password too long".to_string());
    }
    Ok(())
}

/// Validate a team name
pub fn validate_team_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Team name cannot be empty".to_string());
    }
    if name.len() > 64 {
        return Err("Team name too long".to_string());
    }
    Ok(())
}

/// Validate a workout type label
pub fn validate_workout_type(workout_type: &str) -> Result<(), String> {
    if workout_type.trim().is_empty() {
        return Err("Workout type cannot be empty".to_string());
    }
    if workout_type.len() > 64 {
        return Err("Workout type too long".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate body fat percentage (0-100)
pub fn validate_body_fat_pct(value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err("Body fat must be a valid number".to_string());
    }
    if !(0.0..=100.0).contains(&value) {
        return Err("Body fat must be between 0 and 100".to_string());
    }
    Ok(())
}

/// Validate workout duration in minutes
pub fn validate_duration_minutes(minutes: i64) -> Result<(), String> {
    if minutes < 0 {
        return Err("Duration cannot be negative".to_string());
    }
    if minutes > 1440 {
        // 24 hours
        return Err("Duration cannot exceed 24 hours".to_string());
    }
    Ok(())
}

/// Validate calorie value
pub fn validate_calories(calories: i64) -> Result<(), String> {
    if calories < 0 {
        return Err("Calories cannot be negative".to_string());
    }
    if calories > 50_000 {
        return Err("Calorie value unreasonably high".to_string());
    }
    Ok(())
}
