//! Configuration management for the FitTrack core
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FT__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub preferences: PreferencesConfig,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the SQLite file, created on first open
    pub path: String,
    pub max_connections: u32,
}

/// Location of the UI-preference document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesConfig {
    pub path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                path: "fittrack.db".to_string(),
                max_connections: 5,
            },
            preferences: PreferencesConfig {
                path: "settings.json".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FT__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (FT__ prefix)
            // e.g., FT__DATABASE__PATH=/data/fittrack.db sets database.path
            .add_source(config::Environment::with_prefix("FT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.database.path, "fittrack.db");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.preferences.path, "settings.json");
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let config = AppConfig::load().expect("load should fall back to defaults");
        assert_eq!(config.database.max_connections, 5);
    }
}
