//! Shared application state

use crate::config::AppConfig;
use crate::prefs::PreferenceStore;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Everything the app's screens need: the database pool, loaded
/// configuration, and the preference store.
#[derive(Clone)]
pub struct AppState {
    db: SqlitePool,
    config: Arc<AppConfig>,
    prefs: PreferenceStore,
}

impl AppState {
    pub fn new(db: SqlitePool, config: AppConfig) -> Self {
        let prefs = PreferenceStore::new(config.preferences.path.as_str());
        Self {
            db,
            config: Arc::new(config),
            prefs,
        }
    }

    pub fn db(&self) -> &SqlitePool {
        &self.db
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn prefs(&self) -> &PreferenceStore {
        &self.prefs
    }
}
