//! UI preference persistence
//!
//! A small JSON document (theme, units, timer mode) independent of the
//! relational store. The Settings screen consumes it as load/save plus
//! per-field setters with read-modify-write semantics.

use crate::error::{AppError, AppResult};
use fittrack_shared::{Preferences, Theme, TimerMode, Units};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Handle to the preference document
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences, falling back to defaults when no document exists
    pub fn load(&self) -> AppResult<Preferences> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| AppError::Internal(e.into()))?;
        let prefs = serde_json::from_str(&raw).map_err(|e| AppError::Internal(e.into()))?;
        Ok(prefs)
    }

    /// Persist the full preference document
    pub fn save(&self, prefs: &Preferences) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| AppError::Internal(e.into()))?;
            }
        }
        let raw = serde_json::to_string_pretty(prefs).map_err(|e| AppError::Internal(e.into()))?;
        fs::write(&self.path, raw).map_err(|e| AppError::Internal(e.into()))?;
        debug!(path = %self.path.display(), "Preferences saved");
        Ok(())
    }

    pub fn set_theme(&self, theme: Theme) -> AppResult<Preferences> {
        let mut prefs = self.load()?;
        prefs.theme = theme;
        self.save(&prefs)?;
        Ok(prefs)
    }

    pub fn set_units(&self, units: Units) -> AppResult<Preferences> {
        let mut prefs = self.load()?;
        prefs.units = units;
        self.save(&prefs)?;
        Ok(prefs)
    }

    pub fn set_timer_mode(&self, timer_mode: TimerMode) -> AppResult<Preferences> {
        let mut prefs = self.load()?;
        prefs.timer_mode = timer_mode;
        self.save(&prefs)?;
        Ok(prefs)
    }
}
