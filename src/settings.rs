//! Calendar interaction settings.
//!
//! Settings live in `<config dir>/boxlog/calendar.json`. Missing fields fall
//! back to the defaults in [`crate::constants`], so an empty object is a
//! valid settings file.

use crate::constants::{
    CONFIG_DIR_NAME, DEFAULT_DURATION_MINUTES, DEFAULT_HOUR_HEIGHT, LAST_MINUTE_OF_DAY, LONG_PRESS_DURATION_MS,
    LONG_PRESS_MOVE_THRESHOLD, MIN_DRAG_DISTANCE, MIN_SELECTION_MINUTES, SETTINGS_FILE_NAME,
    SINGLE_TAP_MAX_DURATION_MS, SNAP_MINUTES,
};
use crate::error::{SettingsError, SettingsResult};
use crate::input::GestureThresholds;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Tunables for the day column selection model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectionSettings {
    /// Grid granularity in minutes; must divide an hour
    pub snap_minutes: u32,
    /// Pixels per hour used when the host does not pass one
    pub hour_height: f32,
    /// Duration of click, tap and double-click creations
    pub default_duration_minutes: u32,
    /// Minimum span of a dragged selection
    pub min_selection_minutes: u32,
    pub long_press_ms: u64,
    pub long_press_move_threshold: f32,
    pub single_tap_max_ms: u64,
    pub min_drag_distance: f32,
    /// Emit haptic feedback on touch devices
    pub haptics: bool,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            snap_minutes: SNAP_MINUTES,
            hour_height: DEFAULT_HOUR_HEIGHT,
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
            min_selection_minutes: MIN_SELECTION_MINUTES,
            long_press_ms: LONG_PRESS_DURATION_MS,
            long_press_move_threshold: LONG_PRESS_MOVE_THRESHOLD,
            single_tap_max_ms: SINGLE_TAP_MAX_DURATION_MS,
            min_drag_distance: MIN_DRAG_DISTANCE,
            haptics: true,
        }
    }
}

/// Path of the settings file in the platform config directory.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME))
}

impl SelectionSettings {
    /// Load settings from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %path.display(), "Ignoring calendar settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load and validate settings from a specific file.
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        tracing::debug!(path = %path.display(), "Loaded calendar settings");
        Ok(settings)
    }

    /// Save to the default location.
    pub fn save(&self) -> SettingsResult<()> {
        let path = default_settings_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Write settings atomically: a temp file in the same directory is
    /// renamed over the target.
    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(self)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| SettingsError::Persist {
            path: path.to_path_buf(),
            source: e.error,
        })?;
        Ok(())
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if self.snap_minutes == 0 || 60 % self.snap_minutes != 0 {
            return Err(SettingsError::Invalid {
                field: "snapMinutes",
                reason: format!("{} does not divide an hour", self.snap_minutes),
            });
        }
        if !self.hour_height.is_finite() || self.hour_height <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "hourHeight",
                reason: format!("{} is not a positive pixel height", self.hour_height),
            });
        }
        if !(1..=LAST_MINUTE_OF_DAY).contains(&self.default_duration_minutes) {
            return Err(SettingsError::Invalid {
                field: "defaultDurationMinutes",
                reason: format!("{} is not between 1 and {LAST_MINUTE_OF_DAY}", self.default_duration_minutes),
            });
        }
        if !(1..=LAST_MINUTE_OF_DAY).contains(&self.min_selection_minutes) {
            return Err(SettingsError::Invalid {
                field: "minSelectionMinutes",
                reason: format!("{} is not between 1 and {LAST_MINUTE_OF_DAY}", self.min_selection_minutes),
            });
        }
        if self.long_press_move_threshold < 0.0 || self.min_drag_distance < 0.0 {
            return Err(SettingsError::Invalid {
                field: "minDragDistance",
                reason: "distances cannot be negative".to_string(),
            });
        }
        Ok(())
    }

    /// Gesture thresholds derived from these settings.
    pub fn thresholds(&self) -> GestureThresholds {
        GestureThresholds {
            long_press: Duration::from_millis(self.long_press_ms),
            long_press_move_threshold: self.long_press_move_threshold,
            single_tap_max: Duration::from_millis(self.single_tap_max_ms),
            min_drag_distance: self.min_drag_distance,
        }
    }
}
