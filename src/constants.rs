//! Interaction constants.
//!
//! Centralizes the grid and gesture thresholds used by the time mapper,
//! the gesture classifier and the selection session. Every value here is
//! the default for the matching field of [`crate::settings::SelectionSettings`].

// ============================================================================
// Time Grid
// ============================================================================

/// Grid granularity in minutes
pub const SNAP_MINUTES: u32 = 15;

/// Minimum span of a dragged selection in minutes
pub const MIN_SELECTION_MINUTES: u32 = 15;

/// Duration of a selection created by click, tap or double-click
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

/// Pixels per hour when the host does not supply one
pub const DEFAULT_HOUR_HEIGHT: f32 = 72.0;

/// Hours in one day column
pub const HOURS_PER_DAY: u32 = 24;

/// Minutes since midnight of the last representable minute (23:59)
pub const LAST_MINUTE_OF_DAY: u32 = HOURS_PER_DAY * 60 - 1;

// ============================================================================
// Gesture Thresholds
// ============================================================================

/// Time a touch must be held before it arms a drag
pub const LONG_PRESS_DURATION_MS: u64 = 300;

/// Movement that cancels a pending long press, in pixels
pub const LONG_PRESS_MOVE_THRESHOLD: f32 = 10.0;

/// Longest touch that still counts as a tap
pub const SINGLE_TAP_MAX_DURATION_MS: u64 = 200;

/// Movement from the anchor that promotes a press to a visible drag, in pixels
pub const MIN_DRAG_DISTANCE: f32 = 5.0;

/// Click count reported by the host for a double-click
pub const DOUBLE_CLICK_COUNT: u8 = 2;

// ============================================================================
// Handler Budgets
// ============================================================================

/// Budget for a single move handler before the profiler warns, in milliseconds
pub const MOVE_HANDLER_BUDGET_MS: f64 = 2.0;

// ============================================================================
// Configuration
// ============================================================================

/// Directory under the platform config dir holding BoxLog settings
pub const CONFIG_DIR_NAME: &str = "boxlog";

/// Settings file name for the calendar interaction settings
pub const SETTINGS_FILE_NAME: &str = "calendar.json";

/// Environment variable read by [`crate::logging::init`]
pub const LOG_ENV_VAR: &str = "BOXLOG_LOG";
