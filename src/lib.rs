//! Drag-to-select interaction core for BoxLog calendar day columns.
//!
//! Converts pointer, touch and keyboard input on a time grid into a
//! [`DateTimeSelection`], telling apart taps, double-clicks, drags and
//! long-press drags. The crate is headless: hosts forward input to a
//! [`DayColumn`] and draw what [`DayColumn::preview`] reports.
//!
//! ## Modules
//!
//! - `input` - Time mapping, gesture classification and the session state machine
//! - `column` - Host surface adapter for one day column
//! - `overlap` - Pluggable overlap policy
//! - `spatial_index` - Hit testing for plan cards and event blocks
//! - `listeners` - Scoped ownership of global listeners
//! - `signals` - Typed cross-component signals
//! - `settings` / `settings_watcher` - Configuration and hot reload

pub mod column;
pub mod constants;
pub mod error;
pub mod haptics;
pub mod input;
pub mod listeners;
pub mod logging;
pub mod overlap;
pub mod perf;
pub mod settings;
pub mod settings_watcher;
pub mod signals;
pub mod spatial_index;
pub mod types;

pub use column::{DayColumn, DayColumnBuilder, Key, SelectionCallback, SelectionPreview};
pub use error::{SelectionError, SettingsError, SettingsResult};
pub use input::{CancelReason, SessionOutcome, SessionState};
pub use overlap::{NoOverlapCheck, OverlapPolicy, PlanOverlap};
pub use signals::{CalendarSignal, SignalBus};
pub use types::{CalendarPlan, ColumnPoint, DateTimeSelection, TimePoint, TimeRange};
