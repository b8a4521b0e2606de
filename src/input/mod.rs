//! Pointer, touch and keyboard handling for day columns.
//!
//! Raw input is converted into one of four gestures (tap, double-click,
//! drag, long-press drag) and drives a [`SessionState`] from press to
//! commit or cancel.
//!
//! ## Architecture
//!
//! The selection lifecycle is an explicit state machine (`SessionState`).
//! Handlers are `impl DayColumn` blocks split by event phase, and every
//! terminal path goes through `DayColumn::finish`.
//!
//! ## Modules
//!
//! - `coords` - Time mapper and selection calculator
//! - `gesture` - Gesture thresholds and touch long-press tracking
//! - `state` - Session state machine enum and outcomes
//! - `mouse_down` - Press handling (mouse down, double-click, touch start)
//! - `drag` - Move handling (drag promotion, preview updates, timers)
//! - `mouse_up` - Release handling (commit, reject, cancel)

pub mod coords;
mod drag;
mod gesture;
mod mouse_down;
mod mouse_up;
mod state;

pub use gesture::{GestureThresholds, LongPressTimer, TouchProgress, TouchTracker};
pub use state::{CancelReason, SessionOutcome, SessionState};
