//! Selection session state machine.
//!
//! One day column owns at most one session. The session replaces separate
//! "is dragging", "anchor" and "show preview" flags with a single enum, so a
//! preview without an anchor cannot be represented.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Anchoring            (mouse down on empty column)
//! Idle -> LongPressArmed       (touch held past the long-press duration)
//! Anchoring -> Previewing      (moved beyond the drag distance)
//! LongPressArmed -> Previewing (moved beyond the drag distance)
//!
//! Anchoring/LongPressArmed -> Idle  (release: commit with default duration)
//! Previewing -> Idle                (release: commit, or reject on overlap)
//! Any -> Idle                       (escape, disabled, external cancel)
//! ```
//!
//! Every transition back to `Idle` reports a [`SessionOutcome`].

use crate::types::{ColumnPoint, DateTimeSelection, InputModality, TimePoint, TimeRange};

/// Lifecycle of one selection attempt.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// No active gesture
    #[default]
    Idle,

    /// Pointer down, anchor recorded, not yet a drag
    Anchoring {
        /// Snapped time under the press
        anchor: TimePoint,
        /// Press position, for drag distance checks
        origin: ColumnPoint,
        modality: InputModality,
    },

    /// Touch held past the long-press duration; touch equivalent of `Anchoring`
    LongPressArmed {
        anchor: TimePoint,
        origin: ColumnPoint,
    },

    /// Confirmed drag with a visible, still mutable range
    Previewing {
        anchor: TimePoint,
        /// Snapped time under the pointer
        current: TimePoint,
        range: TimeRange,
        modality: InputModality,
        /// The overlap policy currently rejects `range`
        invalid: bool,
    },
}

/// Why a session ended without a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancelReason {
    EscapeKey,
    Disabled,
    /// A `DragCancel` signal arrived from another component
    ExternalCancel,
    /// A touch moved too far before its long press armed
    TouchMoved,
    /// A touch ended that was neither a tap nor a long press
    Abandoned,
    /// Released with no select handler installed
    NoHandler,
    /// Replaced by a double-click or a date change
    Superseded,
    /// The column was dropped mid-gesture
    Unmounted,
}

/// Terminal result of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Committed(DateTimeSelection),
    Cancelled(CancelReason),
    /// The overlap policy vetoed the range
    Rejected(TimeRange),
}

impl SessionOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    pub fn cancel_reason(&self) -> Option<CancelReason> {
        match self {
            Self::Cancelled(reason) => Some(*reason),
            _ => None,
        }
    }
}

impl SessionState {
    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_anchoring(&self) -> bool {
        matches!(self, Self::Anchoring { .. } | Self::LongPressArmed { .. })
    }

    pub fn is_long_press_armed(&self) -> bool {
        matches!(self, Self::LongPressArmed { .. })
    }

    pub fn is_previewing(&self) -> bool {
        matches!(self, Self::Previewing { .. })
    }

    /// The anchor time, in any non-idle state
    pub fn anchor(&self) -> Option<TimePoint> {
        match self {
            Self::Idle => None,
            Self::Anchoring { anchor, .. }
            | Self::LongPressArmed { anchor, .. }
            | Self::Previewing { anchor, .. } => Some(*anchor),
        }
    }

    /// Press position, if the gesture has not yet become a drag
    pub fn origin(&self) -> Option<ColumnPoint> {
        match self {
            Self::Anchoring { origin, .. } | Self::LongPressArmed { origin, .. } => Some(*origin),
            _ => None,
        }
    }

    pub fn modality(&self) -> Option<InputModality> {
        match self {
            Self::Idle => None,
            Self::Anchoring { modality, .. } | Self::Previewing { modality, .. } => Some(*modality),
            Self::LongPressArmed { .. } => Some(InputModality::Touch),
        }
    }

    /// The previewed range, if previewing
    pub fn range(&self) -> Option<TimeRange> {
        match self {
            Self::Previewing { range, .. } => Some(*range),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Previewing { invalid: true, .. })
    }

    /// Start anchoring a press
    pub fn start_anchoring(&mut self, anchor: TimePoint, origin: ColumnPoint, modality: InputModality) {
        *self = Self::Anchoring {
            anchor,
            origin,
            modality,
        };
    }

    /// Arm a touch long press
    pub fn arm_long_press(&mut self, anchor: TimePoint, origin: ColumnPoint) {
        *self = Self::LongPressArmed { anchor, origin };
    }

    /// Promote an anchored press into a visible drag
    pub fn start_previewing(&mut self, current: TimePoint, range: TimeRange, invalid: bool) {
        let (anchor, modality) = match self {
            Self::Anchoring { anchor, modality, .. } => (*anchor, *modality),
            Self::LongPressArmed { anchor, .. } => (*anchor, InputModality::Touch),
            _ => return,
        };
        *self = Self::Previewing {
            anchor,
            current,
            range,
            modality,
            invalid,
        };
    }

    /// Update the previewed range. Returns true if the range changed.
    pub fn update_preview(&mut self, new_current: TimePoint, new_range: TimeRange, new_invalid: bool) -> bool {
        if let Self::Previewing {
            current,
            range,
            invalid,
            ..
        } = self
        {
            let changed = *range != new_range;
            *current = new_current;
            *range = new_range;
            *invalid = new_invalid;
            changed
        } else {
            false
        }
    }

    /// Reset to Idle state
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
