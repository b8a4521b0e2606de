//! Gesture classification - tap, double-click, drag and long-press-drag.
//!
//! Mouse input starts a candidate selection immediately and only needs the
//! drag distance check. Touch input has to wait for a long press so that
//! ordinary scrolling is not hijacked, which is what [`TouchTracker`] models.
//!
//! Time is passed in on every call rather than read from a clock, so the
//! same sequence of events always classifies the same way.

use crate::constants::{
    DOUBLE_CLICK_COUNT, LONG_PRESS_DURATION_MS, LONG_PRESS_MOVE_THRESHOLD, MIN_DRAG_DISTANCE,
    SINGLE_TAP_MAX_DURATION_MS,
};
use crate::types::{ColumnPoint, GestureClassification, InputModality};
use std::time::{Duration, Instant};

/// Timing and distance thresholds for gesture classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureThresholds {
    pub long_press: Duration,
    pub long_press_move_threshold: f32,
    pub single_tap_max: Duration,
    pub min_drag_distance: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            long_press: Duration::from_millis(LONG_PRESS_DURATION_MS),
            long_press_move_threshold: LONG_PRESS_MOVE_THRESHOLD,
            single_tap_max: Duration::from_millis(SINGLE_TAP_MAX_DURATION_MS),
            min_drag_distance: MIN_DRAG_DISTANCE,
        }
    }
}

impl GestureThresholds {
    /// True once the pointer has travelled far enough to show a preview.
    #[inline]
    pub fn exceeds_drag_distance(&self, anchor: ColumnPoint, current: ColumnPoint) -> bool {
        anchor.distance_to(current) > self.min_drag_distance
    }

    /// Classify an anchored press that moved to `current`.
    ///
    /// Returns `Drag` for a mouse press, or `LongPressDrag` for an armed
    /// touch, once the pointer passes the drag distance; `None` before that.
    pub fn classify_promotion(
        &self,
        origin: ColumnPoint,
        current: ColumnPoint,
        modality: InputModality,
    ) -> Option<GestureClassification> {
        if !self.exceeds_drag_distance(origin, current) {
            return None;
        }
        Some(match modality {
            InputModality::Mouse => GestureClassification::Drag,
            InputModality::Touch => GestureClassification::LongPressDrag,
        })
    }

    /// Classify a mouse press by the click count the host reports.
    pub fn classify_press(&self, click_count: u8) -> Option<GestureClassification> {
        (click_count >= DOUBLE_CLICK_COUNT).then_some(GestureClassification::DoubleClick)
    }
}

/// Pending long-press deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongPressTimer {
    pub deadline: Instant,
}

/// What happened to a touch after a move or a timer check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchProgress {
    /// Still waiting for the long press
    Pending,
    /// Long press armed; the touch now behaves like a mouse drag anchor
    Armed,
    /// Moved too far before arming; the touch is left to the scroller
    Abandoned,
    /// Already armed, normal drag tracking applies
    Tracking,
}

/// State of one touch from touch-start to touch-end.
#[derive(Debug, Clone)]
pub struct TouchTracker {
    origin: ColumnPoint,
    started_at: Instant,
    max_movement: f32,
    timer: Option<LongPressTimer>,
    armed: bool,
    abandoned: bool,
}

impl TouchTracker {
    /// Start tracking a touch and arm the long-press timer.
    pub fn start(origin: ColumnPoint, now: Instant, thresholds: &GestureThresholds) -> Self {
        Self {
            origin,
            started_at: now,
            max_movement: 0.0,
            timer: Some(LongPressTimer {
                deadline: now + thresholds.long_press,
            }),
            armed: false,
            abandoned: false,
        }
    }

    pub fn origin(&self) -> ColumnPoint {
        self.origin
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn timer(&self) -> Option<LongPressTimer> {
        self.timer
    }

    pub fn max_movement(&self) -> f32 {
        self.max_movement
    }

    /// Record a move. Excess movement before the timer fires cancels it.
    pub fn moved(&mut self, position: ColumnPoint, thresholds: &GestureThresholds) -> TouchProgress {
        self.max_movement = self.max_movement.max(self.origin.distance_to(position));

        if self.armed {
            return TouchProgress::Tracking;
        }
        if self.abandoned {
            return TouchProgress::Abandoned;
        }
        if self.max_movement > thresholds.long_press_move_threshold {
            self.timer = None;
            self.abandoned = true;
            return TouchProgress::Abandoned;
        }
        TouchProgress::Pending
    }

    /// Arm the long press if its deadline has passed.
    pub fn fire_due(&mut self, now: Instant) -> TouchProgress {
        match self.timer {
            Some(timer) if now >= timer.deadline => {
                self.timer = None;
                self.armed = true;
                TouchProgress::Armed
            }
            Some(_) => TouchProgress::Pending,
            None if self.armed => TouchProgress::Tracking,
            None => TouchProgress::Abandoned,
        }
    }

    /// Classify the touch at release time.
    ///
    /// Returns `Tap` for a short, still touch that never armed a long press,
    /// `LongPressDrag` for an armed touch, and `None` for anything else
    /// (typically a scroll).
    pub fn classify_release(
        &self,
        now: Instant,
        thresholds: &GestureThresholds,
    ) -> Option<GestureClassification> {
        if self.armed {
            return Some(GestureClassification::LongPressDrag);
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let still = self.max_movement <= thresholds.long_press_move_threshold;
        (elapsed <= thresholds.single_tap_max && still).then_some(GestureClassification::Tap)
    }

    /// Drop the pending timer.
    pub fn cancel_timer(&mut self) {
        self.timer = None;
    }
}
