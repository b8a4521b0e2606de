//! Press handling - mouse down, double-click, touch start.
//!
//! Presses are column-level events: the host delivers them to whichever
//! column is under the pointer. A press over a plan card or event block is
//! left to that block. A press that starts a gesture acquires the global
//! listener set so the rest of the gesture reaches this column.

use crate::column::DayColumn;
use crate::input::{CancelReason, TouchTracker};
use crate::profile_scope;
use crate::types::{ColumnPoint, DateTimeSelection, GestureClassification, InputModality};
use std::time::Instant;

impl DayColumn {
    /// Mouse down inside the column.
    ///
    /// `click_count` is the host's click counter; a value of two or more is
    /// treated as a double-click. Returns true if the column took the press.
    pub fn pointer_down(&mut self, position: ColumnPoint, click_count: u8) -> bool {
        profile_scope!("pointer_down");

        if self.disabled {
            return false;
        }
        if let Some(hit) = self.block_at(position) {
            tracing::trace!(block = hit.block_id, kind = ?hit.kind, "Press on block, deferring");
            return false;
        }

        if self.thresholds.classify_press(click_count) == Some(GestureClassification::DoubleClick) {
            return self.double_click(position).is_some();
        }

        if !self.session.is_idle() || !self.begin_gesture() {
            return false;
        }

        let anchor = self.time_at(position.y);
        self.session.start_anchoring(anchor, position, InputModality::Mouse);
        tracing::debug!(column = self.id.raw(), %anchor, "Mouse press anchored");
        true
    }

    /// Double-click inside the column.
    ///
    /// Creates a default-duration selection at the point and hands it to the
    /// double-click handler, bypassing the drag path. Any in-flight gesture
    /// is cancelled first.
    pub fn double_click(&mut self, position: ColumnPoint) -> Option<DateTimeSelection> {
        if self.disabled || self.on_double_click.is_none() || self.block_at(position).is_some() {
            return None;
        }
        self.cancel(CancelReason::Superseded);

        let selection = self.point_selection(self.time_at(position.y));
        if let Some(callback) = self.on_double_click.as_mut() {
            callback(&selection);
        }
        tracing::debug!(column = self.id.raw(), range = %selection.range(), "Double-click selection");
        Some(selection)
    }

    /// Touch start inside the column.
    ///
    /// Arms the long-press timer; the session stays idle until the timer
    /// fires. Returns true if the column started tracking the touch. The
    /// host should not prevent default scrolling at this point.
    pub fn touch_start(&mut self, position: ColumnPoint, now: Instant) -> bool {
        profile_scope!("touch_start");

        if self.disabled || self.block_at(position).is_some() {
            return false;
        }
        if !self.session.is_idle() || self.touch.is_some() || !self.begin_gesture() {
            return false;
        }

        self.touch = Some(TouchTracker::start(position, now, &self.thresholds));
        tracing::trace!(column = self.id.raw(), y = position.y, "Touch tracking started");
        true
    }
}
