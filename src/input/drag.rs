//! Move handling - drag promotion, preview updates, long-press timers.
//!
//! ## Performance Notes
//!
//! Move events arrive for every pointer sample while a gesture is active and
//! none are coalesced: the preview always reflects the latest event. Each
//! move does one time mapping, one range normalization and one overlap check.

use crate::column::DayColumn;
use crate::constants::MOVE_HANDLER_BUDGET_MS;
use crate::input::coords::calculate_selection_with_min;
use crate::input::{CancelReason, SessionOutcome, SessionState, TouchProgress};
use crate::profile_scope;
use crate::types::{ColumnPoint, InputModality};
use std::time::Instant;

impl DayColumn {
    /// Global mouse move. Returns true if the preview changed.
    pub fn pointer_move(&mut self, position: ColumnPoint) -> bool {
        profile_scope!("pointer_move", MOVE_HANDLER_BUDGET_MS);

        if self.disabled || self.listener_guard.is_none() {
            return false;
        }
        if self.session.modality() != Some(InputModality::Mouse) {
            return false;
        }
        self.track(position)
    }

    /// Global touch move.
    ///
    /// Returns true once the touch has been captured for selection; the host
    /// should then prevent default scrolling for this touch.
    pub fn touch_move(&mut self, position: ColumnPoint, now: Instant) -> bool {
        profile_scope!("touch_move", MOVE_HANDLER_BUDGET_MS);

        if self.disabled || self.listener_guard.is_none() {
            return false;
        }
        self.poll_timers(now);

        let thresholds = self.thresholds;
        let Some(touch) = self.touch.as_mut() else {
            return false;
        };

        match touch.moved(position, &thresholds) {
            TouchProgress::Pending => false,
            TouchProgress::Abandoned => {
                self.finish(SessionOutcome::Cancelled(CancelReason::TouchMoved));
                false
            }
            TouchProgress::Armed | TouchProgress::Tracking => {
                self.track(position);
                true
            }
        }
    }

    /// Fire a due long-press timer. Returns true if a long press armed.
    ///
    /// Hosts call this at [`DayColumn::next_deadline`]; touch move and end
    /// handlers also call it so a late timer callback cannot reorder events.
    pub fn poll_timers(&mut self, now: Instant) -> bool {
        if self.disabled || !self.session.is_idle() {
            return false;
        }
        let Some(touch) = self.touch.as_mut() else {
            return false;
        };
        if touch.fire_due(now) != TouchProgress::Armed {
            return false;
        }

        let origin = touch.origin();
        let anchor = self.time_at(origin.y);
        self.session.arm_long_press(anchor, origin);
        self.emit_haptic_long_press();
        tracing::debug!(column = self.id.raw(), %anchor, "Long press armed");
        true
    }

    /// Advance an anchored or previewing session to `position`.
    pub(crate) fn track(&mut self, position: ColumnPoint) -> bool {
        let current = self.time_at(position.y);

        if let (Some(origin), Some(modality)) = (self.session.origin(), self.session.modality()) {
            let Some(gesture) = self.thresholds.classify_promotion(origin, position, modality) else {
                return false;
            };
            tracing::trace!(column = self.id.raw(), ?gesture, "Press promoted");
        }
        let Some(anchor) = self.session.anchor() else {
            return false;
        };

        let range = calculate_selection_with_min(anchor, current, self.settings.min_selection_minutes);
        let invalid = self.overlap.overlaps(self.date, &range);

        let changed = match self.session {
            SessionState::Anchoring { .. } | SessionState::LongPressArmed { .. } => {
                self.session.start_previewing(current, range, invalid);
                tracing::debug!(column = self.id.raw(), %range, "Drag preview started");
                true
            }
            SessionState::Previewing { .. } => self.session.update_preview(current, range, invalid),
            SessionState::Idle => false,
        };

        if changed {
            tracing::trace!(column = self.id.raw(), %range, invalid, "Preview updated");
            self.emit_haptic_tick();
        }
        changed
    }
}
