//! Release handling - commit, reject or cancel the session.

use crate::column::DayColumn;
use crate::input::{CancelReason, SessionOutcome, SessionState};
use crate::types::{ColumnPoint, DateTimeSelection, GestureClassification, InputModality};
use std::time::Instant;

impl DayColumn {
    /// Global mouse up. Returns the outcome if a mouse session ended.
    ///
    /// The committed range is the one last shown by the preview; the release
    /// position itself does not move it.
    pub fn pointer_up(&mut self, _position: ColumnPoint) -> Option<SessionOutcome> {
        if self.disabled || self.listener_guard.is_none() {
            return None;
        }
        if self.session.modality() != Some(InputModality::Mouse) {
            return None;
        }
        Some(self.release())
    }

    /// Global touch end. Returns the outcome if a touch gesture ended.
    pub fn touch_end(&mut self, _position: ColumnPoint, now: Instant) -> Option<SessionOutcome> {
        if self.disabled || self.listener_guard.is_none() {
            return None;
        }
        self.poll_timers(now);

        if !self.session.is_idle() {
            return Some(self.release());
        }

        let touch = self.touch.as_ref()?;
        match touch.classify_release(now, &self.thresholds) {
            Some(GestureClassification::Tap) => {
                let anchor = self.time_at(touch.origin().y);
                tracing::debug!(column = self.id.raw(), %anchor, "Tap");
                let selection = self.point_selection(anchor);
                Some(self.commit(selection))
            }
            _ => Some(self.finish(SessionOutcome::Cancelled(CancelReason::Abandoned))),
        }
    }

    /// End an anchored or previewing session.
    fn release(&mut self) -> SessionOutcome {
        match self.session {
            SessionState::Idle => self.finish(SessionOutcome::Cancelled(CancelReason::Abandoned)),
            SessionState::Anchoring { anchor, .. } | SessionState::LongPressArmed { anchor, .. } => {
                let selection = self.point_selection(anchor);
                self.commit(selection)
            }
            SessionState::Previewing { range, .. } => {
                if self.overlap.overlaps(self.date, &range) {
                    return self.finish(SessionOutcome::Rejected(range));
                }
                let selection = DateTimeSelection::new(self.date, range);
                self.commit(selection)
            }
        }
    }
}
