//! Overlap policy - pluggable veto over previewed and committed ranges.
//!
//! The policy runs on every preview update to drive the "invalid" styling
//! and once more at release, where a positive answer turns the commit into
//! [`crate::input::SessionOutcome::Rejected`].

use crate::types::{CalendarPlan, TimeRange};
use chrono::NaiveDate;

/// Decides whether a range collides with existing calendar items.
pub trait OverlapPolicy {
    fn overlaps(&self, date: NaiveDate, range: &TimeRange) -> bool;
}

/// Default policy: never reports an overlap.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverlapCheck;

impl OverlapPolicy for NoOverlapCheck {
    fn overlaps(&self, _date: NaiveDate, _range: &TimeRange) -> bool {
        false
    }
}

/// Rejects ranges intersecting any plan on the same date.
#[derive(Debug, Clone, Default)]
pub struct PlanOverlap {
    plans: Vec<CalendarPlan>,
}

impl PlanOverlap {
    pub fn new(plans: Vec<CalendarPlan>) -> Self {
        Self { plans }
    }

    pub fn set_plans(&mut self, plans: Vec<CalendarPlan>) {
        self.plans = plans;
    }

    pub fn plans(&self) -> &[CalendarPlan] {
        &self.plans
    }

    /// First plan colliding with `range` on `date`.
    pub fn conflicting(&self, date: NaiveDate, range: &TimeRange) -> Option<&CalendarPlan> {
        self.plans
            .iter()
            .find(|plan| plan.date == date && plan.range.overlaps(range))
    }
}

impl OverlapPolicy for PlanOverlap {
    fn overlaps(&self, date: NaiveDate, range: &TimeRange) -> bool {
        self.conflicting(date, range).is_some()
    }
}

impl<F> OverlapPolicy for F
where
    F: Fn(NaiveDate, &TimeRange) -> bool,
{
    fn overlaps(&self, date: NaiveDate, range: &TimeRange) -> bool {
        self(date, range)
    }
}
