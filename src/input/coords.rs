//! Coordinate conversion between column pixels and times of day.
//!
//! This module centralizes the time mapper and the selection calculator so
//! every handler snaps and normalizes the same way. All functions are pure
//! and never panic: out-of-range input is clamped.

use crate::constants::{HOURS_PER_DAY, LAST_MINUTE_OF_DAY, MIN_SELECTION_MINUTES};
use crate::types::{TimePoint, TimeRange};

/// Map a vertical offset inside a day column to a snapped time of day.
///
/// `y` is measured from the top of the column and `hour_height` is pixels
/// per hour. Offsets past the end of the day clamp to the last slot
/// (23:45 on a 15-minute grid); negative or NaN offsets, and a
/// non-positive `hour_height`, clamp to midnight.
pub fn pixels_to_time(y: f32, hour_height: f32, snap_minutes: u32) -> TimePoint {
    let snap = snap_minutes.clamp(1, 60);

    if y.is_nan() || !hour_height.is_finite() || hour_height <= 0.0 || y <= 0.0 {
        return TimePoint::MIDNIGHT;
    }

    let total_minutes = f64::from(y) / f64::from(hour_height) * 60.0;
    let hour = (total_minutes / 60.0).floor();

    if hour >= f64::from(HOURS_PER_DAY) {
        return last_slot(snap);
    }

    let minute = ((total_minutes % 60.0) / f64::from(snap)).floor() as u32 * snap;
    TimePoint::from_minutes(hour as u32 * 60 + minute.min(59))
}

/// Start of the last grid slot of the day.
#[inline]
pub fn last_slot(snap_minutes: u32) -> TimePoint {
    let snap = snap_minutes.clamp(1, 60);
    TimePoint::from_minutes(HOURS_PER_DAY * 60 - snap)
}

/// Project a time of day back onto the column, in pixels from the top.
#[inline]
pub fn time_to_pixels(time: TimePoint, hour_height: f32) -> f32 {
    time.minutes_since_midnight() as f32 / 60.0 * hour_height
}

/// Normalize an anchor and the current pointer time into a range.
///
/// The earlier point becomes the start, so dragging up from the anchor works
/// the same as dragging down. A range that would be empty is widened to the
/// 15-minute minimum, rolling over the hour, and finally clamped to 23:59.
pub fn calculate_selection(anchor: TimePoint, current: TimePoint) -> TimeRange {
    calculate_selection_with_min(anchor, current, MIN_SELECTION_MINUTES)
}

/// [`calculate_selection`] with a configurable minimum span.
pub fn calculate_selection_with_min(
    anchor: TimePoint,
    current: TimePoint,
    min_minutes: u32,
) -> TimeRange {
    let (start, end) = if anchor <= current {
        (anchor, current)
    } else {
        (current, anchor)
    };

    let start_minutes = start.minutes_since_midnight();
    let mut end_minutes = end.minutes_since_midnight();
    if end_minutes <= start_minutes {
        end_minutes = start_minutes.saturating_add(min_minutes);
    }

    TimeRange::between(
        TimePoint::from_minutes(start_minutes),
        TimePoint::from_minutes(end_minutes.min(LAST_MINUTE_OF_DAY)),
    )
}

/// Range of `duration_minutes` starting at `start`, clamped to 23:59.
///
/// Used for click, tap and double-click creation, which use the configured
/// default duration rather than the drag minimum.
pub fn range_with_duration(start: TimePoint, duration_minutes: u32) -> TimeRange {
    let start_minutes = start.minutes_since_midnight();
    let end_minutes = start_minutes
        .saturating_add(duration_minutes.max(1))
        .min(LAST_MINUTE_OF_DAY);
    TimeRange::between(start, TimePoint::from_minutes(end_minutes))
}

/// `HH:MM` label for the time under the pointer.
pub fn format_drop_time(time: TimePoint) -> String {
    time.to_string()
}

/// Vertical placement of a range inside the column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewGeometry {
    pub top: f32,
    pub height: f32,
}

impl PreviewGeometry {
    pub fn for_range(range: &TimeRange, hour_height: f32) -> Self {
        let top = time_to_pixels(range.start(), hour_height);
        let bottom = time_to_pixels(range.end(), hour_height);
        Self {
            top,
            height: (bottom - top).max(0.0),
        }
    }
}
