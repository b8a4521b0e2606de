//! Core types for the day column selection system.
//!
//! This module defines the values that flow between the time mapper, the
//! selection session and the calendar view: time points, time ranges, the
//! committed [`DateTimeSelection`] payload, and the existing plans consulted
//! by overlap checks.

use crate::constants::LAST_MINUTE_OF_DAY;
use crate::error::SelectionError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Time Points
// ============================================================================

/// An (hour, minute) pair on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct TimePoint {
    pub hour: u8,
    pub minute: u8,
}

impl TimePoint {
    pub const MIDNIGHT: TimePoint = TimePoint { hour: 0, minute: 0 };

    /// Create a time point, clamping hour to 0..=23 and minute to 0..=59.
    pub fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour: hour.min(23),
            minute: minute.min(59),
        }
    }

    /// Build a time point from minutes since midnight, clamped to 23:59.
    pub fn from_minutes(minutes: u32) -> Self {
        let minutes = minutes.min(LAST_MINUTE_OF_DAY);
        Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        }
    }

    #[inline]
    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

// ============================================================================
// Time Ranges
// ============================================================================

/// A normalized span of time on one day.
///
/// Hours stay in 0..=23, minutes in 0..=59 and the start never lies after
/// the end. Ranges are produced by [`crate::input::coords::calculate_selection`]
/// and [`crate::input::coords::range_with_duration`]; they are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub start_hour: u8,
    pub start_minute: u8,
    pub end_hour: u8,
    pub end_minute: u8,
}

impl TimeRange {
    /// Build a range from two points, swapping them if needed.
    pub fn between(a: TimePoint, b: TimePoint) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Self {
            start_hour: start.hour,
            start_minute: start.minute,
            end_hour: end.hour,
            end_minute: end.minute,
        }
    }

    pub fn start(&self) -> TimePoint {
        TimePoint::new(self.start_hour, self.start_minute)
    }

    pub fn end(&self) -> TimePoint {
        TimePoint::new(self.end_hour, self.end_minute)
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end()
            .minutes_since_midnight()
            .saturating_sub(self.start().minutes_since_midnight())
    }

    /// Half-open intersection test: ranges that only touch do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        let (a0, a1) = (self.start().minutes_since_midnight(), self.end().minutes_since_midnight());
        let (b0, b1) = (other.start().minutes_since_midnight(), other.end().minutes_since_midnight());
        a0 < b1 && b0 < a1
    }

    pub fn contains(&self, point: TimePoint) -> bool {
        point >= self.start() && point < self.end()
    }

    fn is_valid(&self) -> bool {
        self.start_hour <= 23
            && self.end_hour <= 23
            && self.start_minute <= 59
            && self.end_minute <= 59
            && self.start() <= self.end()
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start(), self.end())
    }
}

// ============================================================================
// Selection Payload
// ============================================================================

/// A committed selection handed to the calendar view.
///
/// Immutable once built. Deserialization validates the range so a payload
/// received from elsewhere (for example an external selection signal) upholds
/// the same invariants as one produced by a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSelection")]
pub struct DateTimeSelection {
    date: NaiveDate,
    start_hour: u8,
    start_minute: u8,
    end_hour: u8,
    end_minute: u8,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSelection {
    date: NaiveDate,
    start_hour: u8,
    start_minute: u8,
    end_hour: u8,
    end_minute: u8,
}

impl TryFrom<RawSelection> for DateTimeSelection {
    type Error = SelectionError;

    fn try_from(raw: RawSelection) -> Result<Self, Self::Error> {
        let range = TimeRange {
            start_hour: raw.start_hour,
            start_minute: raw.start_minute,
            end_hour: raw.end_hour,
            end_minute: raw.end_minute,
        };
        Self::try_new(raw.date, range)
    }
}

impl DateTimeSelection {
    pub fn new(date: NaiveDate, range: TimeRange) -> Self {
        Self {
            date,
            start_hour: range.start_hour,
            start_minute: range.start_minute,
            end_hour: range.end_hour,
            end_minute: range.end_minute,
        }
    }

    /// Build a selection from an unchecked range.
    pub fn try_new(date: NaiveDate, range: TimeRange) -> Result<Self, SelectionError> {
        if !range.is_valid() {
            return Err(SelectionError::InvalidRange(range));
        }
        Ok(Self::new(date, range))
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    pub fn start_minute(&self) -> u8 {
        self.start_minute
    }

    pub fn end_hour(&self) -> u8 {
        self.end_hour
    }

    pub fn end_minute(&self) -> u8 {
        self.end_minute
    }

    pub fn range(&self) -> TimeRange {
        TimeRange {
            start_hour: self.start_hour,
            start_minute: self.start_minute,
            end_hour: self.end_hour,
            end_minute: self.end_minute,
        }
    }
}

// ============================================================================
// Calendar Items
// ============================================================================

/// An existing plan rendered in the calendar, consulted by overlap checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarPlan {
    pub id: u64,
    pub title: String,
    pub date: NaiveDate,
    pub range: TimeRange,
}

impl CalendarPlan {
    pub fn new(id: u64, title: impl Into<String>, date: NaiveDate, range: TimeRange) -> Self {
        Self {
            id,
            title: title.into(),
            date,
            range,
        }
    }
}

// ============================================================================
// Gesture Vocabulary
// ============================================================================

/// Input device that started a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputModality {
    Mouse,
    Touch,
}

/// Transient judgment of what kind of interaction a gesture is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GestureClassification {
    Tap,
    DoubleClick,
    Drag,
    LongPressDrag,
}

/// A position inside a day column, in column-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColumnPoint {
    pub x: f32,
    pub y: f32,
}

impl ColumnPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_to(&self, other: ColumnPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
