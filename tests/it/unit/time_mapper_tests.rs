//! Unit tests for the time mapper and selection calculator.

use crate::helpers::{range, t};
use boxlog_calendar::input::coords::{
    calculate_selection, calculate_selection_with_min, format_drop_time, last_slot,
    pixels_to_time, range_with_duration, time_to_pixels,
};

#[test]
fn test_pixels_to_time_hour_boundaries() {
    assert_eq!(pixels_to_time(60.0, 60.0, 15), t(1, 0));
    assert_eq!(pixels_to_time(120.0, 60.0, 15), t(2, 0));
    assert_eq!(pixels_to_time(180.0, 60.0, 15), t(3, 0));
}

#[test]
fn test_pixels_to_time_respects_hour_height() {
    // 72px per hour: 18px per quarter hour
    assert_eq!(pixels_to_time(18.0, 72.0, 15), t(0, 15));
    assert_eq!(pixels_to_time(35.9, 72.0, 15), t(0, 15));
    assert_eq!(pixels_to_time(36.0, 72.0, 15), t(0, 30));
    assert_eq!(pixels_to_time(9.0 * 72.0 + 54.0, 72.0, 15), t(9, 45));
}

#[test]
fn test_pixels_to_time_other_grids() {
    assert_eq!(pixels_to_time(50.0, 60.0, 30), t(0, 30));
    assert_eq!(pixels_to_time(50.0, 60.0, 5), t(0, 50));
    assert_eq!(pixels_to_time(10_000.0, 60.0, 30), t(23, 30));
}

#[test]
fn test_pixels_to_time_clamps_out_of_range() {
    assert_eq!(pixels_to_time(-1.0, 60.0, 15), t(0, 0));
    assert_eq!(pixels_to_time(1440.0, 60.0, 15), t(23, 45));
    assert_eq!(pixels_to_time(f32::INFINITY, 60.0, 15), t(23, 45));
    assert_eq!(pixels_to_time(100.0, -60.0, 15), t(0, 0));
}

#[test]
fn test_last_slot() {
    assert_eq!(last_slot(15), t(23, 45));
    assert_eq!(last_slot(60), t(23, 0));
}

#[test]
fn test_time_to_pixels_inverts_snapped_times() {
    for y in [0.0_f32, 15.0, 120.0, 735.0] {
        let time = pixels_to_time(y, 60.0, 15);
        assert_eq!(pixels_to_time(time_to_pixels(time, 60.0), 60.0, 15), time);
    }
}

#[test]
fn test_calculate_selection_downward_drag() {
    assert_eq!(calculate_selection(t(2, 0), t(3, 0)), range(2, 0, 3, 0));
}

#[test]
fn test_calculate_selection_upward_drag() {
    assert_eq!(calculate_selection(t(3, 0), t(2, 0)), range(2, 0, 3, 0));
}

#[test]
fn test_calculate_selection_same_point_gets_minimum() {
    let selected = calculate_selection(t(14, 30), t(14, 30));
    assert_eq!(selected, range(14, 30, 14, 45));
    assert_eq!(selected.duration_minutes(), 15);
}

#[test]
fn test_calculate_selection_custom_minimum() {
    assert_eq!(calculate_selection_with_min(t(8, 50), t(8, 50), 30), range(8, 50, 9, 20));
}

#[test]
fn test_range_with_duration_uses_default_not_minimum() {
    assert_eq!(range_with_duration(t(0, 45), 30), range(0, 45, 1, 15));
    assert_eq!(range_with_duration(t(10, 0), 60), range(10, 0, 11, 0));
}

#[test]
fn test_format_drop_time() {
    assert_eq!(format_drop_time(t(7, 5)), "07:05");
    assert_eq!(format_drop_time(t(23, 45)), "23:45");
}

#[test]
fn test_oversized_spans_saturate() {
    assert_eq!(calculate_selection_with_min(t(22, 0), t(22, 0), u32::MAX), range(22, 0, 23, 59));
    assert_eq!(range_with_duration(t(23, 45), u32::MAX), range(23, 45, 23, 59));
}
