//! Touch gestures: taps, long-press drags and scrolls.

use crate::helpers::{CountingHaptics, TestColumnBuilder, assert_released, at, ms, range, t, t0};
use boxlog_calendar::settings::SelectionSettings;
use boxlog_calendar::{CancelReason, SessionOutcome};

#[test]
fn test_tap_commits_default_duration() {
    let (mut column, recorded) = TestColumnBuilder::new().with_default_duration(30).build();
    let start = t0();

    assert!(column.touch_start(at(200.0), start));
    assert!(column.session().is_idle());
    assert!(!column.touch_move(at(203.0), start + ms(80)));

    let outcome = column.touch_end(at(203.0), start + ms(150)).unwrap();
    assert!(outcome.is_committed());
    assert_eq!(recorded.selected()[0].range(), range(3, 15, 3, 45));
    assert_released(&column);
}

#[test]
fn test_long_press_then_drag() {
    let haptics = CountingHaptics::default();
    let (mut column, recorded) = TestColumnBuilder::new().with_haptics(haptics.clone()).build();
    let start = t0();

    column.touch_start(at(120.0), start);
    assert_eq!(column.next_deadline(), Some(start + ms(300)));

    assert!(!column.poll_timers(start + ms(299)));
    assert!(column.poll_timers(start + ms(300)));
    assert!(column.session().is_long_press_armed());
    assert_eq!(column.session().anchor(), Some(t(2, 0)));
    assert!(!column.has_pending_timer());
    assert_eq!(haptics.long_presses.get(), 1);

    assert!(column.touch_move(at(240.0), start + ms(350)));
    assert!(column.session().is_previewing());
    assert!(haptics.ticks.get() >= 1);

    column.touch_end(at(240.0), start + ms(400));
    assert_eq!(recorded.selected()[0].range(), range(2, 0, 4, 0));
    assert_released(&column);
}

#[test]
fn test_selection_tick_on_each_range_change() {
    let haptics = CountingHaptics::default();
    let (mut column, _recorded) = TestColumnBuilder::new().with_haptics(haptics.clone()).build();
    let start = t0();

    column.touch_start(at(120.0), start);
    column.poll_timers(start + ms(300));
    column.touch_move(at(180.0), start + ms(310));
    column.touch_move(at(181.0), start + ms(320));
    column.touch_move(at(240.0), start + ms(330));

    assert_eq!(haptics.ticks.get(), 2);
}

#[test]
fn test_move_after_deadline_arms_before_tracking() {
    let (mut column, recorded) = TestColumnBuilder::new().build();
    let start = t0();

    column.touch_start(at(120.0), start);
    // No timer callback from the host; the late move fires the timer first
    assert!(column.touch_move(at(300.0), start + ms(500)));
    assert!(column.session().is_previewing());

    column.touch_end(at(300.0), start + ms(600));
    assert_eq!(recorded.selected()[0].range(), range(2, 0, 5, 0));
}

#[test]
fn test_long_press_without_drag_selects_default_duration() {
    let (mut column, recorded) = TestColumnBuilder::new().with_default_duration(30).build();
    let start = t0();

    column.touch_start(at(120.0), start);
    assert!(column.touch_move(at(122.0), start + ms(310)));
    assert!(column.session().is_long_press_armed());

    column.touch_end(at(122.0), start + ms(800));
    assert_eq!(recorded.selected()[0].range(), range(2, 0, 2, 30));
}

#[test]
fn test_fast_swipe_never_anchors() {
    // 15px within 100ms is a scroll
    let (mut column, recorded) = TestColumnBuilder::new().build();
    let start = t0();

    column.touch_start(at(120.0), start);
    assert!(!column.touch_move(at(135.0), start + ms(100)));

    assert_eq!(
        column.last_outcome(),
        Some(SessionOutcome::Cancelled(CancelReason::TouchMoved))
    );
    assert_released(&column);
    assert!(!column.poll_timers(start + ms(400)));
    assert!(column.session().is_idle());
    assert!(column.touch_end(at(135.0), start + ms(450)).is_none());
    assert!(recorded.selected().is_empty());
}

#[test]
fn test_slow_still_touch_is_not_a_tap() {
    let (mut column, recorded) = TestColumnBuilder::new().build();
    let start = t0();

    column.touch_start(at(120.0), start);
    let outcome = column.touch_end(at(120.0), start + ms(250)).unwrap();

    assert_eq!(outcome, SessionOutcome::Cancelled(CancelReason::Abandoned));
    assert!(recorded.selected().is_empty());
    assert_released(&column);
}

#[test]
fn test_custom_long_press_duration() {
    let settings = SelectionSettings {
        long_press_ms: 500,
        ..Default::default()
    };
    let (mut column, _recorded) = TestColumnBuilder::new().with_settings(settings).build();
    let start = t0();

    column.touch_start(at(120.0), start);
    assert!(!column.poll_timers(start + ms(400)));
    assert!(column.poll_timers(start + ms(500)));
}

#[test]
fn test_haptics_can_be_disabled() {
    let haptics = CountingHaptics::default();
    let settings = SelectionSettings {
        haptics: false,
        ..Default::default()
    };
    let (mut column, _recorded) = TestColumnBuilder::new()
        .with_settings(settings)
        .with_haptics(haptics.clone())
        .build();
    let start = t0();

    column.touch_start(at(120.0), start);
    column.poll_timers(start + ms(300));
    column.touch_move(at(240.0), start + ms(350));

    assert_eq!(haptics.long_presses.get(), 0);
    assert_eq!(haptics.ticks.get(), 0);
}

#[test]
fn test_second_touch_is_ignored() {
    let (mut column, _recorded) = TestColumnBuilder::new().build();
    let start = t0();

    assert!(column.touch_start(at(120.0), start));
    assert!(!column.touch_start(at(400.0), start + ms(10)));
}

#[test]
fn test_mouse_moves_do_not_drive_touch_sessions() {
    let (mut column, _recorded) = TestColumnBuilder::new().build();
    let start = t0();

    column.touch_start(at(120.0), start);
    column.poll_timers(start + ms(300));
    assert!(!column.pointer_move(at(240.0)));
    assert!(column.pointer_up(at(240.0)).is_none());
    assert!(column.session().is_long_press_armed());
}

#[test]
fn test_long_press_with_overlap_is_rejected() {
    let (mut column, recorded) = TestColumnBuilder::new().with_overlap(true).build();
    let start = t0();

    column.touch_start(at(120.0), start);
    column.poll_timers(start + ms(300));
    column.touch_move(at(240.0), start + ms(350));
    let outcome = column.touch_end(at(240.0), start + ms(400)).unwrap();

    assert_eq!(outcome, SessionOutcome::Rejected(range(2, 0, 4, 0)));
    assert!(recorded.selected().is_empty());
    assert_released(&column);
}
