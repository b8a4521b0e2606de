//! Selections shown on behalf of other components.

use crate::helpers::{TestColumnBuilder, at, range, test_date};
use boxlog_calendar::{CalendarSignal, DateTimeSelection, SignalBus};

#[test]
fn test_show_selection_for_this_date() {
    let bus = SignalBus::new();
    let (mut column, recorded) = TestColumnBuilder::new().with_bus(&bus).build();

    let selection = DateTimeSelection::new(test_date(), range(10, 0, 11, 30));
    bus.publish(CalendarSignal::ShowSelection(selection));
    column.process_signals();

    let preview = column.preview().unwrap();
    assert!(preview.external);
    assert!(!preview.invalid);
    assert_eq!(preview.range, range(10, 0, 11, 30));
    assert_eq!(preview.geometry.top, 600.0);
    assert_eq!(preview.geometry.height, 90.0);

    // Showing never commits or starts a session
    assert!(column.session().is_idle());
    assert!(!column.has_global_listeners());
    assert!(recorded.selected().is_empty());
}

#[test]
fn test_show_selection_for_other_date() {
    let bus = SignalBus::new();
    let (mut today, _r1) = TestColumnBuilder::new().with_bus(&bus).build();
    let tomorrow_date = test_date().succ_opt().unwrap();
    let (mut tomorrow, _r2) = TestColumnBuilder::new()
        .with_date(tomorrow_date)
        .with_bus(&bus)
        .build();

    let selection = DateTimeSelection::new(tomorrow_date, range(9, 0, 10, 0));
    assert_eq!(bus.publish(CalendarSignal::ShowSelection(selection)), 2);
    today.process_signals();
    tomorrow.process_signals();

    assert!(today.preview().is_none());
    assert_eq!(tomorrow.preview().unwrap().range, range(9, 0, 10, 0));
}

#[test]
fn test_newer_selection_on_other_date_replaces_preview() {
    let bus = SignalBus::new();
    let (mut column, _recorded) = TestColumnBuilder::new().with_bus(&bus).build();

    bus.publish(CalendarSignal::ShowSelection(DateTimeSelection::new(
        test_date(),
        range(9, 0, 10, 0),
    )));
    bus.publish(CalendarSignal::ShowSelection(DateTimeSelection::new(
        test_date().succ_opt().unwrap(),
        range(9, 0, 10, 0),
    )));
    assert_eq!(column.process_signals(), 2);
    assert!(column.preview().is_none());
}

#[test]
fn test_clear_selection() {
    let bus = SignalBus::new();
    let (mut column, _recorded) = TestColumnBuilder::new().with_bus(&bus).build();

    bus.publish(CalendarSignal::ShowSelection(DateTimeSelection::new(
        test_date(),
        range(9, 0, 10, 0),
    )));
    column.process_signals();
    assert!(column.preview().is_some());

    bus.publish(CalendarSignal::ClearSelection);
    column.process_signals();
    assert!(column.preview().is_none());
}

#[test]
fn test_clear_selection_leaves_live_session() {
    let bus = SignalBus::new();
    let (mut column, _recorded) = TestColumnBuilder::new().with_bus(&bus).build();

    column.pointer_down(at(120.0), 1);
    column.pointer_move(at(240.0));
    bus.publish(CalendarSignal::ClearSelection);
    column.process_signals();

    let preview = column.preview().unwrap();
    assert!(!preview.external);
    assert!(column.session().is_previewing());
}

#[test]
fn test_drag_cancel_hides_external_preview() {
    let bus = SignalBus::new();
    let (mut column, _recorded) = TestColumnBuilder::new().with_bus(&bus).build();

    bus.publish(CalendarSignal::ShowSelection(DateTimeSelection::new(
        test_date(),
        range(9, 0, 10, 0),
    )));
    bus.publish(CalendarSignal::DragCancel);
    column.process_signals();
    assert!(column.preview().is_none());
}

#[test]
fn test_live_gesture_replaces_external_preview() {
    let bus = SignalBus::new();
    let (mut column, recorded) = TestColumnBuilder::new().with_bus(&bus).build();

    bus.publish(CalendarSignal::ShowSelection(DateTimeSelection::new(
        test_date(),
        range(9, 0, 10, 0),
    )));
    column.process_signals();

    column.pointer_down(at(120.0), 1);
    assert!(column.preview().is_none());
    column.pointer_move(at(180.0));
    assert!(!column.preview().unwrap().external);

    column.pointer_up(at(180.0));
    assert!(column.preview().is_none());
    assert_eq!(recorded.selected()[0].range(), range(2, 0, 3, 0));
}

#[test]
fn test_date_change_drops_external_preview() {
    let bus = SignalBus::new();
    let (mut column, _recorded) = TestColumnBuilder::new().with_bus(&bus).build();

    bus.publish(CalendarSignal::ShowSelection(DateTimeSelection::new(
        test_date(),
        range(9, 0, 10, 0),
    )));
    column.process_signals();
    column.set_date(test_date().succ_opt().unwrap());
    assert!(column.preview().is_none());
}

#[test]
fn test_column_without_bus_ignores_signals() {
    let (mut column, _recorded) = TestColumnBuilder::new().build();
    assert_eq!(column.process_signals(), 0);
}
