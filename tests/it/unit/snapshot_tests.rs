//! Snapshot tests for payloads handed to the calendar view.

use crate::helpers::{range, test_date};
use boxlog_calendar::{CalendarPlan, DateTimeSelection};
use insta::assert_json_snapshot;

#[test]
fn test_selection_payload_shape() {
    let selection = DateTimeSelection::new(test_date(), range(2, 0, 3, 0));
    assert_json_snapshot!(selection, @r#"
    {
      "date": "2026-10-14",
      "startHour": 2,
      "startMinute": 0,
      "endHour": 3,
      "endMinute": 0
    }
    "#);
}

#[test]
fn test_time_range_shape() {
    assert_json_snapshot!(range(9, 45, 10, 15), @r#"
    {
      "startHour": 9,
      "startMinute": 45,
      "endHour": 10,
      "endMinute": 15
    }
    "#);
}

#[test]
fn test_plan_shape() {
    let plan = CalendarPlan::new(7, "Review", test_date(), range(14, 0, 15, 30));
    assert_json_snapshot!(plan, @r#"
    {
      "id": 7,
      "title": "Review",
      "date": "2026-10-14",
      "range": {
        "startHour": 14,
        "startMinute": 0,
        "endHour": 15,
        "endMinute": 30
      }
    }
    "#);
}

#[test]
fn test_selection_deserialization_validates() {
    let ok: Result<DateTimeSelection, _> = serde_json::from_str(
        r#"{"date":"2026-10-14","startHour":8,"startMinute":0,"endHour":9,"endMinute":0}"#,
    );
    assert_eq!(ok.unwrap().range(), range(8, 0, 9, 0));

    let reversed: Result<DateTimeSelection, _> = serde_json::from_str(
        r#"{"date":"2026-10-14","startHour":9,"startMinute":0,"endHour":8,"endMinute":0}"#,
    );
    assert!(reversed.is_err());

    let out_of_bounds: Result<DateTimeSelection, _> = serde_json::from_str(
        r#"{"date":"2026-10-14","startHour":8,"startMinute":0,"endHour":24,"endMinute":0}"#,
    );
    assert!(out_of_bounds.is_err());
}
