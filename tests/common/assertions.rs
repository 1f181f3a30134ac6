//! Domain-specific assertion helpers for astrocal harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! pipeline invariant was violated, instead of a bare `assert!` boolean.

use astrocal_core::{DateKey, DayIndex};

/// Assert that a key is in canonical `YYYY-MM-DD` shape.
pub fn assert_canonical_date_key(key: &DateKey) {
    let s = key.as_str();
    let shape_ok = s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    assert!(shape_ok, "date key {s:?} is not in canonical YYYY-MM-DD form");
}

/// Assert that a day holds exactly the given special-date codes, in order.
pub fn assert_special_codes(index: &DayIndex, day: &DateKey, expected: &[&str]) {
    let actual: Vec<&str> = index.special_on(day).iter().map(|e| e.code.as_str()).collect();
    assert_eq!(
        actual, expected,
        "special-date codes for {day} do not match source order"
    );
}

/// Assert that a day holds exactly the given event titles, in feed order.
pub fn assert_event_titles(index: &DayIndex, day: &DateKey, expected: &[&str]) {
    let actual: Vec<&str> = index.events_on(day).iter().map(|e| e.title.as_str()).collect();
    assert_eq!(actual, expected, "event titles for {day} do not match feed order");
}

/// Assert the holiday name recorded for a day.
pub fn assert_holiday(index: &DayIndex, day: &DateKey, expected: &str) {
    match index.holiday_on(day) {
        Some(name) => assert_eq!(name, expected, "holiday name for {day}"),
        None => panic!("no holiday recorded for {day}, expected {expected:?}"),
    }
}
