// ABOUTME: Tests for target date parsing and per-metric query window resolution
// ABOUTME: Sleep and cycle windows reach one day back; recovery resolves no window
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use whoop_cli::errors::AppError;
use whoop_cli::window::{parse_target_date, resolve_window, MetricKind};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_explicit_date_parses() {
    assert_eq!(
        parse_target_date(Some("2024-01-15")).unwrap(),
        day(2024, 1, 15)
    );
}

#[test]
fn test_missing_date_defaults_to_today() {
    // Bracket the call so the assertion survives a midnight rollover
    let before = chrono::Local::now().date_naive();
    let parsed = parse_target_date(None).unwrap();
    let after = chrono::Local::now().date_naive();
    assert!(parsed == before || parsed == after);
}

#[test]
fn test_bad_dates_are_rejected_with_the_offending_input() {
    for input in ["yesterday", "15-01-2024", "2024-13-01", "2024-01-15T00:00:00"] {
        let error = parse_target_date(Some(input)).unwrap_err();
        assert!(
            matches!(error, AppError::InvalidDate { .. }),
            "{input} should not parse"
        );
        assert!(error.to_string().contains(input));
    }
}

#[test]
fn test_sleep_window_opens_at_the_previous_midnight() {
    let window = resolve_window(day(2024, 1, 15), MetricKind::Sleep).unwrap();
    assert_eq!(window.api_start(), "2024-01-14T00:00:00.000Z");
    assert_eq!(window.api_end(), "2024-01-15T23:59:59.999Z");
}

#[test]
fn test_cycle_window_matches_the_sleep_window() {
    let sleep = resolve_window(day(2024, 1, 15), MetricKind::Sleep);
    let cycle = resolve_window(day(2024, 1, 15), MetricKind::Cycle);
    assert_eq!(sleep, cycle);
}

#[test]
fn test_workout_window_covers_only_the_target_day() {
    let window = resolve_window(day(2024, 1, 15), MetricKind::Workout).unwrap();
    assert_eq!(window.api_start(), "2024-01-15T00:00:00.000Z");
    assert_eq!(window.api_end(), "2024-01-15T23:59:59.999Z");
}

#[test]
fn test_recovery_issues_no_windowed_query() {
    assert_eq!(resolve_window(day(2024, 1, 15), MetricKind::Recovery), None);
}

#[test]
fn test_lookback_crosses_month_and_leap_boundaries() {
    let window = resolve_window(day(2024, 3, 1), MetricKind::Sleep).unwrap();
    assert_eq!(window.api_start(), "2024-02-29T00:00:00.000Z");

    let window = resolve_window(day(2024, 1, 1), MetricKind::Cycle).unwrap();
    assert_eq!(window.api_start(), "2023-12-31T00:00:00.000Z");
}
