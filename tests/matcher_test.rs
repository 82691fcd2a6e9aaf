// ABOUTME: Tests for selecting records whose locally-projected date equals the target
// ABOUTME: Exercises per-record offsets, first-match selection, and the recovery prefix path
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use whoop_cli::matcher::{match_cycle, match_recovery, match_sleep, match_workouts};
use whoop_cli::models::{Cycle, Recovery, Sleep, Workout};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sleep(id: &str, end: DateTime<Utc>, offset: Option<&str>) -> Sleep {
    Sleep {
        id: id.to_owned(),
        start: end - Duration::hours(8),
        end,
        timezone_offset: offset.map(str::to_owned),
        score: None,
    }
}

fn workout(id: &str, start: DateTime<Utc>, offset: &str) -> Workout {
    Workout {
        id: id.to_owned(),
        start,
        end: start + Duration::hours(1),
        timezone_offset: Some(offset.to_owned()),
        sport_id: 1,
        score: None,
    }
}

fn cycle(id: i64, start: DateTime<Utc>, offset: &str) -> Cycle {
    Cycle {
        id,
        start,
        end: None,
        timezone_offset: Some(offset.to_owned()),
        score: None,
    }
}

fn recovery(cycle_id: i64, created_at: &str) -> Recovery {
    Recovery {
        cycle_id,
        sleep_id: "sleep-1".to_owned(),
        created_at: created_at.to_owned(),
        score: None,
    }
}

#[test]
fn test_sleep_matches_on_projected_end_date() {
    // 06:30 UTC is 01:30 the same morning in New York
    let records = vec![
        sleep("previous-night", utc(2024, 1, 14, 6, 30), Some("-05:00")),
        sleep("target-night", utc(2024, 1, 15, 6, 30), Some("-05:00")),
    ];
    let matched = match_sleep(records, day(2024, 1, 15)).unwrap();
    assert_eq!(matched.record.id, "target-night");
    assert_eq!(matched.local_date, day(2024, 1, 15));
}

#[test]
fn test_sleep_ending_before_local_midnight_belongs_to_the_previous_day() {
    // 03:00 UTC on the 15th is still 22:00 on the 14th in New York
    let records = vec![sleep("early", utc(2024, 1, 15, 3, 0), Some("-05:00"))];
    assert!(match_sleep(records, day(2024, 1, 15)).is_none());

    let records = vec![sleep("early", utc(2024, 1, 15, 3, 0), Some("-05:00"))];
    assert!(match_sleep(records, day(2024, 1, 14)).is_some());
}

#[test]
fn test_sleep_without_declared_offset_projects_as_utc() {
    let records = vec![sleep("utc-night", utc(2024, 1, 15, 6, 30), None)];
    let matched = match_sleep(records, day(2024, 1, 15)).unwrap();
    assert_eq!(matched.record.id, "utc-night");
}

#[test]
fn test_first_matching_sleep_wins() {
    // Both end locally on the 15th; source order decides
    let records = vec![
        sleep("first", utc(2024, 1, 15, 6, 0), Some("-05:00")),
        sleep("second", utc(2024, 1, 15, 14, 0), Some("-05:00")),
    ];
    let matched = match_sleep(records, day(2024, 1, 15)).unwrap();
    assert_eq!(matched.record.id, "first");
}

#[test]
fn test_cycle_matches_on_projected_start_date() {
    // 05:00 UTC on the 15th is 21:00 on the 14th on the west coast
    let records = vec![
        cycle(1, utc(2024, 1, 15, 5, 0), "-08:00"),
        cycle(2, utc(2024, 1, 15, 12, 0), "-08:00"),
    ];
    let matched = match_cycle(records, day(2024, 1, 15)).unwrap();
    assert_eq!(matched.record.id, 2);
    assert_eq!(matched.local_date, day(2024, 1, 15));
}

#[test]
fn test_workouts_keep_every_match_in_fetch_order() {
    let records = vec![
        workout("w1", utc(2024, 1, 15, 12, 0), "-05:00"),
        workout("other-day", utc(2024, 1, 16, 12, 0), "-05:00"),
        workout("w2", utc(2024, 1, 15, 22, 0), "-05:00"),
        // 02:00 UTC on the 16th is 21:00 on the 15th in New York
        workout("w3", utc(2024, 1, 16, 2, 0), "-05:00"),
    ];
    let ids: Vec<String> = match_workouts(records, day(2024, 1, 15))
        .into_iter()
        .map(|m| m.record.id)
        .collect();
    assert_eq!(ids, ["w1", "w2", "w3"]);
}

#[test]
fn test_each_record_projects_with_its_own_offset() {
    // The same UTC instant falls on different local dates for a traveller
    let records = vec![
        workout("west", utc(2024, 1, 15, 2, 0), "-05:00"),
        workout("east", utc(2024, 1, 15, 2, 0), "+05:30"),
    ];
    let ids: Vec<String> = match_workouts(records, day(2024, 1, 15))
        .into_iter()
        .map(|m| m.record.id)
        .collect();
    assert_eq!(ids, ["east"]);
}

#[test]
fn test_recovery_matches_on_the_raw_created_prefix() {
    let records = vec![
        recovery(1, "2024-01-14T11:00:00.000Z"),
        recovery(2, "2024-01-15T10:30:00.000Z"),
    ];
    let matched = match_recovery(records, day(2024, 1, 15)).unwrap();
    assert_eq!(matched.cycle_id, 2);
}

#[test]
fn test_recovery_prefix_comparison_ignores_offsets() {
    // The timestamp's own offset would shift the date under projection;
    // the recovery path compares the raw prefix and never projects
    let records = vec![recovery(7, "2024-01-15T00:30:00.000+09:00")];
    assert!(match_recovery(records, day(2024, 1, 15)).is_some());

    let records = vec![recovery(8, "2024-01-15T00:30:00.000+09:00")];
    assert!(match_recovery(records, day(2024, 1, 14)).is_none());
}

#[test]
fn test_no_candidates_yield_no_match() {
    assert!(match_sleep(Vec::new(), day(2024, 1, 15)).is_none());
    assert!(match_cycle(Vec::new(), day(2024, 1, 15)).is_none());
    assert!(match_workouts(Vec::new(), day(2024, 1, 15)).is_empty());
    assert!(match_recovery(Vec::new(), day(2024, 1, 15)).is_none());
}
