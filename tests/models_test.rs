// ABOUTME: Deserialization tests against realistic WHOOP v2 response payloads
// ABOUTME: Unknown fields are tolerated; unscored records and null fields parse cleanly
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use whoop_cli::models::{
    Cycle, PaginatedResponse, Recovery, Sleep, TokenPair, UserProfile, Workout,
};

#[test]
fn test_sleep_record_parses_with_unknown_fields() {
    let payload = r#"{
        "id": "ecfc6a15-4661-442f-a9a4-f160dd7caa5d",
        "v1_id": 1043,
        "user_id": 9012,
        "created_at": "2024-01-15T11:30:23.072Z",
        "updated_at": "2024-01-15T14:00:25.000Z",
        "start": "2024-01-14T22:30:00.000Z",
        "end": "2024-01-15T06:30:00.000Z",
        "timezone_offset": "-05:00",
        "nap": false,
        "score_state": "SCORED",
        "score": {
            "stage_summary": {
                "total_in_bed_time_milli": 28800000,
                "total_awake_time_milli": 1800000,
                "total_no_data_time_milli": 0,
                "total_light_sleep_time_milli": 13500000,
                "total_slow_wave_sleep_time_milli": 6750000,
                "total_rem_sleep_time_milli": 6750000,
                "total_sleep_time_milli": 27000000,
                "sleep_cycle_count": 4,
                "disturbance_count": 2
            },
            "sleep_needed": {
                "baseline_milli": 27600000,
                "need_from_sleep_debt_milli": 352230,
                "need_from_recent_strain_milli": 208595,
                "need_from_recent_nap_milli": 0
            },
            "respiratory_rate": 16.11,
            "sleep_performance_percentage": 98.0,
            "sleep_consistency_percentage": 90.0,
            "sleep_efficiency_percentage": 91.69
        }
    }"#;

    let sleep: Sleep = serde_json::from_str(payload).unwrap();
    assert_eq!(sleep.id, "ecfc6a15-4661-442f-a9a4-f160dd7caa5d");
    assert_eq!(sleep.local_offset(), "-05:00");

    let score = sleep.score.unwrap();
    assert!((score.sleep_performance_percentage - 98.0).abs() < f64::EPSILON);
    assert_eq!(score.respiratory_rate, Some(16.11));
    assert_eq!(
        score.stage_summary.unwrap().total_sleep_time_milli,
        27_000_000
    );
}

#[test]
fn test_unscored_record_without_offset_parses() {
    let payload = r#"{
        "id": "3b9f1dd4-5c02-45a6-8812-f4210cbe7b02",
        "start": "2024-01-15T12:00:00.000Z",
        "end": "2024-01-15T13:00:00.000Z",
        "sport_id": 44,
        "score_state": "PENDING_SCORE",
        "score": null
    }"#;

    let workout: Workout = serde_json::from_str(payload).unwrap();
    assert!(workout.score.is_none());
    assert_eq!(workout.local_offset(), "+00:00");
    assert_eq!(workout.sport_id, 44);
}

#[test]
fn test_current_cycle_has_no_end() {
    let payload = r#"{
        "id": 93845,
        "user_id": 10129,
        "created_at": "2024-01-15T11:30:23.072Z",
        "updated_at": "2024-01-15T14:00:25.000Z",
        "start": "2024-01-15T02:25:44.774Z",
        "end": null,
        "timezone_offset": "-05:00",
        "score_state": "SCORED",
        "score": {
            "strain": 5.2951527,
            "kilojoule": 8288.297,
            "average_heart_rate": 68,
            "max_heart_rate": 141
        }
    }"#;

    let cycle: Cycle = serde_json::from_str(payload).unwrap();
    assert_eq!(cycle.id, 93_845);
    assert!(cycle.end.is_none());
    assert_eq!(cycle.score.unwrap().average_heart_rate, Some(68));
}

#[test]
fn test_recovery_envelope_keeps_the_raw_created_at() {
    let payload = r#"{
        "records": [
            {
                "cycle_id": 93845,
                "sleep_id": "ecfc6a15-4661-442f-a9a4-f160dd7caa5d",
                "user_id": 10129,
                "created_at": "2024-01-15T11:25:44.774Z",
                "updated_at": "2024-01-15T14:25:44.774Z",
                "score_state": "SCORED",
                "score": {
                    "user_calibrating": false,
                    "recovery_score": 44.0,
                    "resting_heart_rate": 64.0,
                    "hrv_rmssd_milli": 31.813562,
                    "spo2_percentage": 95.6875,
                    "skin_temp_celsius": 33.7
                }
            }
        ],
        "next_token": null
    }"#;

    let envelope: PaginatedResponse<Recovery> = serde_json::from_str(payload).unwrap();
    assert!(envelope.next_token.is_none());

    let recovery = &envelope.records[0];
    assert_eq!(recovery.created_at, "2024-01-15T11:25:44.774Z");
    assert_eq!(recovery.created_date(), "2024-01-15");
    assert_eq!(recovery.sleep_id, "ecfc6a15-4661-442f-a9a4-f160dd7caa5d");
}

#[test]
fn test_paginated_envelope_carries_the_next_token() {
    let payload = r#"{"records": [], "next_token": "MTIzOjEyMzEyMw"}"#;
    let envelope: PaginatedResponse<Sleep> = serde_json::from_str(payload).unwrap();
    assert!(envelope.records.is_empty());
    assert_eq!(envelope.next_token.as_deref(), Some("MTIzOjEyMzEyMw"));
}

#[test]
fn test_token_response_may_omit_the_rotated_refresh_token() {
    let rotated: TokenPair = serde_json::from_str(
        r#"{"access_token": "at-1", "refresh_token": "rt-1", "expires_in": 3600,
            "scope": "offline read:profile", "token_type": "bearer"}"#,
    )
    .unwrap();
    assert_eq!(rotated.access_token, "at-1");
    assert_eq!(rotated.refresh_token.as_deref(), Some("rt-1"));

    let bare: TokenPair =
        serde_json::from_str(r#"{"access_token": "at-2", "expires_in": 3600}"#).unwrap();
    assert!(bare.refresh_token.is_none());
}

#[test]
fn test_profile_parses() {
    let payload = r#"{
        "user_id": 10129,
        "email": "jane@example.com",
        "first_name": "Jane",
        "last_name": "Doe"
    }"#;

    let profile: UserProfile = serde_json::from_str(payload).unwrap();
    assert_eq!(profile.user_id, 10_129);
    assert_eq!(profile.first_name, "Jane");
    assert_eq!(profile.email, "jane@example.com");
}
