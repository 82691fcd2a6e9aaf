// ABOUTME: WHOOP developer API v2 response shapes for sleep, recovery, cycles, workouts
// ABOUTME: Records carry their own timezone offset; accessors default missing offsets to UTC
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deserialization models for WHOOP API responses.
//!
//! Every activity record declares its own `timezone_offset` (a signed
//! `±HH:MM` string). Two records in the same response can carry different
//! offsets - the wearer may have travelled - so the offset is modelled as
//! data on each record, never as session state. A record can also exist
//! before WHOOP has scored it, which is why every `score` field is optional.

use crate::constants::UTC_OFFSET;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Pagination envelope for WHOOP collection responses
#[derive(Debug, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Records in this page
    pub records: Vec<T>,
    /// Token for fetching the next page (`None` if no more pages)
    pub next_token: Option<String>,
}

/// Token pair returned by the OAuth token endpoint.
///
/// Refresh responses may omit the refresh token, in which case the
/// previously stored one remains valid.
#[derive(Debug, Deserialize)]
pub struct TokenPair {
    /// Fresh access token
    pub access_token: String,
    /// Rotated refresh token, when the endpoint returns one
    pub refresh_token: Option<String>,
}

/// A single sleep activity (may span midnight)
#[derive(Debug, Deserialize)]
pub struct Sleep {
    /// Unique sleep ID (UUID string in v2)
    pub id: String,
    /// Sleep start instant (UTC)
    pub start: DateTime<Utc>,
    /// Sleep end instant (UTC)
    pub end: DateTime<Utc>,
    /// Self-declared local offset, e.g. `-05:00`
    pub timezone_offset: Option<String>,
    /// Score details, absent while WHOOP is still scoring the sleep
    pub score: Option<SleepScore>,
}

impl Sleep {
    /// The record's declared timezone offset, defaulting to UTC
    #[must_use]
    pub fn local_offset(&self) -> &str {
        self.timezone_offset.as_deref().unwrap_or(UTC_OFFSET)
    }
}

/// Sleep score details
#[derive(Debug, Deserialize)]
pub struct SleepScore {
    /// Sleep performance percentage (0-100)
    pub sleep_performance_percentage: f64,
    /// Sleep efficiency percentage (0-100)
    pub sleep_efficiency_percentage: f64,
    /// Respiratory rate during sleep (breaths per minute)
    pub respiratory_rate: Option<f64>,
    /// Stage summary breakdown
    pub stage_summary: Option<StageSummary>,
}

/// Sleep stage summary (all durations in milliseconds)
#[derive(Debug, Deserialize)]
pub struct StageSummary {
    /// Total time in bed
    pub total_in_bed_time_milli: i64,
    /// Total awake time
    pub total_awake_time_milli: i64,
    /// Total light sleep time
    pub total_light_sleep_time_milli: i64,
    /// Total slow wave (deep) sleep time
    pub total_slow_wave_sleep_time_milli: i64,
    /// Total REM sleep time
    pub total_rem_sleep_time_milli: i64,
    /// Total actual sleep time
    pub total_sleep_time_milli: i64,
}

/// A single workout activity
#[derive(Debug, Deserialize)]
pub struct Workout {
    /// Unique workout ID (UUID string in v2)
    pub id: String,
    /// Workout start instant (UTC)
    pub start: DateTime<Utc>,
    /// Workout end instant (UTC)
    pub end: DateTime<Utc>,
    /// Self-declared local offset, e.g. `+01:00`
    pub timezone_offset: Option<String>,
    /// Sport ID (WHOOP internal sport classification)
    pub sport_id: i32,
    /// Score details, absent while WHOOP is still scoring the workout
    pub score: Option<WorkoutScore>,
}

impl Workout {
    /// The record's declared timezone offset, defaulting to UTC
    #[must_use]
    pub fn local_offset(&self) -> &str {
        self.timezone_offset.as_deref().unwrap_or(UTC_OFFSET)
    }
}

/// Workout score details
#[derive(Debug, Deserialize)]
pub struct WorkoutScore {
    /// Strain score (0-21 scale)
    pub strain: f64,
    /// Kilojoules burned
    pub kilojoule: f64,
    /// Average heart rate during the workout
    pub average_heart_rate: Option<i32>,
    /// Maximum heart rate during the workout
    pub max_heart_rate: Option<i32>,
}

/// A physiological day cycle (anchors the day's strain)
#[derive(Debug, Deserialize)]
pub struct Cycle {
    /// Unique cycle ID (integer in v2)
    pub id: i64,
    /// Cycle start instant (UTC)
    pub start: DateTime<Utc>,
    /// Cycle end instant (UTC); the current cycle has none yet
    pub end: Option<DateTime<Utc>>,
    /// Self-declared local offset, e.g. `-08:00`
    pub timezone_offset: Option<String>,
    /// Score details, absent while WHOOP is still scoring the cycle
    pub score: Option<CycleScore>,
}

impl Cycle {
    /// The record's declared timezone offset, defaulting to UTC
    #[must_use]
    pub fn local_offset(&self) -> &str {
        self.timezone_offset.as_deref().unwrap_or(UTC_OFFSET)
    }
}

/// Cycle score details
#[derive(Debug, Deserialize)]
pub struct CycleScore {
    /// Strain score for the cycle (0-21 scale)
    pub strain: f64,
    /// Kilojoules burned over the cycle
    pub kilojoule: f64,
    /// Average heart rate over the cycle
    pub average_heart_rate: Option<i32>,
    /// Maximum heart rate over the cycle
    pub max_heart_rate: Option<i32>,
}

/// A recovery assessment for one cycle.
///
/// Recovery records carry no timezone offset; they are matched on the raw
/// `created_at` date prefix instead of a projected local date.
#[derive(Debug, Deserialize)]
pub struct Recovery {
    /// Cycle this recovery belongs to
    pub cycle_id: i64,
    /// Sleep the recovery was computed from
    pub sleep_id: String,
    /// Creation timestamp, kept as the raw string for prefix matching
    pub created_at: String,
    /// Score details, absent while WHOOP is still scoring the recovery
    pub score: Option<RecoveryScore>,
}

impl Recovery {
    /// The raw `YYYY-MM-DD` prefix of `created_at`, the offset-blind key the
    /// matching path and reports use
    #[must_use]
    pub fn created_date(&self) -> &str {
        self.created_at.get(..10).unwrap_or(&self.created_at)
    }
}

/// Recovery score details
#[derive(Debug, Deserialize)]
pub struct RecoveryScore {
    /// Recovery score as a percentage (0-100)
    pub recovery_score: f64,
    /// Heart rate variability (RMSSD, milliseconds)
    pub hrv_rmssd_milli: f64,
    /// Resting heart rate (bpm)
    pub resting_heart_rate: f64,
    /// Blood oxygen saturation percentage
    pub spo2_percentage: Option<f64>,
    /// Skin temperature in Celsius
    pub skin_temp_celsius: Option<f64>,
}

/// WHOOP user profile
#[derive(Debug, Deserialize)]
pub struct UserProfile {
    /// User ID (integer in WHOOP)
    pub user_id: i64,
    /// User's email address
    pub email: String,
    /// User's first name
    pub first_name: String,
    /// User's last name
    pub last_name: String,
}
