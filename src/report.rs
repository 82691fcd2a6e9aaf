// ABOUTME: Shapes matched records into YAML report documents for stdout
// ABOUTME: Durations render as H:MM, percentages as whole numbers, recovery maps to a zone
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Report Formatter
//!
//! Every command prints one YAML document. Keys appear in struct declaration
//! order and optional fields vanish instead of serializing as `~`, except the
//! data field itself: a date with no matching record still produces a
//! document with an explicit null data field and an explanatory message,
//! because "nothing recorded" is an answer, not an error.
//!
//! Field derivation follows fixed display rules: durations as `H:MM`,
//! percentages rounded to whole numbers, heart rates and HRV at fixed
//! decimal precision, energy converted from kilojoules to dietary calories,
//! and the recovery percentage classified into a green/yellow/red zone.

use crate::constants::{KILOJOULES_PER_KCAL, RECOVERY_GREEN_THRESHOLD, RECOVERY_YELLOW_THRESHOLD};
use crate::errors::{AppError, AppResult};
use crate::local_time::project;
use crate::models::{Cycle, Recovery, Sleep, StageSummary, UserProfile, Workout};
use chrono::NaiveDate;
use serde::Serialize;

// ============================================================================
// Display Formatting Helpers
// ============================================================================

/// Milliseconds rendered as `H:MM` (hours unpadded, minutes two-digit)
#[must_use]
pub fn format_duration(milliseconds: i64) -> String {
    let total_minutes = milliseconds / 60_000;
    format!("{}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Percentage rounded to the nearest whole number with a trailing `%`
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.0}%")
}

/// Kilojoules rendered as dietary calories
fn format_calories(kilojoule: f64) -> String {
    format!("{:.0} kcal", kilojoule / KILOJOULES_PER_KCAL)
}

/// `H:MM (P%)` for one sleep stage, where `P` is the stage's share of total
/// sleep time. The share is omitted when the total is zero; a zero-length
/// sleep must not divide by zero.
fn stage_line(stage_milliseconds: i64, total_sleep_milliseconds: i64) -> String {
    let duration = format_duration(stage_milliseconds);
    if total_sleep_milliseconds == 0 {
        return duration;
    }
    let share = stage_milliseconds as f64 / total_sleep_milliseconds as f64 * 100.0;
    format!("{duration} ({share:.0}%)")
}

/// Threshold-derived qualitative label for a recovery percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryZone {
    /// Recovery at or above 67
    Green,
    /// Recovery at or above 34 and below 67
    Yellow,
    /// Recovery below 34
    Red,
}

impl RecoveryZone {
    /// Classify a recovery percentage. Boundaries are exact: 67.0 is still
    /// green and 34.0 is still yellow.
    #[must_use]
    pub fn from_score(percentage: f64) -> Self {
        if percentage >= RECOVERY_GREEN_THRESHOLD {
            Self::Green
        } else if percentage >= RECOVERY_YELLOW_THRESHOLD {
            Self::Yellow
        } else {
            Self::Red
        }
    }
}

// ============================================================================
// Report Entries
// ============================================================================

/// Sleep stage breakdown as rendered lines
#[derive(Debug, Serialize)]
pub struct SleepStages {
    /// REM sleep duration and share
    pub rem: String,
    /// Slow wave sleep duration and share
    pub deep: String,
    /// Light sleep duration and share
    pub light: String,
    /// Awake duration (no share; awake time is not sleep)
    pub awake: String,
}

impl SleepStages {
    fn from_summary(summary: &StageSummary) -> Self {
        let total = summary.total_sleep_time_milli;
        Self {
            rem: stage_line(summary.total_rem_sleep_time_milli, total),
            deep: stage_line(summary.total_slow_wave_sleep_time_milli, total),
            light: stage_line(summary.total_light_sleep_time_milli, total),
            awake: format_duration(summary.total_awake_time_milli),
        }
    }
}

/// One night of sleep, rendered
#[derive(Debug, Serialize)]
pub struct SleepEntry {
    /// Local date the sleep started (omitted inside a summary)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Local clock time the sleep started
    pub bedtime: String,
    /// Local clock time the sleep ended
    pub wake_time: String,
    /// Sleep performance percentage, when scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<String>,
    /// Sleep efficiency percentage, when scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<String>,
    /// Total time in bed, when a stage summary exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_bed: Option<String>,
    /// Total actual sleep time, when a stage summary exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_sleep: Option<String>,
    /// Per-stage breakdown, when a stage summary exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stages: Option<SleepStages>,
    /// Respiratory rate, when measured and non-zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub respiratory_rate: Option<String>,
}

impl SleepEntry {
    /// Render a sleep record, projecting both boundary timestamps into the
    /// record's own declared offset.
    #[must_use]
    pub fn from_record(sleep: &Sleep, include_date: bool) -> Self {
        let offset = sleep.local_offset();
        let local_start = project(sleep.start, offset);
        let local_end = project(sleep.end, offset);

        let score = sleep.score.as_ref();
        let stage_summary = score.and_then(|s| s.stage_summary.as_ref());

        Self {
            date: include_date.then(|| local_start.format("%Y-%m-%d").to_string()),
            bedtime: local_start.format("%I:%M %p").to_string(),
            wake_time: local_end.format("%I:%M %p").to_string(),
            performance: score.map(|s| format_percent(s.sleep_performance_percentage)),
            efficiency: score.map(|s| format_percent(s.sleep_efficiency_percentage)),
            time_in_bed: stage_summary.map(|s| format_duration(s.total_in_bed_time_milli)),
            actual_sleep: stage_summary.map(|s| format_duration(s.total_sleep_time_milli)),
            stages: stage_summary.map(SleepStages::from_summary),
            respiratory_rate: score
                .and_then(|s| s.respiratory_rate)
                .filter(|rate| rate.abs() > f64::EPSILON)
                .map(|rate| format!("{rate:.1} breaths/min")),
        }
    }
}

/// One recovery assessment, rendered
#[derive(Debug, Serialize)]
pub struct RecoveryEntry {
    /// Raw `created_at` date prefix (omitted inside a summary)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Recovery percentage, when scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_score: Option<String>,
    /// Zone classification, when scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<RecoveryZone>,
    /// Heart rate variability, when scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hrv: Option<String>,
    /// Resting heart rate, when scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resting_hr: Option<String>,
    /// Blood oxygen saturation, when measured and non-zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spo2: Option<String>,
    /// Skin temperature, when measured and non-zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skin_temp: Option<String>,
}

impl RecoveryEntry {
    /// Render a recovery record. The date is the raw `created_at` prefix;
    /// this path performs no offset projection.
    #[must_use]
    pub fn from_record(recovery: &Recovery, include_date: bool) -> Self {
        let score = recovery.score.as_ref();
        Self {
            date: include_date.then(|| recovery.created_date().to_owned()),
            recovery_score: score.map(|s| format_percent(s.recovery_score)),
            zone: score.map(|s| RecoveryZone::from_score(s.recovery_score)),
            hrv: score.map(|s| format!("{:.1} ms", s.hrv_rmssd_milli)),
            resting_hr: score.map(|s| format!("{:.0} bpm", s.resting_heart_rate)),
            spo2: score
                .and_then(|s| s.spo2_percentage)
                .filter(|value| value.abs() > f64::EPSILON)
                .map(|value| format!("{value:.1}%")),
            skin_temp: score
                .and_then(|s| s.skin_temp_celsius)
                .filter(|value| value.abs() > f64::EPSILON)
                .map(|value| format!("{value:.1}°C")),
        }
    }
}

/// One workout, rendered
#[derive(Debug, Serialize)]
pub struct WorkoutEntry {
    /// Local clock time the workout started
    pub time: String,
    /// WHOOP sport classification ID
    pub sport_id: i32,
    /// Strain score, when scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strain: Option<String>,
    /// Energy burned, when scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<String>,
    /// Average heart rate, when recorded and non-zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_hr: Option<String>,
    /// Maximum heart rate, reported alongside the average
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_hr: Option<String>,
}

impl WorkoutEntry {
    /// Render a workout record, projecting its start into the record's own
    /// declared offset.
    #[must_use]
    pub fn from_record(workout: &Workout) -> Self {
        let local_start = project(workout.start, workout.local_offset());
        let score = workout.score.as_ref();
        let average_heart_rate = score.and_then(|s| s.average_heart_rate).filter(|hr| *hr != 0);

        Self {
            time: local_start.format("%I:%M %p").to_string(),
            sport_id: workout.sport_id,
            strain: score.map(|s| format!("{:.1}", s.strain)),
            calories: score.map(|s| format_calories(s.kilojoule)),
            avg_hr: average_heart_rate.map(|hr| format!("{hr} bpm")),
            max_hr: average_heart_rate
                .and(score.and_then(|s| s.max_heart_rate))
                .map(|hr| format!("{hr} bpm")),
        }
    }
}

/// One strain cycle, rendered
#[derive(Debug, Serialize)]
pub struct CycleEntry {
    /// Local date the cycle started
    pub date: String,
    /// Strain score, when scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strain: Option<String>,
    /// Energy burned, when scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<String>,
    /// Average heart rate, when recorded and non-zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_hr: Option<String>,
    /// Maximum heart rate, reported alongside the average
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_hr: Option<String>,
}

impl CycleEntry {
    /// Render a cycle record, projecting its start into the record's own
    /// declared offset.
    #[must_use]
    pub fn from_record(cycle: &Cycle) -> Self {
        let local_start = project(cycle.start, cycle.local_offset());
        let score = cycle.score.as_ref();
        let average_heart_rate = score.and_then(|s| s.average_heart_rate).filter(|hr| *hr != 0);

        Self {
            date: local_start.format("%Y-%m-%d").to_string(),
            strain: score.map(|s| format!("{:.1}", s.strain)),
            calories: score.map(|s| format_calories(s.kilojoule)),
            avg_hr: average_heart_rate.map(|hr| format!("{hr} bpm")),
            max_hr: average_heart_rate
                .and(score.and_then(|s| s.max_heart_rate))
                .map(|hr| format!("{hr} bpm")),
        }
    }
}

/// The account profile, rendered
#[derive(Debug, Serialize)]
pub struct ProfileEntry {
    /// Full display name
    pub name: String,
    /// Account email address
    pub email: String,
    /// Numeric WHOOP user ID
    pub user_id: i64,
}

impl ProfileEntry {
    /// Render the user profile.
    #[must_use]
    pub fn from_record(profile: &UserProfile) -> Self {
        Self {
            name: format!("{} {}", profile.first_name, profile.last_name),
            email: profile.email.clone(),
            user_id: profile.user_id,
        }
    }
}

// ============================================================================
// Report Documents
// ============================================================================

/// Document for the `sleep` command
#[derive(Debug, Serialize)]
pub struct SleepReport {
    /// Matched sleep entry, or null when no sleep ended on the date
    pub sleep: Option<SleepEntry>,
    /// Explanation accompanying a null entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SleepReport {
    /// Document around a matched entry.
    #[must_use]
    pub fn matched(entry: SleepEntry) -> Self {
        Self {
            sleep: Some(entry),
            message: None,
        }
    }

    /// Document for a date with no matching sleep.
    #[must_use]
    pub fn empty(target: NaiveDate) -> Self {
        Self {
            sleep: None,
            message: Some(format!("No sleep data for {target}")),
        }
    }
}

/// Document for the `recovery` command
#[derive(Debug, Serialize)]
pub struct RecoveryReport {
    /// Matched recovery entry, or null when none was created on the date
    pub recovery: Option<RecoveryEntry>,
    /// Explanation accompanying a null entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RecoveryReport {
    /// Document around a matched entry.
    #[must_use]
    pub fn matched(entry: RecoveryEntry) -> Self {
        Self {
            recovery: Some(entry),
            message: None,
        }
    }

    /// Document for a date with no matching recovery.
    #[must_use]
    pub fn empty(target: NaiveDate) -> Self {
        Self {
            recovery: None,
            message: Some(format!("No recovery data for {target}")),
        }
    }
}

/// Document for the `cycles` command
#[derive(Debug, Serialize)]
pub struct CycleReport {
    /// Matched cycle entry, or null when no cycle anchors the date
    pub cycle: Option<CycleEntry>,
    /// Explanation accompanying a null entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CycleReport {
    /// Document around a matched entry.
    #[must_use]
    pub fn matched(entry: CycleEntry) -> Self {
        Self {
            cycle: Some(entry),
            message: None,
        }
    }

    /// Document for a date with no matching cycle.
    #[must_use]
    pub fn empty(target: NaiveDate) -> Self {
        Self {
            cycle: None,
            message: Some(format!("No cycle data for {target}")),
        }
    }
}

/// Document for the `workouts` command
#[derive(Debug, Serialize)]
pub struct WorkoutsReport {
    /// The requested date
    pub date: String,
    /// All workouts matched on the date in fetch order, or null when none
    pub workouts: Option<Vec<WorkoutEntry>>,
    /// Explanation accompanying a null list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl WorkoutsReport {
    /// Document for the day's workouts; an empty set becomes a null field
    /// plus an explanatory message.
    #[must_use]
    pub fn of(target: NaiveDate, entries: Vec<WorkoutEntry>) -> Self {
        if entries.is_empty() {
            Self {
                date: target.to_string(),
                workouts: None,
                message: Some(format!("No workout data for {target}")),
            }
        } else {
            Self {
                date: target.to_string(),
                workouts: Some(entries),
                message: None,
            }
        }
    }
}

/// Document for the `profile` command
#[derive(Debug, Serialize)]
pub struct ProfileReport {
    /// The account profile
    pub profile: ProfileEntry,
}

/// Document for the `summary` command: sleep and recovery side by side,
/// each omitted entirely when absent (entries inside a summary carry no
/// date of their own)
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    /// The requested date
    pub date: String,
    /// Matched sleep, when any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sleep: Option<SleepEntry>,
    /// Matched recovery, when any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery: Option<RecoveryEntry>,
}

/// Serialize a report document to YAML with keys in declaration order.
///
/// # Errors
///
/// Returns [`AppError::Render`] when serialization fails.
pub fn to_yaml<T: Serialize>(document: &T) -> AppResult<String> {
    serde_yaml::to_string(document).map_err(|e| AppError::render(e.to_string()))
}
