// ABOUTME: Selects the fetched record(s) whose locally-projected date equals the target
// ABOUTME: Sleep matches on end date, workouts and cycles on start date, recovery on a raw prefix
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Record Matcher
//!
//! The query window is generous on purpose, so a fetched page usually holds
//! records belonging to neighbouring days too. Matching projects each
//! record's boundary timestamp into that record's own declared offset and
//! keeps the ones whose local date equals the target.
//!
//! Selection policy per kind:
//!
//! - **Sleep**: first record in source order whose projected *end* date
//!   matches. The source order is assumed chronological and is not re-sorted;
//!   on a rare day with overlapping records the first match may be the wrong
//!   duplicate. Accepted approximation.
//! - **Cycle**: first record whose projected *start* date matches. At most
//!   one cycle anchors a given day.
//! - **Workout**: every record whose projected *start* date matches, in
//!   fetch order. A day can hold any number of workouts.
//! - **Recovery**: plain string comparison of the raw `created_at` date
//!   prefix against the target. No projection; the upstream API shaped this
//!   path differently and the asymmetry is preserved for compatible results.
//!
//! No match is not an error. Commands render it as a document with a null
//! data field and an explanatory message, and exit zero.

use crate::local_time::project;
use crate::models::{Cycle, Recovery, Sleep, Workout};
use chrono::NaiveDate;
use tracing::debug;

/// A record whose locally-projected boundary date equals the target date
#[derive(Debug)]
pub struct Matched<T> {
    /// The matching record
    pub record: T,
    /// The projected boundary date that matched (end date for sleep,
    /// start date for workouts and cycles)
    pub local_date: NaiveDate,
}

/// Select the sleep that ended on `target` in its own local time.
#[must_use]
pub fn match_sleep(records: Vec<Sleep>, target: NaiveDate) -> Option<Matched<Sleep>> {
    records.into_iter().find_map(|record| {
        let local_date = project(record.end, record.local_offset()).date_naive();
        if local_date == target {
            debug!("sleep {} ends locally on {local_date}", record.id);
            Some(Matched { record, local_date })
        } else {
            None
        }
    })
}

/// Select the cycle that started on `target` in its own local time.
#[must_use]
pub fn match_cycle(records: Vec<Cycle>, target: NaiveDate) -> Option<Matched<Cycle>> {
    records.into_iter().find_map(|record| {
        let local_date = project(record.start, record.local_offset()).date_naive();
        if local_date == target {
            debug!("cycle {} starts locally on {local_date}", record.id);
            Some(Matched { record, local_date })
        } else {
            None
        }
    })
}

/// Collect every workout that started on `target` in its own local time,
/// preserving fetch order.
#[must_use]
pub fn match_workouts(records: Vec<Workout>, target: NaiveDate) -> Vec<Matched<Workout>> {
    records
        .into_iter()
        .filter_map(|record| {
            let local_date = project(record.start, record.local_offset()).date_naive();
            (local_date == target).then_some(Matched { record, local_date })
        })
        .collect()
}

/// Select the recovery whose raw `created_at` starts with `target`.
///
/// Deliberately offset-blind: the first ten characters of the timestamp are
/// compared against the target's canonical `YYYY-MM-DD` form.
#[must_use]
pub fn match_recovery(records: Vec<Recovery>, target: NaiveDate) -> Option<Recovery> {
    let target_prefix = target.to_string();
    records
        .into_iter()
        .find(|record| record.created_date() == target_prefix)
}
