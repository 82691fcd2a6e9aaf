// ABOUTME: Resolves a target calendar date into the UTC query window per metric kind
// ABOUTME: Sleep and cycle windows reach one day back because both span midnight
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Time Window Resolver
//!
//! A night of sleep that ends on the target date usually starts the evening
//! before, and a strain cycle anchors a day it partially precedes. Querying
//! only the target date would miss those records entirely, so sleep and cycle
//! windows open at midnight of the previous day. Workouts match on their
//! local start date and need no such slack.
//!
//! The window bounds are naive local-calendar datetimes formatted directly
//! into the API's timestamp shape. That makes the window deliberately
//! generous rather than exact: the precise day membership decision belongs to
//! the [`crate::matcher`], which projects each record into its own offset.
//!
//! Recovery is the deliberate odd one out. The upstream API serves recovery
//! as a recent-records page with no time filter, matched client-side on the
//! raw `created_at` prefix, so no window is ever resolved for it.

use crate::constants::API_TIME_FORMAT;
use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// The metric families the WHOOP API serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Sleep activities, matched on their projected local end date
    Sleep,
    /// Physiological day cycles, matched on their projected local start date
    Cycle,
    /// Workouts, matched on their projected local start date
    Workout,
    /// Recovery assessments, matched on the raw `created_at` date prefix
    Recovery,
}

/// Query bounds sent to the API for one target date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    /// Inclusive window start (midnight of the earliest candidate day)
    pub start: NaiveDateTime,
    /// Inclusive window end (last millisecond of the target date)
    pub end: NaiveDateTime,
}

impl DateWindow {
    /// Window start in the API's timestamp format
    #[must_use]
    pub fn api_start(&self) -> String {
        self.start.format(API_TIME_FORMAT).to_string()
    }

    /// Window end in the API's timestamp format
    #[must_use]
    pub fn api_end(&self) -> String {
        self.end.format(API_TIME_FORMAT).to_string()
    }
}

/// Parse the optional `DATE` argument of a command.
///
/// `None` means today in system-local time, mirroring the command surface
/// default. The accepted shape is strictly `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [`AppError::InvalidDate`] when the argument does not parse; this
/// fires before any credential or network access.
pub fn parse_target_date(argument: Option<&str>) -> AppResult<NaiveDate> {
    argument.map_or_else(
        || Ok(Local::now().date_naive()),
        |raw| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| AppError::invalid_date(raw))
        },
    )
}

/// Resolve the query window for `kind` on `target`.
///
/// Returns `None` only for [`MetricKind::Recovery`], which issues no
/// windowed query at all (see the module docs).
#[must_use]
pub fn resolve_window(target: NaiveDate, kind: MetricKind) -> Option<DateWindow> {
    let first_day = match kind {
        // A record can start before midnight and still belong to the target
        MetricKind::Sleep | MetricKind::Cycle => target.pred_opt().unwrap_or(target),
        MetricKind::Workout => target,
        MetricKind::Recovery => return None,
    };

    Some(DateWindow {
        start: first_day.and_time(NaiveTime::MIN),
        end: end_of_day(target),
    })
}

/// Last representable instant of the day at the API's millisecond precision
fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN))
}
