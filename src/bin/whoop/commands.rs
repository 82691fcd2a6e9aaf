// ABOUTME: Per-subcommand orchestration: fetch the window, match the date, print the report
// ABOUTME: No-match days print a document with a null field and still exit zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command orchestration for the WHOOP CLI.
//!
//! Every command follows the same shape: parse the target date (failing fast
//! before any credential or network access), connect the client (which
//! refreshes and persists tokens), fetch the candidate records, select the
//! ones whose locally-projected date matches, and print one YAML document.
//! The document is rendered in full before anything reaches stdout, so a
//! fatal error never leaves partial output behind.

use chrono::NaiveDate;
use serde::Serialize;
use whoop_cli::client::WhoopClient;
use whoop_cli::credentials::CredentialStore;
use whoop_cli::errors::AppResult;
use whoop_cli::matcher::{match_cycle, match_recovery, match_sleep, match_workouts};
use whoop_cli::report::{
    self, CycleEntry, CycleReport, ProfileEntry, ProfileReport, RecoveryEntry, RecoveryReport,
    SleepEntry, SleepReport, SummaryReport, WorkoutEntry, WorkoutsReport,
};
use whoop_cli::window::{parse_target_date, resolve_window, MetricKind};

/// `whoop sleep [DATE]`
pub async fn sleep(date: Option<&str>) -> AppResult<()> {
    let target = parse_target_date(date)?;
    let client = WhoopClient::connect(&CredentialStore::new()).await?;

    let document = fetch_sleep(&client, target, true)
        .await?
        .map_or_else(|| SleepReport::empty(target), SleepReport::matched);
    print_document(&document)
}

/// `whoop recovery [DATE]`
pub async fn recovery(date: Option<&str>) -> AppResult<()> {
    let target = parse_target_date(date)?;
    let client = WhoopClient::connect(&CredentialStore::new()).await?;

    let document = fetch_recovery(&client, target, true)
        .await?
        .map_or_else(|| RecoveryReport::empty(target), RecoveryReport::matched);
    print_document(&document)
}

/// `whoop workouts [DATE]`
pub async fn workouts(date: Option<&str>) -> AppResult<()> {
    let target = parse_target_date(date)?;
    let client = WhoopClient::connect(&CredentialStore::new()).await?;

    let records = match resolve_window(target, MetricKind::Workout) {
        Some(window) => client.workout_collection(&window).await?,
        None => Vec::new(),
    };
    let entries = match_workouts(records, target)
        .iter()
        .map(|matched| WorkoutEntry::from_record(&matched.record))
        .collect();
    print_document(&WorkoutsReport::of(target, entries))
}

/// `whoop cycles [DATE]`
pub async fn cycles(date: Option<&str>) -> AppResult<()> {
    let target = parse_target_date(date)?;
    let client = WhoopClient::connect(&CredentialStore::new()).await?;

    let records = match resolve_window(target, MetricKind::Cycle) {
        Some(window) => client.cycle_collection(&window).await?,
        None => Vec::new(),
    };
    let document = match_cycle(records, target).map_or_else(
        || CycleReport::empty(target),
        |matched| CycleReport::matched(CycleEntry::from_record(&matched.record)),
    );
    print_document(&document)
}

/// `whoop profile`
pub async fn profile() -> AppResult<()> {
    let client = WhoopClient::connect(&CredentialStore::new()).await?;

    let profile = client.profile().await?;
    print_document(&ProfileReport {
        profile: ProfileEntry::from_record(&profile),
    })
}

/// `whoop summary [DATE]` - sleep and recovery side by side, entries
/// undated because the document itself carries the date
pub async fn summary(date: Option<&str>) -> AppResult<()> {
    let target = parse_target_date(date)?;
    let client = WhoopClient::connect(&CredentialStore::new()).await?;

    let sleep = fetch_sleep(&client, target, false).await?;
    let recovery = fetch_recovery(&client, target, false).await?;
    print_document(&SummaryReport {
        date: target.to_string(),
        sleep,
        recovery,
    })
}

/// Fetch the sleep window and render the record that ended on `target`.
async fn fetch_sleep(
    client: &WhoopClient,
    target: NaiveDate,
    include_date: bool,
) -> AppResult<Option<SleepEntry>> {
    let records = match resolve_window(target, MetricKind::Sleep) {
        Some(window) => client.sleep_collection(&window).await?,
        None => Vec::new(),
    };
    Ok(match_sleep(records, target)
        .map(|matched| SleepEntry::from_record(&matched.record, include_date)))
}

/// Fetch the recent recoveries and render the one created on `target`.
async fn fetch_recovery(
    client: &WhoopClient,
    target: NaiveDate,
    include_date: bool,
) -> AppResult<Option<RecoveryEntry>> {
    let records = client.recent_recoveries().await?;
    Ok(match_recovery(records, target)
        .map(|record| RecoveryEntry::from_record(&record, include_date)))
}

fn print_document<T: Serialize>(document: &T) -> AppResult<()> {
    print!("{}", report::to_yaml(document)?);
    Ok(())
}
