// ABOUTME: Library entry point for the WHOOP CLI - daily health reports from the WHOOP API
// ABOUTME: Core is the temporal record resolution layer: window, projection, matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # WHOOP CLI
//!
//! A command-line client for the WHOOP developer API. It fetches daily health
//! metrics (sleep, recovery, strain cycles, workouts, profile) and renders
//! them as YAML reports for a given calendar date.
//!
//! The interesting part is the temporal record resolution layer. WHOOP
//! records are stored in UTC but each one declares its own local-time offset,
//! and a night of sleep (or a day's strain cycle) routinely spans midnight.
//! Answering "what did I sleep on 2024-01-15" therefore takes three steps:
//!
//! 1. **Window resolution** ([`window`]): widen the query window so every
//!    record that could *locally* fall on the date is fetched.
//! 2. **Local projection** ([`local_time`]): shift each record's UTC
//!    timestamps into that record's own declared offset.
//! 3. **Matching** ([`matcher`]): select the record(s) whose projected
//!    boundary date equals the requested date.
//!
//! Everything else is plumbing: OAuth credentials on disk ([`credentials`]),
//! an authenticated HTTP client ([`client`]), and YAML shaping ([`report`]).
//!
//! ## Example
//!
//! ```rust,no_run
//! use whoop_cli::errors::AppResult;
//! use whoop_cli::window::{parse_target_date, resolve_window, MetricKind};
//!
//! fn main() -> AppResult<()> {
//!     let target = parse_target_date(Some("2024-01-15"))?;
//!     let window = resolve_window(target, MetricKind::Sleep);
//!     println!("sleep query window: {window:?}");
//!     Ok(())
//! }
//! ```

/// Authenticated WHOOP API client with token refresh and pagination
pub mod client;

/// Application constants: endpoints, OAuth scopes, report thresholds
pub mod constants;

/// File-backed OAuth credential store
pub mod credentials;

/// Unified error handling for CLI commands and API access
pub mod errors;

/// Per-record local-time offset parsing and projection
pub mod local_time;

/// Selection of records whose locally-projected date matches a target
pub mod matcher;

/// Deserialization models for WHOOP API responses
pub mod models;

/// OAuth2 authorization helpers for the one-time setup flow
pub mod oauth;

/// Report documents and display-field derivation
pub mod report;

/// Query time-window resolution per metric kind
pub mod window;
