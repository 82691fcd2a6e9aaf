// ABOUTME: Parses per-record timezone offsets and projects UTC instants into them
// ABOUTME: Unparseable offsets silently fall back to UTC, never a hard error
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Local-Time Projector
//!
//! WHOOP stores record timestamps in UTC and attaches the wearer's local
//! offset to each record as a signed `±HH:MM` string. Projection applies that
//! offset as a fixed shift. There is no DST table lookup: the upstream offset
//! is already DST-adjusted for the record it rides on.
//!
//! Projection happens per record, with that record's own declared offset. Two
//! records in the same response can disagree when the wearer travelled across
//! time zones, so the offset is never cached as session state.
//!
//! An offset that fails to parse is treated as UTC. That is a permissive
//! fallback, not an error condition: a record with a junk offset still
//! renders, just uncorrected.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Signed `±HH:MM` offset, anchored at the start so trailing text is
/// tolerated. Stored as Option to handle compilation failure gracefully
/// (should never fail for a static pattern).
static OFFSET_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: +01:00, -05:30, +00:00
    Regex::new(r"^([+-])(\d{2}):(\d{2})").ok()
});

const SECONDS_PER_HOUR: i32 = 3_600;
const SECONDS_PER_MINUTE: i32 = 60;

/// Parse a record's declared `±HH:MM` offset into a fixed offset.
///
/// Falls back to UTC when the string does not match the pattern or the
/// resulting shift is out of chrono's representable range.
#[must_use]
pub fn parse_offset(offset: &str) -> FixedOffset {
    let Some(pattern) = OFFSET_PATTERN.as_ref() else {
        return Utc.fix();
    };
    let Some(captures) = pattern.captures(offset) else {
        debug!("offset {offset:?} does not match [+-]HH:MM, treating as UTC");
        return Utc.fix();
    };

    let negative = captures.get(1).is_some_and(|m| m.as_str() == "-");
    let hours = capture_int(&captures, 2);
    let minutes = capture_int(&captures, 3);

    let mut seconds = hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE;
    if negative {
        seconds = -seconds;
    }

    FixedOffset::east_opt(seconds).unwrap_or_else(|| {
        debug!("offset {offset:?} is out of range, treating as UTC");
        Utc.fix()
    })
}

/// Project a UTC instant into a record's declared local offset.
///
/// The caller passes the offset carried by the same record the instant came
/// from; see the module docs on why there is no session-global offset.
#[must_use]
pub fn project(instant: DateTime<Utc>, offset: &str) -> DateTime<FixedOffset> {
    instant.with_timezone(&parse_offset(offset))
}

/// Numeric capture group, zero when absent. The pattern guarantees both
/// digit groups whenever it matches at all.
fn capture_int(captures: &regex::Captures<'_>, group: usize) -> i32 {
    captures
        .get(group)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_offsets_parse_to_fixed_shifts() {
        assert_eq!(parse_offset("+00:00").local_minus_utc(), 0);
        assert_eq!(parse_offset("-05:00").local_minus_utc(), -5 * 3_600);
        assert_eq!(parse_offset("+05:30").local_minus_utc(), 5 * 3_600 + 30 * 60);
        assert_eq!(parse_offset("+01:00").local_minus_utc(), 3_600);
    }

    #[test]
    fn test_junk_offsets_fall_back_to_utc() {
        assert_eq!(parse_offset("").local_minus_utc(), 0);
        assert_eq!(parse_offset("whenever").local_minus_utc(), 0);
        assert_eq!(parse_offset("5:00").local_minus_utc(), 0);
        assert_eq!(parse_offset("UTC+01:00").local_minus_utc(), 0);
    }

    #[test]
    fn test_trailing_text_is_tolerated() {
        // Mirrors the permissive anchored match: the tail is ignored
        assert_eq!(parse_offset("+01:00 CET").local_minus_utc(), 3_600);
        assert_eq!(parse_offset("-08:00:00").local_minus_utc(), -8 * 3_600);
    }

    #[test]
    fn test_out_of_range_offset_falls_back_to_utc() {
        assert_eq!(parse_offset("+99:00").local_minus_utc(), 0);
        assert_eq!(parse_offset("-24:00").local_minus_utc(), 0);
    }
}
