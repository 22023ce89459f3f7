//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines `Timestamp`, a UTC-only timestamp type truncated to seconds
//! precision, plus the ceiling day arithmetic used by deadline
//! classification and SLA computation.
//!
//! ## Invariant
//!
//! Every timestamp in the tracker is UTC with a Z suffix. Local timezone
//! offsets would make the same instant render differently in stored
//! documents and reminder records, so non-UTC inputs are rejected at
//! construction on the strict path rather than silently converted.
//!
//! ## Day Arithmetic
//!
//! Deadline math in the tracker is expressed in whole days with ceiling
//! semantics: a deadline 12 hours away counts as 1 day out, and a
//! deadline exactly 2 days past counts as 2 days overdue. [`Timestamp::days_until`]
//! implements `ceil((other − self) / 1 day)` on signed seconds.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RegflowError;

/// Seconds in one day.
pub const SECS_PER_DAY: i64 = 86_400;

/// A UTC-only timestamp, truncated to seconds precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`Timestamp::parse()`] — from an ISO8601 string, accepting only the `Z` suffix.
/// - [`Timestamp::parse_lenient()`] — converts any RFC 3339 offset to UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse a timestamp from an RFC 3339 / ISO8601 string.
    ///
    /// **Rejects non-Z inputs.** Only timestamps with the `Z` suffix are
    /// accepted; even `+00:00`, semantically equivalent to UTC, is
    /// rejected so every stored timestamp renders one way.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid RFC 3339 or uses a
    /// non-Z timezone offset.
    pub fn parse(s: &str) -> Result<Self, RegflowError> {
        if !s.ends_with('Z') {
            return Err(RegflowError::Validation(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }

        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            RegflowError::Validation(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;

        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Parse a timestamp from an RFC 3339 string, accepting any timezone
    /// offset and converting to UTC.
    ///
    /// This is the lenient parser for ingesting legacy document data. The
    /// result is always UTC with seconds precision, matching the strict
    /// invariant.
    pub fn parse_lenient(s: &str) -> Result<Self, RegflowError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            RegflowError::Validation(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Create a timestamp from a Unix epoch timestamp (seconds).
    pub fn from_epoch_secs(secs: i64) -> Result<Self, RegflowError> {
        let dt = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| RegflowError::Validation(format!("invalid Unix timestamp: {secs}")))?;
        Ok(Self(dt))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Signed seconds from `self` to `other` (positive if `other` is later).
    pub fn seconds_until(&self, other: Timestamp) -> i64 {
        other.epoch_secs() - self.epoch_secs()
    }

    /// Whole days from `self` to `other`, with ceiling semantics.
    ///
    /// `ceil((other − self) / 1 day)` on signed seconds: 12 hours ahead is
    /// 1 day, exactly 2 days behind is −2 days, 1 hour behind is 0 days.
    pub fn days_until(&self, other: Timestamp) -> i64 {
        ceil_div(self.seconds_until(other), SECS_PER_DAY)
    }

    /// Render as ISO8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Convert a span in seconds to whole days, rounding up.
pub fn ceil_days(seconds: i64) -> i64 {
    ceil_div(seconds, SECS_PER_DAY)
}

/// Ceiling division on signed integers. `b` must be positive.
fn ceil_div(a: i64, b: i64) -> i64 {
    (a + b - 1).div_euclid(b)
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}
