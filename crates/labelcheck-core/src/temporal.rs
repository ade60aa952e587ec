//! # UTC Timestamps
//!
//! Defines `Timestamp`, a UTC-only timestamp truncated to seconds
//! precision. Reports print the calendar date, default file names use a
//! compact date stamp, and the PDF info dictionary uses the PDF date
//! syntax; all three are derived here so they can never disagree.
//!
//! [`Timestamp::parse()`] accepts RFC 3339 strings with any
//! offset and converts them to UTC.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LabelcheckError;

/// A UTC-only timestamp, truncated to seconds precision.
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

    /// Parse an RFC 3339 string with any offset, converting to UTC.
    pub fn parse(s: &str) -> Result<Self, LabelcheckError> {
        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            LabelcheckError::Serialization(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;
        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// Render as ISO8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }

    /// Calendar date shown in report headers (`2026-01-15`).
    pub fn report_date(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// Compact date stamp used in default file names (`20260115`).
    pub fn file_stamp(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    /// PDF date string (`D:20260115120000Z`).
    pub fn to_pdf_date(&self) -> String {
        self.0.format("D:%Y%m%d%H%M%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}
