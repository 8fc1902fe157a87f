//! # Temporal Types — UTC-Only Timestamps
//!
//! Defines `Timestamp`, a UTC-only timestamp type truncated to millisecond
//! precision — the resolution carried by the signed payload, which encodes
//! the creation time as an 8-byte big-endian epoch-milliseconds value.
//!
//! ## Security Invariant
//!
//! Sub-millisecond components are discarded at construction. A timestamp
//! that survived construction renders to the same epoch-milliseconds value
//! everywhere, so signer and verifier cannot disagree on the signed bytes
//! because of precision drift in transport.
//!
//! Non-UTC inputs are rejected by the strict parser — there is no silent
//! offset conversion that could introduce ambiguity on the signing path.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::AttestError;

/// A UTC-only timestamp, truncated to millisecond precision.
///
/// # Construction
///
/// - [`Timestamp::now()`] — current UTC time, truncated.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`, truncating sub-milliseconds.
/// - [`Timestamp::from_epoch_millis()`] — from milliseconds since epoch.
/// - [`Timestamp::parse()`] — from an RFC 3339 string, rejecting non-UTC offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time, truncated to milliseconds.
    pub fn now() -> Self {
        Self(truncate_to_millis(Utc::now()))
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`, truncating
    /// sub-millisecond components.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_millis(dt))
    }

    /// Create a timestamp from milliseconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is outside chrono's representable range.
    pub fn from_epoch_millis(millis: i64) -> Result<Self, AttestError> {
        let dt = DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| AttestError::Timestamp(format!(
                "epoch milliseconds out of range: {millis}"
            )))?;
        Ok(Self(dt))
    }

    /// Parse a timestamp from an RFC 3339 string.
    ///
    /// **Rejects non-UTC inputs.** Only the `Z` suffix is accepted; explicit
    /// offsets are rejected even when semantically equivalent (`+00:00`).
    /// Sub-millisecond digits are truncated.
    pub fn parse(s: &str) -> Result<Self, AttestError> {
        if !s.ends_with('Z') {
            return Err(AttestError::Timestamp(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| AttestError::Timestamp(format!(
                "invalid RFC 3339 timestamp {s:?}: {e}"
            )))?;
        Ok(Self(truncate_to_millis(dt.with_timezone(&Utc))))
    }

    /// Milliseconds since the Unix epoch. This value, as 8 big-endian
    /// bytes, is what enters the signed payload.
    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as ISO8601 with exactly three fractional digits and Z suffix
    /// (e.g., `2026-01-15T12:00:00.000Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Truncate a `DateTime<Utc>` to millisecond precision.
fn truncate_to_millis(dt: DateTime<Utc>) -> DateTime<Utc> {
    let nanos = dt.nanosecond();
    dt.with_nanosecond((nanos / 1_000_000) * 1_000_000).unwrap_or(dt)
}
