//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Literal fallback layout used by older rows (`YYYY-MM-DD HH:MM:SS`).
const LEGACY_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Offset-free ISO date-times, read as UTC.
const ISO_NAIVE_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Returns negative duration if other is after self.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Negative values subtract days.
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Creates a new timestamp by subtracting the specified number of days.
    pub fn minus_days(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    /// Day of the year, 1-based (1..=366).
    pub fn day_of_year(&self) -> u32 {
        self.0.ordinal()
    }

    /// Formats as RFC 3339, the shape every JSON response uses.
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }

    /// Compact `YYYYmmddHHMMSS` stamp used in generated family codes.
    pub fn compact_stamp(&self) -> String {
        self.0.format("%Y%m%d%H%M%S").to_string()
    }

    /// Parses a stored textual timestamp.
    ///
    /// ISO-8601 shapes are tried first: RFC 3339 with a `T` or space
    /// separator, then naive date-times read as UTC (seconds and fraction
    /// optional), then a bare `YYYY-MM-DD` read as midnight UTC. The legacy
    /// `YYYY-MM-DD HH:MM:SS` layout is tried last.
    pub fn parse_flexible(raw: &str) -> Option<Self> {
        let raw = raw.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self(dt.with_timezone(&Utc)));
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(&raw.replacen(' ', "T", 1)) {
            return Some(Self(dt.with_timezone(&Utc)));
        }

        for layout in ISO_NAIVE_LAYOUTS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, layout) {
                return Some(Self(naive.and_utc()));
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(Self(date.and_time(NaiveTime::MIN).and_utc()));
        }

        NaiveDateTime::parse_from_str(raw, LEGACY_LAYOUT)
            .ok()
            .map(|naive| Self(naive.and_utc()))
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}
