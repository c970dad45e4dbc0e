// Relative Time Domain Model
//
// Turns two instants into a short English phrase ("3 hours ago").
// Months and years are fixed 30 / 360 day buckets, not calendar months.

use chrono::DateTime;
use std::fmt;
use thiserror::Error;

/// Instant in milliseconds since the Unix epoch
pub type EpochMillis = i64;

/// Canonical date-time pattern accepted by [`parse_date`]
///
/// Example: `2017-05-05 10:30:00 -0700`
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const MONTH_MS: i64 = 30 * DAY_MS;
const YEAR_MS: i64 = 12 * MONTH_MS;

/// Display unit of a relative time phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl TimeUnit {
    fn noun(self) -> &'static str {
        match self {
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }
}

/// Bounded rungs: (unit, bucket width, exclusive upper bound in bucket widths).
/// Anything past the last rung is counted in years.
const LADDER: [(TimeUnit, i64, i64); 4] = [
    (TimeUnit::Minute, MINUTE_MS, 60),
    (TimeUnit::Hour, HOUR_MS, 24),
    (TimeUnit::Day, DAY_MS, 30),
    (TimeUnit::Month, MONTH_MS, 12),
];

/// Classified elapsed time between two instants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTime {
    /// Less than one minute elapsed (or the event lies in the future)
    JustNow,
    /// `count` whole units elapsed, `count >= 1`
    Ago { count: i64, unit: TimeUnit },
}

impl RelativeTime {
    /// Classify the time elapsed from `event` until `reference`.
    ///
    /// An event after the reference is clamped to [`RelativeTime::JustNow`].
    pub fn between(event: EpochMillis, reference: EpochMillis) -> Self {
        let elapsed = reference.saturating_sub(event);
        if elapsed < MINUTE_MS {
            return RelativeTime::JustNow;
        }

        let (unit, width) = LADDER
            .iter()
            .find(|(_, width, limit)| elapsed / width < *limit)
            .map(|&(unit, width, _)| (unit, width))
            .unwrap_or((TimeUnit::Year, YEAR_MS));

        RelativeTime::Ago {
            count: elapsed / width,
            unit,
        }
    }
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeTime::JustNow => write!(f, "Just Now"),
            RelativeTime::Ago { count: 1, unit } => write!(f, "1 {} ago", unit.noun()),
            RelativeTime::Ago { count, unit } => write!(f, "{} {}s ago", count, unit.noun()),
        }
    }
}

/// Describe how long before `reference` the `event` happened.
///
/// Pure function of its two inputs. See [`RelativeTime::between`] for the
/// bucketing rules.
pub fn format_relative(event: EpochMillis, reference: EpochMillis) -> String {
    RelativeTime::between(event, reference).to_string()
}

/// Date-time string did not match [`DATE_TIME_FORMAT`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid date-time '{input}' (expected YYYY-MM-DD HH:MM:SS +HHMM): {reason}")]
pub struct FormatError {
    pub input: String,
    pub reason: String,
}

/// Parse a date-time in the canonical [`DATE_TIME_FORMAT`] into epoch millis
pub fn parse_date(input: &str) -> Result<EpochMillis, FormatError> {
    DateTime::parse_from_str(input, DATE_TIME_FORMAT)
        .map(|dt| dt.timestamp_millis())
        .map_err(|e| FormatError {
            input: input.to_string(),
            reason: e.to_string(),
        })
}
