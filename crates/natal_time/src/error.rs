//! Error types for civil-time conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil-to-UTC conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string does not parse as `YYYY-MM-DD`.
    InvalidDate(String),
    /// Coerced time is outside the valid hour/minute range.
    InvalidTime(String),
    /// Timezone identifier is not in the IANA table.
    UnknownTimezone(String),
    /// Local wall-clock time does not exist (spring-forward gap).
    NonexistentLocalTime,
    /// No seasonal-offset entry for the place's country.
    UnknownCountry(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid date: {s:?}"),
            Self::InvalidTime(s) => write!(f, "invalid time: {s:?}"),
            Self::UnknownTimezone(s) => write!(f, "unknown timezone: {s:?}"),
            Self::NonexistentLocalTime => write!(f, "local time does not exist (DST gap)"),
            Self::UnknownCountry(s) => write!(f, "no seasonal offsets for country: {s:?}"),
        }
    }
}

impl Error for TimeError {}
