//! Error types for clock parsing, calendar validation and intervals.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from time input validation or interval construction.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Clock string is not a valid `HH:MM` time.
    InvalidTimeFormat(String),
    /// Year/month/day do not form a calendar date.
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Date or date-time string does not match the expected layout.
    InvalidDateFormat { input: String, expected: &'static str },
    /// Interval duration is zero or negative.
    InvalidInterval(&'static str),
    /// Wall-clock time does not map to exactly one instant in the zone.
    NonexistentLocalTime(String),
    /// Zone name is not in the IANA database.
    UnknownZone(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimeFormat(s) => write!(f, "invalid time '{s}': expected HH:MM"),
            Self::InvalidDate { year, month, day } => {
                write!(f, "invalid date: {year:04}-{month:02}-{day:02}")
            }
            Self::InvalidDateFormat { input, expected } => {
                write!(f, "invalid date '{input}': expected {expected}")
            }
            Self::InvalidInterval(msg) => write!(f, "invalid interval: {msg}"),
            Self::NonexistentLocalTime(s) => {
                write!(f, "local time {s} is ambiguous or does not exist in the zone")
            }
            Self::UnknownZone(name) => write!(f, "unknown time zone: {name}"),
        }
    }
}

impl Error for TimeError {}
