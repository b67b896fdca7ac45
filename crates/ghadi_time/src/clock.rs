//! Wall-clock `HH:MM` times as entered for sunrise and sunset.

use std::str::FromStr;

use chrono::NaiveTime;

use crate::error::TimeError;

/// A wall-clock time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Create a clock time, rejecting out-of-range fields.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 {
            return Err(TimeError::InvalidTimeFormat(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    /// Parse `HH:MM` (24-hour). A single-digit hour or minute is accepted.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let invalid = || TimeError::InvalidTimeFormat(s.to_string());
        let (h, m) = s.trim().split_once(':').ok_or_else(invalid)?;
        let hour = parse_field(h).ok_or_else(invalid)?;
        let minute = parse_field(m).ok_or_else(invalid)?;
        Self::new(hour, minute).map_err(|_| invalid())
    }

    pub fn hour(self) -> u32 {
        self.hour
    }

    pub fn minute(self) -> u32 {
        self.minute
    }

    /// As a `chrono` naive time at second zero.
    pub fn to_naive_time(self) -> NaiveTime {
        // Fields are range-checked on construction.
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

fn parse_field(s: &str) -> Option<u32> {
    if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
