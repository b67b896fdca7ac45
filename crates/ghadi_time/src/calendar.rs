//! Calendar date validation and the display formats used in schedule rows.

use chrono::{NaiveDate, NaiveTime};

use crate::error::TimeError;

/// Build a calendar date, rejecting impossible combinations such as Feb 30.
pub fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, TimeError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(TimeError::InvalidDate { year, month, day })
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, TimeError> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| TimeError::InvalidDateFormat {
        input: s.to_string(),
        expected: "YYYY-MM-DD",
    })
}

/// `dd/mm/YYYY`, the date column format.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `HH:MM:SS`, the start/end column format.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}
