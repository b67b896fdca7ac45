//! Reference-zone time handling for ghadi schedules.
//!
//! This crate provides:
//! - `Instant`, a zone-aware point in time (`chrono` + `chrono-tz`)
//! - `ReferenceZone`, the single zone a calculation is anchored to
//! - `ClockTime` parsing for `HH:MM` sunrise/sunset inputs
//! - Calendar date validation and the row display formats
//! - `TimeInterval` with midnight-rollover normalization

pub mod calendar;
pub mod clock;
pub mod error;
pub mod interval;
pub mod zone;

pub use calendar::{calendar_date, format_clock, format_date, parse_iso_date};
pub use clock::ClockTime;
pub use error::TimeError;
pub use interval::TimeInterval;
pub use zone::{DEFAULT_ZONE, ReferenceZone, next_calendar_day};

/// A zone-aware point in time.
pub type Instant = chrono::DateTime<chrono_tz::Tz>;

pub use chrono::{NaiveDate, NaiveTime, TimeDelta};
