//! The single reference time zone every calculation is anchored to.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::Instant;
use crate::error::TimeError;

/// IANA name of the zone used when none is configured.
pub const DEFAULT_ZONE: &str = "Asia/Kolkata";

/// Reference zone for localizing wall-clock inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceZone(Tz);

impl ReferenceZone {
    /// Look up a zone by IANA name, e.g. `"Asia/Kolkata"`.
    pub fn from_name(name: &str) -> Result<Self, TimeError> {
        name.parse::<Tz>()
            .map(Self)
            .map_err(|_| TimeError::UnknownZone(name.to_string()))
    }

    pub fn tz(self) -> Tz {
        self.0
    }

    pub fn name(self) -> &'static str {
        self.0.name()
    }

    /// Attach this zone to a wall-clock date and time.
    ///
    /// Fails when the local time is skipped or repeated by a zone transition.
    pub fn localize(self, date: NaiveDate, time: NaiveTime) -> Result<Instant, TimeError> {
        self.localize_naive(date.and_time(time))
    }

    pub fn localize_naive(self, naive: NaiveDateTime) -> Result<Instant, TimeError> {
        self.0
            .from_local_datetime(&naive)
            .single()
            .ok_or_else(|| TimeError::NonexistentLocalTime(naive.to_string()))
    }

    /// Convert any instant into this zone.
    pub fn convert<Z: TimeZone>(self, instant: &chrono::DateTime<Z>) -> Instant {
        instant.with_timezone(&self.0)
    }

    /// Current instant in this zone.
    pub fn now(self) -> Instant {
        Utc::now().with_timezone(&self.0)
    }
}

impl Default for ReferenceZone {
    fn default() -> Self {
        Self(chrono_tz::Asia::Kolkata)
    }
}

impl From<Tz> for ReferenceZone {
    fn from(tz: Tz) -> Self {
        Self(tz)
    }
}

/// Advance an instant by one calendar day, keeping its wall-clock time.
pub fn next_calendar_day(instant: &Instant) -> Result<Instant, TimeError> {
    instant
        .checked_add_days(Days::new(1))
        .ok_or_else(|| TimeError::NonexistentLocalTime(instant.naive_local().to_string()))
}
