//! Where sunrise and sunset come from.
//!
//! A [`TimeSource`] turns a calendar date into the three instants a ghadi
//! calculation needs: sunrise, sunset and the following sunrise. Two
//! strategies are provided: [`ManualSource`] for user-entered clock times
//! and [`AstronomicalSource`] for a city looked up through a [`SunEphemeris`].

use chrono::NaiveDate;
use ghadi_time::{ClockTime, Instant, ReferenceZone, TimeInterval, next_calendar_day};

use crate::city::City;
use crate::error::SourceError;

/// Sunrise, sunset and next sunrise for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBounds {
    day: TimeInterval,
    night: TimeInterval,
}

impl DayBounds {
    /// Validate and assemble the day and night intervals.
    ///
    /// A sunset not after sunrise is moved one calendar day later.
    pub fn new(
        sunrise: Instant,
        sunset: Instant,
        next_sunrise: Instant,
    ) -> Result<Self, SourceError> {
        let day = TimeInterval::normalized(sunrise, sunset)?;
        let night = TimeInterval::new(day.end(), next_sunrise)?;
        Ok(Self { day, night })
    }

    /// Sunrise to sunset.
    pub fn day(&self) -> TimeInterval {
        self.day
    }

    /// Sunset to next sunrise.
    pub fn night(&self) -> TimeInterval {
        self.night
    }

    pub fn sunrise(&self) -> Instant {
        self.day.start()
    }

    pub fn sunset(&self) -> Instant {
        self.day.end()
    }

    pub fn next_sunrise(&self) -> Instant {
        self.night.end()
    }
}

/// Supplies day boundaries for a date in a reference zone.
pub trait TimeSource {
    fn day_bounds(&self, date: NaiveDate, zone: ReferenceZone) -> Result<DayBounds, SourceError>;
}

/// Sunrise and sunset entered as wall-clock times.
///
/// The next sunrise is taken as the same clock time one calendar day later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualSource {
    pub sunrise: ClockTime,
    pub sunset: ClockTime,
}

impl ManualSource {
    pub fn new(sunrise: ClockTime, sunset: ClockTime) -> Self {
        Self { sunrise, sunset }
    }

    /// Parse `HH:MM` sunrise and sunset strings.
    pub fn parse(sunrise: &str, sunset: &str) -> Result<Self, SourceError> {
        Ok(Self::new(ClockTime::parse(sunrise)?, ClockTime::parse(sunset)?))
    }
}

impl TimeSource for ManualSource {
    fn day_bounds(&self, date: NaiveDate, zone: ReferenceZone) -> Result<DayBounds, SourceError> {
        let sunrise = zone.localize(date, self.sunrise.to_naive_time())?;
        let sunset = zone.localize(date, self.sunset.to_naive_time())?;
        let next_sunrise = next_calendar_day(&sunrise)?;
        tracing::debug!(%date, %sunrise, %sunset, "manual day bounds");
        DayBounds::new(sunrise, sunset, next_sunrise)
    }
}

/// Sunrise and sunset for one place and date, as an ephemeris reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: Instant,
    pub sunset: Instant,
}

/// External sun-position collaborator.
pub trait SunEphemeris {
    /// Sunrise and sunset at `city` on `date`, expressed in `zone`.
    fn sun_times(
        &self,
        city: &City,
        date: NaiveDate,
        zone: ReferenceZone,
    ) -> Result<SunTimes, SourceError>;
}

impl<E: SunEphemeris + ?Sized> SunEphemeris for &E {
    fn sun_times(
        &self,
        city: &City,
        date: NaiveDate,
        zone: ReferenceZone,
    ) -> Result<SunTimes, SourceError> {
        (**self).sun_times(city, date, zone)
    }
}

/// Day boundaries from an ephemeris for a fixed city.
///
/// The night runs to the ephemeris sunrise of the following date.
#[derive(Debug, Clone)]
pub struct AstronomicalSource<E> {
    ephemeris: E,
    city: City,
}

impl<E: SunEphemeris> AstronomicalSource<E> {
    pub fn new(ephemeris: E, city: City) -> Self {
        Self { ephemeris, city }
    }

    pub fn city(&self) -> &City {
        &self.city
    }
}

impl<E: SunEphemeris> TimeSource for AstronomicalSource<E> {
    fn day_bounds(&self, date: NaiveDate, zone: ReferenceZone) -> Result<DayBounds, SourceError> {
        let next_date = date
            .succ_opt()
            .ok_or_else(|| SourceError::Ephemeris(format!("no date after {date}")))?;
        let today = self.ephemeris.sun_times(&self.city, date, zone)?;
        let tomorrow = self.ephemeris.sun_times(&self.city, next_date, zone)?;
        tracing::debug!(
            city = self.city.name,
            %date,
            sunrise = %today.sunrise,
            sunset = %today.sunset,
            next_sunrise = %tomorrow.sunrise,
            "ephemeris day bounds"
        );
        DayBounds::new(
            zone.convert(&today.sunrise),
            zone.convert(&today.sunset),
            zone.convert(&tomorrow.sunrise),
        )
    }
}
