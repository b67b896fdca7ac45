//! One-call ghadi calculation: request in, Morning and Evening schedules out.

use chrono::{Datelike, NaiveDate};
use ghadi_base::{
    Batch, EveningLabel, GHADI_COUNT, LabelPolicy, Schedule, ScheduleRow, Vaar, active_flags,
    build_schedule, locate,
};
use ghadi_config::GhadiConfig;
use ghadi_source::{DayBounds, ManualSource, TimeSource};
use ghadi_time::{ClockTime, Instant, ReferenceZone, calendar_date, format_clock, format_date};
use serde::Serialize;

use crate::error::GhadiyaluError;

/// Parameters shared by every way of obtaining sunrise and sunset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleOptions {
    pub segments_per_batch: u32,
    pub evening_label: EveningLabel,
    pub zone: ReferenceZone,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            segments_per_batch: GHADI_COUNT,
            evening_label: EveningLabel::Rollover,
            zone: ReferenceZone::default(),
        }
    }
}

impl ScheduleOptions {
    pub fn from_config(config: &GhadiConfig) -> Result<Self, GhadiyaluError> {
        Ok(Self {
            segments_per_batch: config.segments_per_batch,
            evening_label: config.evening_label,
            zone: config.reference_zone()?,
        })
    }
}

/// A calculation for manually entered sunrise and sunset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationRequest {
    pub date: NaiveDate,
    pub sunrise: ClockTime,
    pub sunset: ClockTime,
    pub segments_per_batch: u32,
    pub evening_label: EveningLabel,
    pub zone: ReferenceZone,
}

impl CalculationRequest {
    /// Request with the default 30 ghadis, rollover labels and `Asia/Kolkata`.
    pub fn new(date: NaiveDate, sunrise: ClockTime, sunset: ClockTime) -> Self {
        Self::with_options(date, sunrise, sunset, ScheduleOptions::default())
    }

    pub fn with_options(
        date: NaiveDate,
        sunrise: ClockTime,
        sunset: ClockTime,
        options: ScheduleOptions,
    ) -> Self {
        Self {
            date,
            sunrise,
            sunset,
            segments_per_batch: options.segments_per_batch,
            evening_label: options.evening_label,
            zone: options.zone,
        }
    }

    /// Validate raw date components and `HH:MM` strings.
    pub fn parse(
        year: i32,
        month: u32,
        day: u32,
        sunrise: &str,
        sunset: &str,
    ) -> Result<Self, GhadiyaluError> {
        let date = calendar_date(year, month, day)?;
        Ok(Self::new(date, ClockTime::parse(sunrise)?, ClockTime::parse(sunset)?))
    }

    pub fn with_evening_label(mut self, evening_label: EveningLabel) -> Self {
        self.evening_label = evening_label;
        self
    }

    pub fn with_segments(mut self, segments_per_batch: u32) -> Self {
        self.segments_per_batch = segments_per_batch;
        self
    }

    pub fn with_zone(mut self, zone: ReferenceZone) -> Self {
        self.zone = zone;
        self
    }

    pub fn options(&self) -> ScheduleOptions {
        ScheduleOptions {
            segments_per_batch: self.segments_per_batch,
            evening_label: self.evening_label,
            zone: self.zone,
        }
    }
}

/// Where "now" falls across both schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActiveGhadi {
    #[serde(serialize_with = "serialize_batch")]
    pub batch: Batch,
    pub index: u32,
}

fn serialize_batch<S: serde::Serializer>(batch: &Batch, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(batch.name())
}

/// Both schedules for one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationResult {
    pub date: NaiveDate,
    pub bounds: DayBounds,
    /// Sunrise to sunset.
    pub morning: Schedule,
    /// Sunset to next sunrise.
    pub evening: Schedule,
}

impl CalculationResult {
    pub fn sunrise(&self) -> Instant {
        self.bounds.sunrise()
    }

    pub fn sunset(&self) -> Instant {
        self.bounds.sunset()
    }

    pub fn next_sunrise(&self) -> Instant {
        self.bounds.next_sunrise()
    }

    /// Weekday of the calculation date.
    pub fn vaar(&self) -> Vaar {
        Vaar::from_weekday(self.date.weekday())
    }

    /// `dd/mm/YYYY | Weekday`
    pub fn date_line(&self) -> String {
        format!("{} | {}", format_date(self.date), self.vaar())
    }

    /// `Sunrise: HH:MM:SS | Sunset: HH:MM:SS`
    pub fn sun_line(&self) -> String {
        format!(
            "Sunrise: {} | Sunset: {}",
            format_clock(self.sunrise().time()),
            format_clock(self.sunset().time())
        )
    }

    pub fn schedule(&self, batch: Batch) -> &Schedule {
        match batch {
            Batch::Morning => &self.morning,
            Batch::Evening => &self.evening,
        }
    }

    /// Morning rows followed by evening rows.
    pub fn combined_rows(&self) -> Vec<ScheduleRow> {
        let mut rows = self.morning.rows();
        rows.extend(self.evening.rows());
        rows
    }

    /// Every row of both schedules with its running flag.
    pub fn active_rows(&self, now: &Instant) -> Vec<(ScheduleRow, bool)> {
        let mut flags = active_flags(&self.morning, now);
        flags.extend(active_flags(&self.evening, now));
        self.combined_rows().into_iter().zip(flags).collect()
    }

    /// The running ghadi, checking the morning schedule first.
    pub fn locate(&self, now: &Instant) -> Option<ActiveGhadi> {
        [Batch::Morning, Batch::Evening].into_iter().find_map(|batch| {
            locate(self.schedule(batch), now).map(|index| ActiveGhadi { batch, index })
        })
    }

    /// Serializable snapshot of the result, marking the ghadi running at `now`.
    pub fn report(&self, now: Option<&Instant>) -> Report {
        Report {
            date: format_date(self.date),
            weekday: self.vaar().english_name().to_string(),
            sunrise: format_clock(self.sunrise().time()),
            sunset: format_clock(self.sunset().time()),
            next_sunrise: format_clock(self.next_sunrise().time()),
            zone: self.sunrise().timezone().name().to_string(),
            morning: self.morning.rows(),
            evening: self.evening.rows(),
            active: now.and_then(|n| self.locate(n)),
        }
    }
}

/// Flat, serializable form of a [`CalculationResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub date: String,
    pub weekday: String,
    pub sunrise: String,
    pub sunset: String,
    pub next_sunrise: String,
    pub zone: String,
    pub morning: Vec<ScheduleRow>,
    pub evening: Vec<ScheduleRow>,
    pub active: Option<ActiveGhadi>,
}

/// Compute both schedules from manually entered sunrise and sunset.
pub fn calculate(request: &CalculationRequest) -> Result<CalculationResult, GhadiyaluError> {
    let source = ManualSource::new(request.sunrise, request.sunset);
    calculate_from(&source, request.date, &request.options())
}

/// Compute both schedules with sunrise and sunset from any [`TimeSource`].
///
/// Either both schedules are produced or an error is returned.
pub fn calculate_from<S: TimeSource + ?Sized>(
    source: &S,
    date: NaiveDate,
    options: &ScheduleOptions,
) -> Result<CalculationResult, GhadiyaluError> {
    let bounds = source.day_bounds(date, options.zone)?;
    let morning = build_schedule(
        &bounds.day(),
        options.segments_per_batch,
        Batch::Morning,
        LabelPolicy::Rollover,
    )?;
    let evening = build_schedule(
        &bounds.night(),
        options.segments_per_batch,
        Batch::Evening,
        options.evening_label.policy_for(&bounds.sunset()),
    )?;
    tracing::debug!(
        %date,
        sunrise = %bounds.sunrise(),
        sunset = %bounds.sunset(),
        next_sunrise = %bounds.next_sunrise(),
        "calculated ghadi schedules"
    );
    Ok(CalculationResult {
        date,
        bounds,
        morning,
        evening,
    })
}
