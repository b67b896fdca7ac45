//! A [`SunEphemeris`] backed by a table of precomputed sunrise/sunset times.
//!
//! The table is TOML with one `[[entry]]` per city and date:
//!
//! ```toml
//! [[entry]]
//! city = "Hyderabad"
//! date = "2024-01-15"
//! sunrise = "06:47:12"
//! sunset = "18:03"
//! ```
//!
//! Times are wall-clock times in the calculation's reference zone, with or
//! without seconds.

use std::collections::HashMap;
use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use ghadi_time::{ClockTime, ReferenceZone};
use serde::Deserialize;

use crate::city::City;
use crate::error::SourceError;
use crate::source::{SunEphemeris, SunTimes};

#[derive(Debug, Deserialize)]
struct SunTableFile {
    #[serde(default, rename = "entry")]
    entries: Vec<SunTableEntry>,
}

#[derive(Debug, Deserialize)]
struct SunTableEntry {
    city: String,
    date: String,
    sunrise: String,
    sunset: String,
}

/// Sunrise/sunset lookup from a loaded table.
#[derive(Debug, Clone, Default)]
pub struct SunTable {
    rows: HashMap<(String, NaiveDate), (NaiveTime, NaiveTime)>,
}

impl SunTable {
    /// Load a table from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a table from TOML text. Later entries for the same city and
    /// date replace earlier ones.
    pub fn parse(content: &str) -> Result<Self, SourceError> {
        let file: SunTableFile =
            toml::from_str(content).map_err(|e| SourceError::Table(e.to_string()))?;
        let mut rows = HashMap::with_capacity(file.entries.len());
        for entry in file.entries {
            let date = NaiveDate::parse_from_str(entry.date.trim(), "%Y-%m-%d")
                .map_err(|_| SourceError::Table(format!("invalid date '{}'", entry.date)))?;
            let sunrise = parse_sun_clock(&entry.sunrise)?;
            let sunset = parse_sun_clock(&entry.sunset)?;
            rows.insert((entry.city.trim().to_lowercase(), date), (sunrise, sunset));
        }
        tracing::debug!(entries = rows.len(), "loaded sun table");
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn parse_sun_clock(s: &str) -> Result<NaiveTime, SourceError> {
    let s = s.trim();
    if let Ok(t) = NaiveTime::parse_from_str(s, "%H:%M:%S") {
        return Ok(t);
    }
    Ok(ClockTime::parse(s)?.to_naive_time())
}

impl SunEphemeris for SunTable {
    fn sun_times(
        &self,
        city: &City,
        date: NaiveDate,
        zone: ReferenceZone,
    ) -> Result<SunTimes, SourceError> {
        let (sunrise, sunset) = self
            .rows
            .get(&(city.name.to_lowercase(), date))
            .ok_or_else(|| {
                SourceError::Ephemeris(format!("no entry for {} on {date}", city.name))
            })?;
        Ok(SunTimes {
            sunrise: zone.localize(date, *sunrise)?,
            sunset: zone.localize(date, *sunset)?,
        })
    }
}
