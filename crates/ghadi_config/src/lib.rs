//! Configuration for ghadi calculations.
//!
//! Settings come from a TOML file; every field is optional and falls back
//! to the built-in default:
//!
//! ```toml
//! zone = "Asia/Kolkata"
//! segments_per_batch = 30
//! evening_label = "fixed_to_evening_date"   # or "rollover"
//! sunrise = "06:00"
//! sunset = "18:00"
//! city = "Hyderabad"
//! sun_table = "sun_times.toml"
//! ```
//!
//! The file is located by, in order: an explicit path, the `GHADI_CONFIG`
//! environment variable, then `ghadiyalu.toml` in the working directory.

mod error;

pub use error::ConfigError;

use std::path::{Path, PathBuf};

use ghadi_base::{EveningLabel, GHADI_COUNT};
use ghadi_time::{ClockTime, DEFAULT_ZONE, ReferenceZone};
use serde::{Deserialize, Serialize};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "GHADI_CONFIG";

/// Config file looked for in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "ghadiyalu.toml";

/// Calculation defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GhadiConfig {
    /// IANA name of the reference zone.
    pub zone: String,
    /// Ghadis per batch.
    pub segments_per_batch: u32,
    /// Evening date/weekday labelling.
    pub evening_label: EveningLabel,
    /// Default sunrise, `HH:MM`.
    pub sunrise: String,
    /// Default sunset, `HH:MM`.
    pub sunset: String,
    /// Default city for ephemeris lookups.
    pub city: Option<String>,
    /// Precomputed sunrise/sunset table. Relative paths resolve against the
    /// config file's directory.
    pub sun_table: Option<PathBuf>,
}

impl Default for GhadiConfig {
    fn default() -> Self {
        Self {
            zone: DEFAULT_ZONE.to_string(),
            segments_per_batch: GHADI_COUNT,
            evening_label: EveningLabel::Rollover,
            sunrise: "06:00".to_string(),
            sunset: "18:00".to_string(),
            city: None,
            sun_table: None,
        }
    }
}

impl GhadiConfig {
    /// Parse and validate TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        if let (Some(table), Some(dir)) = (&config.sun_table, path.parent()) {
            if table.is_relative() {
                config.sun_table = Some(dir.join(table));
            }
        }
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from `path`, else `$GHADI_CONFIG`, else `./ghadiyalu.toml`,
    /// else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(p) = path {
            return Self::load(p);
        }
        if let Some(p) = std::env::var_os(CONFIG_ENV) {
            return Self::load(Path::new(&p));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::load(local);
        }
        Ok(Self::default())
    }

    /// Check every field that can be checked without I/O.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.reference_zone()?;
        if self.segments_per_batch == 0 {
            return Err(ConfigError::InvalidValue {
                field: "segments_per_batch",
                reason: "must be at least 1".into(),
            });
        }
        self.default_sunrise()?;
        self.default_sunset()?;
        Ok(())
    }

    pub fn reference_zone(&self) -> Result<ReferenceZone, ConfigError> {
        ReferenceZone::from_name(&self.zone).map_err(|e| ConfigError::InvalidValue {
            field: "zone",
            reason: e.to_string(),
        })
    }

    pub fn default_sunrise(&self) -> Result<ClockTime, ConfigError> {
        ClockTime::parse(&self.sunrise).map_err(|e| ConfigError::InvalidValue {
            field: "sunrise",
            reason: e.to_string(),
        })
    }

    pub fn default_sunset(&self) -> Result<ClockTime, ConfigError> {
        ClockTime::parse(&self.sunset).map_err(|e| ConfigError::InvalidValue {
            field: "sunset",
            reason: e.to_string(),
        })
    }
}
