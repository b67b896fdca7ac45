//! Unified error type for the convenience API.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ghadi_base::GhadiError;
use ghadi_config::ConfigError;
use ghadi_source::SourceError;
use ghadi_time::TimeError;

/// Any failure of a ghadi calculation.
///
/// Input validation errors from every layer surface as [`Self::Time`], so
/// callers can match on the [`TimeError`] kind directly.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GhadiyaluError {
    /// Invalid time, date, zone or interval.
    Time(TimeError),
    /// Invalid schedule parameters.
    Ghadi(GhadiError),
    /// Sunrise/sunset lookup failed.
    Source(SourceError),
    /// Configuration could not be used.
    Config(ConfigError),
}

impl Display for GhadiyaluError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "{e}"),
            Self::Ghadi(e) => write!(f, "{e}"),
            Self::Source(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
        }
    }
}

impl Error for GhadiyaluError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Ghadi(e) => Some(e),
            Self::Source(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<TimeError> for GhadiyaluError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<GhadiError> for GhadiyaluError {
    fn from(e: GhadiError) -> Self {
        match e {
            GhadiError::Time(t) => Self::Time(t),
            other => Self::Ghadi(other),
        }
    }
}

impl From<SourceError> for GhadiyaluError {
    fn from(e: SourceError) -> Self {
        match e {
            SourceError::Time(t) => Self::Time(t),
            other => Self::Source(other),
        }
    }
}

impl From<ConfigError> for GhadiyaluError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
