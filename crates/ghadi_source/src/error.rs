//! Error types for sunrise/sunset sources.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ghadi_time::TimeError;

/// Errors from resolving day boundaries.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SourceError {
    /// Error from time validation.
    Time(TimeError),
    /// City name is not in the registry.
    UnknownCity(String),
    /// The ephemeris could not supply sunrise/sunset.
    Ephemeris(String),
    /// Sun table content is malformed.
    Table(String),
    /// I/O error.
    Io(String),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "{e}"),
            Self::UnknownCity(name) => write!(f, "unknown city: {name}"),
            Self::Ephemeris(msg) => write!(f, "ephemeris error: {msg}"),
            Self::Table(msg) => write!(f, "sun table error: {msg}"),
            Self::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for SourceError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
