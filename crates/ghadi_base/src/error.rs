//! Error types for ghadi partitioning and schedule construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

use ghadi_time::TimeError;

/// Errors from partitioning an interval or building a schedule.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GhadiError {
    /// Error from time validation (including zero/negative intervals).
    Time(TimeError),
    /// Requested number of segments is zero.
    InvalidSegmentCount(u32),
}

impl Display for GhadiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "{e}"),
            Self::InvalidSegmentCount(n) => {
                write!(f, "invalid segment count {n}: must be at least 1")
            }
        }
    }
}

impl Error for GhadiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::InvalidSegmentCount(_) => None,
        }
    }
}

impl From<TimeError> for GhadiError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
