//! Day and night intervals between two instants.

use chrono::TimeDelta;

use crate::Instant;
use crate::error::TimeError;
use crate::zone::next_calendar_day;

/// A half-open span of time with `end > start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    start: Instant,
    end: Instant,
}

impl TimeInterval {
    /// Create an interval, rejecting zero or negative spans.
    pub fn new(start: Instant, end: Instant) -> Result<Self, TimeError> {
        if end <= start {
            return Err(TimeError::InvalidInterval("end is not after start"));
        }
        Ok(Self { start, end })
    }

    /// Create an interval, first moving `end` one calendar day later if it
    /// does not come after `start` (e.g. a sunset entered before sunrise).
    pub fn normalized(start: Instant, end: Instant) -> Result<Self, TimeError> {
        let end = if end <= start {
            tracing::warn!(%start, %end, "end not after start, advancing end by one day");
            next_calendar_day(&end)?
        } else {
            end
        };
        Self::new(start, end)
    }

    pub fn start(&self) -> Instant {
        self.start
    }

    pub fn end(&self) -> Instant {
        self.end
    }

    /// Elapsed time from start to end.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Elapsed seconds, including any sub-second part.
    pub fn duration_seconds(&self) -> f64 {
        let d = self.duration();
        d.num_seconds() as f64 + f64::from(d.subsec_nanos()) / 1e9
    }
}
