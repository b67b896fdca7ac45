//! Equal-duration partitioning of a day or night interval.
//!
//! The per-segment length is rounded to whole seconds once and reused for
//! every segment. Boundaries are produced by repeated addition, so the last
//! segment can end up to `n * 0.5` seconds away from the interval end when
//! the span is not a whole multiple of `n` seconds. That drift is kept as is.
//!
//! Rounding is half away from zero (`f64::round`), not half to even. The two
//! only differ when the exact per-segment length ends in `.5` s, which needs
//! second-resolution sunrise/sunset: a 43215 s day gives 1441 s ghadis here,
//! where half-to-even would give 1440 s. `HH:MM` inputs always divide evenly
//! into 30 and are unaffected.

use chrono::TimeDelta;
use ghadi_time::{TimeError, TimeInterval};

use crate::error::GhadiError;

/// Number of ghadis in one day or one night.
pub const GHADI_COUNT: u32 = 30;

/// Seconds in each of `n` equal segments of a `total_seconds` span,
/// rounded half away from zero.
pub fn seconds_per_segment(total_seconds: f64, n: u32) -> Result<i64, GhadiError> {
    if n == 0 {
        return Err(GhadiError::InvalidSegmentCount(n));
    }
    if total_seconds.is_nan() || total_seconds <= 0.0 {
        return Err(TimeError::InvalidInterval("duration must be positive").into());
    }
    let per = (total_seconds / f64::from(n)).round() as i64;
    if per == 0 {
        return Err(TimeError::InvalidInterval("segments shorter than one second").into());
    }
    Ok(per)
}

/// Split `interval` into `n` segments of equal, whole-second duration.
pub fn partition(interval: &TimeInterval, n: u32) -> Result<Vec<TimeDelta>, GhadiError> {
    let per = seconds_per_segment(interval.duration_seconds(), n)?;
    Ok(vec![TimeDelta::seconds(per); n as usize])
}

/// Seconds by which the summed `durations` overshoot (positive) or fall
/// short of (negative) the interval.
pub fn cumulative_drift_seconds(interval: &TimeInterval, durations: &[TimeDelta]) -> f64 {
    let sum: TimeDelta = durations.iter().copied().sum();
    let sum_s = sum.num_seconds() as f64 + f64::from(sum.subsec_nanos()) / 1e9;
    sum_s - interval.duration_seconds()
}
