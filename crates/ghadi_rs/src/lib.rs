//! Convenience API for ghadi schedules.
//!
//! Takes a date plus sunrise and sunset (entered by hand or looked up for a
//! city) and returns the Morning and Evening schedules of 30 ghadis each,
//! without having to assemble zones, intervals and label policies by hand.
//!
//! # Quick start
//!
//! ```rust
//! use ghadi_rs::*;
//!
//! let request = CalculationRequest::parse(2024, 1, 15, "06:00", "18:00")?;
//! let result = calculate(&request)?;
//! assert_eq!(result.morning.len(), 30);
//! for row in result.combined_rows() {
//!     println!("{} {} {} {}", row.batch, row.index, row.start_time, row.end_time);
//! }
//! # Ok::<(), GhadiyaluError>(())
//! ```

pub mod calculation;
pub mod error;

// Primary re-exports: users should only need `use ghadi_rs::*`
pub use calculation::{
    ActiveGhadi, CalculationRequest, CalculationResult, Report, ScheduleOptions, calculate,
    calculate_from,
};
pub use error::GhadiyaluError;

// Re-export building blocks so callers don't need the lower crates directly.
pub use ghadi_base::{
    Batch, EveningLabel, GHADI_COUNT, LabelPolicy, ROW_HEADERS, Schedule, ScheduleRow,
    ScheduleSegment, Vaar,
};
pub use ghadi_config::GhadiConfig;
pub use ghadi_source::{
    AstronomicalSource, CITIES, City, DayBounds, ManualSource, SourceError, SunEphemeris,
    SunTable, SunTimes, TimeSource, find_city,
};
pub use ghadi_time::{ClockTime, Instant, ReferenceZone, TimeError, calendar_date, parse_iso_date};
