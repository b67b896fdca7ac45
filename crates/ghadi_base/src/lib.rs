//! Ghadi schedules: equal division of the day and night into 30 ghadis.
//!
//! This crate provides:
//! - Interval partitioning with a fixed, whole-second ghadi length
//! - Morning/Evening schedule construction with date/weekday labelling
//! - Active-ghadi lookup for a given instant
//! - Flat display rows for tables and exports
//!
//! Everything here is pure computation on [`ghadi_time`] values.

pub mod error;
pub mod locate;
pub mod partition;
pub mod row;
pub mod schedule;
pub mod vaar;

pub use error::GhadiError;
pub use locate::{active_flags, is_active, locate};
pub use partition::{GHADI_COUNT, cumulative_drift_seconds, partition, seconds_per_segment};
pub use row::{ROW_HEADERS, ScheduleRow};
pub use schedule::{Batch, EveningLabel, LabelPolicy, Schedule, ScheduleSegment, build_schedule};
pub use vaar::{ALL_VAARS, Vaar};
