//! Sunrise/sunset sources for ghadi calculations.
//!
//! This crate provides:
//! - `DayBounds`: validated day (sunrise→sunset) and night (sunset→next sunrise) intervals
//! - `TimeSource` with manual-entry and ephemeris-lookup strategies
//! - The `SunEphemeris` seam and a TOML-backed `SunTable` implementation
//! - A registry of built-in cities

pub mod city;
pub mod error;
pub mod source;
pub mod sun_table;

pub use city::{CITIES, City, GeoLocation, find_city};
pub use error::SourceError;
pub use source::{AstronomicalSource, DayBounds, ManualSource, SunEphemeris, SunTimes, TimeSource};
pub use sun_table::SunTable;
