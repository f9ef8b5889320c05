//! Temporal conversions for the chart engine.
//!
//! This crate provides:
//! - [`UtcInstant`], the canonical UTC representation consumed by every
//!   downstream component; timezone logic never leaks past this crate
//! - Civil-to-UTC conversion behind the [`UtcStrategy`] trait, with a
//!   timezone-table implementation and a seasonal-offset heuristic
//! - Gregorian calendar → Julian Day conversion
//! - Greenwich and local sidereal time

pub mod civil;
pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;

pub use civil::{
    ConversionFlags, SeasonalHeuristicStrategy, TimeSource, TzTableStrategy, UtcStrategy,
    coerce_time, convert_with_fallback,
};
pub use error::TimeError;
pub use instant::UtcInstant;
pub use julian::{J2000_JD, calendar_from_jd, julian_day, julian_day_number};
pub use sidereal::{greenwich_sidereal_hours, local_sidereal_hours};
