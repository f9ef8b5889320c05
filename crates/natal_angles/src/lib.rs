//! Ecliptic angle computations for the chart engine.
//!
//! This crate provides:
//! - Ascendant and Midheaven longitudes from local sidereal time,
//!   latitude, and obliquity
//! - The 12-cusp house system and point-in-house lookup
//! - Zodiac sign and degree/minute placement for any ecliptic longitude
//! - Equatorial → ecliptic longitude conversion
//!
//! All angle arithmetic is pure and side-effect-free; longitudes are
//! degrees in [0, 360), circular.

pub mod equatorial;
pub mod horizon;
pub mod houses;
pub mod sign;
pub mod util;

pub use equatorial::equatorial_to_ecliptic_deg;
pub use horizon::{MAX_LATITUDE_DEG, OBLIQUITY_DEG, ascendant_deg, is_polar, midheaven_deg};
pub use houses::{HouseCusp, HouseMethod, HouseSystem, build_house_system, house_of};
pub use sign::{ALL_SIGNS, Sign, ZodiacPlacement, placement_of, sign_of};
pub use util::normalize_360;
