//! Static gazetteer and birth-place resolution.
//!
//! This crate provides:
//! - [`GeoPlace`], the immutable geographic record used by every
//!   downstream component (timezone conversion, sidereal time, angles)
//! - A compiled-in gazetteer of world cities
//! - [`Gazetteer::resolve`], exact/partial/fallback name matching with a
//!   [`MatchConfidence`] the host application can surface to the user

pub mod gazetteer;
pub mod resolver;

pub use gazetteer::{GAZETTEER, GeoPlace};
pub use resolver::{Gazetteer, MatchConfidence, PlaceResolution};
