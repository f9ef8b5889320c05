//! Zodiac sign and degree/minute placement.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees,
//! Aries at 0°. Placements are always derived from an ecliptic
//! longitude on demand, never cached.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// The 12 zodiac signs, Aries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (Aries = 0 .. Pisces = 11).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries = 0 .. Pisces = 11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }
}

impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Position within a sign: whole degrees and rounded arc-minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZodiacPlacement {
    pub sign: Sign,
    /// Whole degrees within the sign, [0, 30).
    pub degrees: u8,
    /// Rounded arc-minutes, [0, 60).
    pub minutes: u8,
}

impl std::fmt::Display for ZodiacPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}' {}", self.degrees, self.minutes, self.sign)
    }
}

/// Sign containing an ecliptic longitude.
pub fn sign_of(longitude_deg: f64) -> Sign {
    let lon = normalize_360(longitude_deg);
    // Clamp guards the floating-point edge at exactly 360.0
    let index = ((lon / 30.0).floor() as usize).min(11);
    ALL_SIGNS[index]
}

/// Sign plus degrees/minutes within the sign.
///
/// Minutes are rounded; a carry at 60 increments the degrees, and a
/// carry at 30 degrees rolls into the next sign, so the result never
/// shows `minutes == 60` or `degrees == 30`.
pub fn placement_of(longitude_deg: f64) -> ZodiacPlacement {
    let lon = normalize_360(longitude_deg);
    let mut index = ((lon / 30.0).floor() as usize).min(11);
    let in_sign = lon - (index as f64) * 30.0;

    let mut degrees = in_sign.floor() as u8;
    let mut minutes = ((in_sign - degrees as f64) * 60.0).round() as u8;
    if minutes == 60 {
        minutes = 0;
        degrees += 1;
        if degrees == 30 {
            degrees = 0;
            index = (index + 1) % 12;
        }
    }

    ZodiacPlacement {
        sign: ALL_SIGNS[index],
        degrees,
        minutes,
    }
}
