//! Equatorial → ecliptic coordinate conversion.
//!
//! Used by ingestion sources that report right ascension and
//! declination rather than ecliptic longitude.

use crate::util::normalize_360;

/// Ecliptic longitude in degrees from equatorial RA/Dec.
///
/// `λ = atan2(sin α · cos ε + tan δ · sin ε, cos α)`
pub fn equatorial_to_ecliptic_deg(ra_deg: f64, dec_deg: f64, obliquity_deg: f64) -> f64 {
    let ra = ra_deg.to_radians();
    let dec = dec_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let sin_lon = ra.sin() * eps.cos() + dec.tan() * eps.sin();
    let lon = f64::atan2(sin_lon, ra.cos());
    normalize_360(lon.to_degrees())
}
