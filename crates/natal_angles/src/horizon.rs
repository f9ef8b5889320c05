//! Ascendant and Midheaven from local sidereal time.
//!
//! Standard spherical astronomy (Meeus, "Astronomical Algorithms",
//! Chapter 13). The Ascendant sign convention here is the one validated
//! against the engine's reference birth chart; see
//! `tests/reference_chart.rs`.

use crate::util::normalize_360;

/// Mean obliquity of the ecliptic in degrees, J2000.0.
pub const OBLIQUITY_DEG: f64 = 23.439_291_1;

/// Latitude bound beyond which `tan(latitude)` is no longer trusted.
///
/// Latitudes at or past this bound are clamped for the computation and
/// the chart is flagged as degraded by the caller.
pub const MAX_LATITUDE_DEG: f64 = 89.9;

/// Whether a latitude falls in the polar clamp region.
pub fn is_polar(latitude_deg: f64) -> bool {
    latitude_deg.abs() >= MAX_LATITUDE_DEG
}

/// Ecliptic longitude of the Midheaven in degrees.
///
/// `MC = (lst × 15) mod 360`: the right ascension of the meridian used
/// directly as an ecliptic longitude.
pub fn midheaven_deg(lst_hours: f64) -> f64 {
    normalize_360(lst_hours * 15.0)
}

/// Ecliptic longitude of the Ascendant in degrees.
///
/// `Asc = atan2(cos L, -(sin L · cos ε + tan φ · sin ε))`
/// where `L = lst × 15°`, `φ` = latitude, `ε` = obliquity.
///
/// Returns a value in [0, 360). Never panics: latitudes past
/// [`MAX_LATITUDE_DEG`] are clamped before the tangent.
pub fn ascendant_deg(lst_hours: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let lst_rad = (lst_hours * 15.0).to_radians();
    let lat_rad = latitude_deg
        .clamp(-MAX_LATITUDE_DEG, MAX_LATITUDE_DEG)
        .to_radians();
    let obl_rad = obliquity_deg.to_radians();

    let asc = f64::atan2(
        lst_rad.cos(),
        -(lst_rad.sin() * obl_rad.cos() + lat_rad.tan() * obl_rad.sin()),
    );
    normalize_360(asc.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mc_is_lst_in_degrees() {
        assert!((midheaven_deg(0.0) - 0.0).abs() < 1e-12);
        assert!((midheaven_deg(6.0) - 90.0).abs() < 1e-12);
        assert!((midheaven_deg(18.0) - 270.0).abs() < 1e-12);
    }

    #[test]
    fn mc_wraps() {
        assert!((midheaven_deg(24.0) - 0.0).abs() < 1e-12);
        assert!((midheaven_deg(25.0) - 15.0).abs() < 1e-12);
    }

    /// At the equator with LST = 0, the vernal equinox culminates and the
    /// rising point of the ecliptic is at longitude 90°.
    #[test]
    fn ascendant_equator_lst_zero() {
        let asc = ascendant_deg(0.0, 0.0, OBLIQUITY_DEG);
        assert!((asc - 90.0).abs() < 1e-9, "Asc = {asc}");
    }

    /// Ascendant sweeps the full circle as LST sweeps 0..24h.
    #[test]
    fn ascendant_sweeps_full_circle() {
        let mut min_asc = f64::MAX;
        let mut max_asc = f64::MIN;
        for i in 0..1440 {
            let lst = 24.0 * (i as f64) / 1440.0;
            let asc = ascendant_deg(lst, 48.8844, OBLIQUITY_DEG);
            min_asc = min_asc.min(asc);
            max_asc = max_asc.max(asc);
        }
        assert!(min_asc < 3.0, "min = {min_asc}");
        assert!(max_asc > 357.0, "max = {max_asc}");
    }

    #[test]
    fn ascendant_always_in_range() {
        for lst in [0.0, 3.7, 9.944, 12.0, 17.2, 23.99] {
            for lat in [-66.0, -23.5, 0.0, 28.6, 48.88, 66.5] {
                let asc = ascendant_deg(lst, lat, OBLIQUITY_DEG);
                assert!((0.0..360.0).contains(&asc), "Asc({lst}, {lat}) = {asc}");
            }
        }
    }

    #[test]
    fn ascendant_polar_latitudes_do_not_panic() {
        for lat in [89.9, 90.0, -90.0, -89.95] {
            let asc = ascendant_deg(9.944, lat, OBLIQUITY_DEG);
            assert!((0.0..360.0).contains(&asc), "Asc at {lat} = {asc}");
        }
    }

    #[test]
    fn polar_predicate() {
        assert!(is_polar(90.0));
        assert!(is_polar(-89.9));
        assert!(!is_polar(89.8));
        assert!(!is_polar(48.88));
    }
}
