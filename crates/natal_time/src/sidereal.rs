//! Greenwich and local sidereal time.
//!
//! Both functions return hours in [0, 24). Sidereal arithmetic is
//! circular: normalization uses `rem_euclid`, so negative intermediates
//! (pre-J2000 Julian Dates, western longitudes) can never escape.

use crate::julian::J2000_JD;

/// Greenwich Sidereal Time in hours for a Julian Date.
///
/// `gst = 18.697374558 + 1.00273790935 × 24 × (jd − 2451545.0)`,
/// normalized into [0, 24).
pub fn greenwich_sidereal_hours(jd: f64) -> f64 {
    let gst = 18.697_374_558 + 1.002_737_909_35 * 24.0 * (jd - J2000_JD);
    gst.rem_euclid(24.0)
}

/// Local Sidereal Time from GST and observer east longitude.
///
/// East-positive longitude in degrees maps to hours via `/15`.
/// Returns hours in [0, 24).
pub fn local_sidereal_hours(gst_hours: f64, longitude_deg: f64) -> f64 {
    (gst_hours + longitude_deg / 15.0).rem_euclid(24.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gst_at_j2000_midnight() {
        // 2000-Jan-01 0h UT: GMST ≈ 6h 39m 52s ≈ 6.6645 h
        let gst = greenwich_sidereal_hours(2_451_544.5);
        assert!((gst - 6.6645).abs() < 0.01, "GST = {gst}");
    }

    #[test]
    fn gst_range_across_epochs() {
        for &jd in &[
            2_415_020.5, // 1900
            2_451_544.5,
            2_451_545.0,
            2_452_550.875,
            2_460_000.5,
            2_488_070.0, // 2100
        ] {
            let gst = greenwich_sidereal_hours(jd);
            assert!((0.0..24.0).contains(&gst), "GST out of range at {jd}: {gst}");
        }
    }

    #[test]
    fn gst_never_negative_before_j2000() {
        let gst = greenwich_sidereal_hours(2_400_000.5);
        assert!((0.0..24.0).contains(&gst), "GST = {gst}");
    }

    #[test]
    fn lst_east_longitude_adds() {
        let lst = local_sidereal_hours(12.0, 30.0);
        assert!((lst - 14.0).abs() < 1e-12);
    }

    #[test]
    fn lst_west_longitude_wraps() {
        let lst = local_sidereal_hours(1.0, -45.0);
        assert!((lst - 22.0).abs() < 1e-12);
    }

    #[test]
    fn lst_range() {
        for gst in [0.0, 6.0, 12.0, 23.9] {
            for lon in [-180.0, -74.0, 0.0, 2.2667, 179.9] {
                let lst = local_sidereal_hours(gst, lon);
                assert!((0.0..24.0).contains(&lst), "LST out of range: {lst}");
            }
        }
    }

    #[test]
    fn reference_moment_lst() {
        // 2002-10-03 09:00 UTC at Paris (2.2667° E): LST ≈ 9.944 h
        let gst = greenwich_sidereal_hours(2_452_550.875);
        let lst = local_sidereal_hours(gst, 2.2667);
        assert!((lst - 9.944).abs() < 0.01, "LST = {lst}");
    }
}
