//! House-cusp computation and point-in-house lookup.
//!
//! Equal-arc division anchored on the Ascendant, with house 10's cusp
//! pinned to the Midheaven. All 12 cusps are built atomically as one
//! [`HouseSystem`]; a chart never carries a partial cusp list.

use serde::Serialize;

use crate::util::normalize_360;

/// House division method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HouseMethod {
    /// Equal 30° arcs from the Ascendant, MC overriding cusp 10.
    EqualAsc,
}

impl HouseMethod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::EqualAsc => "equal-asc",
        }
    }
}

impl std::fmt::Display for HouseMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single house cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseCusp {
    /// House number, 1..=12.
    pub house: u8,
    /// Ecliptic longitude of the cusp in degrees, [0, 360).
    pub cusp_deg: f64,
}

/// The full 12-house division for one chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseSystem {
    pub method: HouseMethod,
    /// Ascendant longitude in degrees; cusp of house 1.
    pub ascendant_deg: f64,
    /// Midheaven longitude in degrees; cusp of house 10.
    pub mc_deg: f64,
    /// Geodetic latitude the system was built for.
    pub latitude_deg: f64,
    /// Cusps ordered by house number.
    pub cusps: [HouseCusp; 12],
}

impl HouseSystem {
    /// Descendant longitude (opposite the Ascendant).
    pub fn descendant_deg(&self) -> f64 {
        normalize_360(self.ascendant_deg + 180.0)
    }

    /// Imum Coeli longitude (opposite the MC).
    pub fn ic_deg(&self) -> f64 {
        normalize_360(self.mc_deg + 180.0)
    }
}

/// Build the house system for a chart.
///
/// Cusp `i` (1-based) sits at `ascendant + (i-1)·30°` wrapped mod 360,
/// except cusp 10 which is the Midheaven itself.
pub fn build_house_system(ascendant_deg: f64, mc_deg: f64, latitude_deg: f64) -> HouseSystem {
    let ascendant_deg = normalize_360(ascendant_deg);
    let mc_deg = normalize_360(mc_deg);

    let mut cusps = [HouseCusp {
        house: 0,
        cusp_deg: 0.0,
    }; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = HouseCusp {
            house: (i as u8) + 1,
            cusp_deg: normalize_360(ascendant_deg + (i as f64) * 30.0),
        };
    }
    cusps[9].cusp_deg = mc_deg;

    HouseSystem {
        method: HouseMethod::EqualAsc,
        ascendant_deg,
        mc_deg,
        latitude_deg,
        cusps,
    }
}

/// House containing an ecliptic longitude.
///
/// Walks the ordered cusps treating each house as the half-open arc
/// `[cusp_i, cusp_(i+1))`, extending the end by 360° when it numerically
/// precedes the start. Defaults to house 1 when no interval matches,
/// a defined fallback rather than a panic.
pub fn house_of(longitude_deg: f64, houses: &HouseSystem) -> u8 {
    let lon = normalize_360(longitude_deg);
    for i in 0..12 {
        let start = houses.cusps[i].cusp_deg;
        let mut end = houses.cusps[(i + 1) % 12].cusp_deg;
        if end <= start {
            end += 360.0;
        }
        let mut l = lon;
        if l < start {
            l += 360.0;
        }
        if l >= start && l < end {
            return houses.cusps[i].house;
        }
    }
    1
}
