//! Offline mean-element positions, the chain's last tier.
//!
//! Linear mean longitudes from J2000 epoch values and daily rates. Good
//! to a few degrees for the Sun over decades, much rougher for the rest;
//! results are mock data for keeping a chart renderable when every real
//! source is down, and are always flagged as such.

use async_trait::async_trait;

use natal_angles::normalize_360;
use natal_geo::GeoPlace;
use natal_time::{J2000_JD, UtcInstant, julian_day};

use crate::error::ProviderError;
use crate::planet::Planet;
use crate::types::{PlanetFetch, PlanetaryPosition, PositionProvider, SourceTier};

/// `(planet, mean longitude at J2000 in degrees, degrees per day,
/// nominal distance in AU)`.
const MEAN_ELEMENTS: &[(Planet, f64, f64, f64)] = &[
    (Planet::Sun, 280.460, 0.985_647_4, 1.000),
    (Planet::Moon, 218.316, 13.176_396, 0.00257),
    (Planet::Mercury, 252.251, 4.092_339, 0.387),
    (Planet::Venus, 181.980, 1.602_130, 0.723),
    (Planet::Mars, 355.433, 0.524_039, 1.524),
    (Planet::Jupiter, 34.351, 0.083_056, 5.203),
    (Planet::Saturn, 50.077, 0.033_371, 9.537),
    (Planet::Uranus, 314.055, 0.011_698, 19.191),
    (Planet::Neptune, 304.348, 0.005_965, 30.069),
    (Planet::Pluto, 238.958, 0.003_964, 39.482),
];

/// Mean-element positions for every chart body at a UTC instant.
///
/// Pure and infallible; also used directly by the chain when every tier
/// has failed.
pub fn mean_positions(utc: &UtcInstant) -> Vec<PlanetFetch> {
    let days = julian_day(utc) - J2000_JD;
    let stamp = utc.to_string();

    MEAN_ELEMENTS
        .iter()
        .map(|&(planet, l0, rate, distance_au)| {
            PlanetFetch::Available(PlanetaryPosition {
                planet,
                longitude_deg: normalize_360(l0 + rate * days),
                latitude_deg: 0.0,
                distance_au,
                magnitude: None,
                source_timestamp: stamp.clone(),
            })
        })
        .collect()
}

/// The tertiary, offline source.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanElementsProvider;

#[async_trait]
impl PositionProvider for MeanElementsProvider {
    fn tier(&self) -> SourceTier {
        SourceTier::MockData
    }

    async fn fetch_positions(
        &self,
        utc: &UtcInstant,
        _place: &GeoPlace,
    ) -> Result<Vec<PlanetFetch>, ProviderError> {
        Ok(mean_positions(utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn j2000_noon() -> UtcInstant {
        UtcInstant::new(2000, 1, 1, 12, 0, 0.0)
    }

    #[test]
    fn covers_all_planets() {
        let fetches = mean_positions(&j2000_noon());
        assert_eq!(fetches.len(), 10);
        assert!(fetches.iter().all(PlanetFetch::is_available));
    }

    #[test]
    fn sun_at_j2000() {
        let fetches = mean_positions(&j2000_noon());
        let sun = fetches[0].position().unwrap();
        assert_eq!(sun.planet, Planet::Sun);
        // Sun near 280.46° (Capricorn) at the epoch
        assert!((sun.longitude_deg - 280.460).abs() < 1e-9);
    }

    #[test]
    fn sun_advances_about_a_degree_per_day() {
        let a = mean_positions(&UtcInstant::new(2002, 10, 3, 9, 0, 0.0));
        let b = mean_positions(&UtcInstant::new(2002, 10, 4, 9, 0, 0.0));
        let delta = normalize_360(
            b[0].position().unwrap().longitude_deg - a[0].position().unwrap().longitude_deg,
        );
        assert!((delta - 0.9856).abs() < 1e-3, "delta = {delta}");
    }

    #[test]
    fn longitudes_normalized() {
        let fetches = mean_positions(&UtcInstant::new(2100, 6, 1, 0, 0, 0.0));
        for f in &fetches {
            let lon = f.position().unwrap().longitude_deg;
            assert!((0.0..360.0).contains(&lon), "{lon}");
        }
    }

    #[test]
    fn deterministic() {
        let utc = UtcInstant::new(2002, 10, 3, 9, 0, 0.0);
        assert_eq!(mean_positions(&utc), mean_positions(&utc));
    }

    #[test]
    fn sun_autumn_2002_in_libra() {
        // Early October: Sun near 190° (Libra)
        let fetches = mean_positions(&UtcInstant::new(2002, 10, 3, 9, 0, 0.0));
        let lon = fetches[0].position().unwrap().longitude_deg;
        assert!((185.0..200.0).contains(&lon), "Sun at {lon}");
    }
}
