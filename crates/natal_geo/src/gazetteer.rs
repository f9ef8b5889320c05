//! Geographic place records and the compiled-in city table.
//!
//! The table is loaded once into a [`crate::Gazetteer`] at engine
//! construction and never mutated. Entry order matters: the first row is
//! the designated fallback place for unresolved queries.

use serde::Serialize;

/// Geographic place on Earth's surface, with the timezone and country
/// information needed for civil-time conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPlace {
    /// Display name, `"City, Country"`.
    pub name: &'static str,
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in kilometres. Never negative.
    pub altitude_km: f64,
    /// IANA timezone identifier, e.g. `"Europe/Paris"`.
    pub timezone_id: &'static str,
    /// Country name, feeds the seasonal-offset heuristic.
    pub country: &'static str,
}

impl GeoPlace {
    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

const fn place(
    name: &'static str,
    latitude_deg: f64,
    longitude_deg: f64,
    altitude_km: f64,
    timezone_id: &'static str,
    country: &'static str,
) -> GeoPlace {
    GeoPlace {
        name,
        latitude_deg,
        longitude_deg,
        altitude_km,
        timezone_id,
        country,
    }
}

/// Compiled-in gazetteer. First entry is the fallback place.
pub const GAZETTEER: &[GeoPlace] = &[
    place("Paris, France", 48.8566, 2.3522, 0.035, "Europe/Paris", "France"),
    place("London, United Kingdom", 51.5074, -0.1278, 0.011, "Europe/London", "United Kingdom"),
    place("Berlin, Germany", 52.5200, 13.4050, 0.034, "Europe/Berlin", "Germany"),
    place("Madrid, Spain", 40.4168, -3.7038, 0.650, "Europe/Madrid", "Spain"),
    place("Rome, Italy", 41.9028, 12.4964, 0.021, "Europe/Rome", "Italy"),
    place("Lisbon, Portugal", 38.7223, -9.1393, 0.002, "Europe/Lisbon", "Portugal"),
    place("Dublin, Ireland", 53.3498, -6.2603, 0.020, "Europe/Dublin", "Ireland"),
    place("Brussels, Belgium", 50.8503, 4.3517, 0.013, "Europe/Brussels", "Belgium"),
    place("Amsterdam, Netherlands", 52.3676, 4.9041, 0.0, "Europe/Amsterdam", "Netherlands"),
    place("Zurich, Switzerland", 47.3769, 8.5417, 0.408, "Europe/Zurich", "Switzerland"),
    place("Vienna, Austria", 48.2082, 16.3738, 0.193, "Europe/Vienna", "Austria"),
    place("Warsaw, Poland", 52.2297, 21.0122, 0.100, "Europe/Warsaw", "Poland"),
    place("Stockholm, Sweden", 59.3293, 18.0686, 0.028, "Europe/Stockholm", "Sweden"),
    place("Oslo, Norway", 59.9139, 10.7522, 0.023, "Europe/Oslo", "Norway"),
    place("Copenhagen, Denmark", 55.6761, 12.5683, 0.001, "Europe/Copenhagen", "Denmark"),
    place("Athens, Greece", 37.9838, 23.7275, 0.070, "Europe/Athens", "Greece"),
    place("Istanbul, Turkey", 41.0082, 28.9784, 0.039, "Europe/Istanbul", "Turkey"),
    place("Moscow, Russia", 55.7558, 37.6173, 0.156, "Europe/Moscow", "Russia"),
    place("New York, United States", 40.7128, -74.0060, 0.010, "America/New_York", "United States"),
    place("Los Angeles, United States", 34.0522, -118.2437, 0.093, "America/Los_Angeles", "United States"),
    place("Chicago, United States", 41.8781, -87.6298, 0.181, "America/Chicago", "United States"),
    place("Toronto, Canada", 43.6532, -79.3832, 0.076, "America/Toronto", "Canada"),
    place("Mexico City, Mexico", 19.4326, -99.1332, 2.240, "America/Mexico_City", "Mexico"),
    place("Sao Paulo, Brazil", -23.5505, -46.6333, 0.760, "America/Sao_Paulo", "Brazil"),
    place("Buenos Aires, Argentina", -34.6037, -58.3816, 0.025, "America/Argentina/Buenos_Aires", "Argentina"),
    place("Tokyo, Japan", 35.6762, 139.6503, 0.040, "Asia/Tokyo", "Japan"),
    place("Shanghai, China", 31.2304, 121.4737, 0.004, "Asia/Shanghai", "China"),
    place("New Delhi, India", 28.6139, 77.2090, 0.216, "Asia/Kolkata", "India"),
    place("Sydney, Australia", -33.8688, 151.2093, 0.058, "Australia/Sydney", "Australia"),
    place("Cairo, Egypt", 30.0444, 31.2357, 0.023, "Africa/Cairo", "Egypt"),
    place("Casablanca, Morocco", 33.5731, -7.5898, 0.027, "Africa/Casablanca", "Morocco"),
    place("Dakar, Senegal", 14.7167, -17.4677, 0.022, "Africa/Dakar", "Senegal"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_entry_is_paris() {
        assert_eq!(GAZETTEER[0].name, "Paris, France");
    }

    #[test]
    fn coordinates_in_range() {
        for p in GAZETTEER {
            assert!(
                (-90.0..=90.0).contains(&p.latitude_deg),
                "{}: latitude {}",
                p.name,
                p.latitude_deg
            );
            assert!(
                (-180.0..=180.0).contains(&p.longitude_deg),
                "{}: longitude {}",
                p.name,
                p.longitude_deg
            );
            assert!(p.altitude_km >= 0.0, "{}: altitude {}", p.name, p.altitude_km);
        }
    }

    #[test]
    fn timezone_and_country_nonempty() {
        for p in GAZETTEER {
            assert!(!p.timezone_id.is_empty(), "{}", p.name);
            assert!(!p.country.is_empty(), "{}", p.name);
        }
    }

    #[test]
    fn radians_helpers() {
        let paris = GAZETTEER[0];
        assert!((paris.latitude_rad() - 48.8566_f64.to_radians()).abs() < 1e-15);
        assert!((paris.longitude_rad() - 2.3522_f64.to_radians()).abs() < 1e-15);
    }
}
