//! Built-in cities and their geographic coordinates.

use crate::error::SourceError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub const fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }
}

/// A named place an ephemeris can be asked about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    pub name: &'static str,
    pub location: GeoLocation,
}

const fn city(name: &'static str, latitude_deg: f64, longitude_deg: f64) -> City {
    City {
        name,
        location: GeoLocation::new(latitude_deg, longitude_deg),
    }
}

/// Cities available for sunrise/sunset lookup.
pub const CITIES: [City; 14] = [
    city("Hyderabad", 17.385044, 78.486671),
    city("Mumbai", 19.075983, 72.877655),
    city("Delhi", 28.613939, 77.209021),
    city("Bengaluru", 12.971599, 77.594566),
    city("Chennai", 13.082680, 80.270718),
    city("Kolkata", 22.572646, 88.363895),
    city("Pune", 18.520430, 73.856743),
    city("Jaipur", 26.912434, 75.787271),
    city("Ahmedabad", 23.022505, 72.571362),
    city("Lucknow", 26.846708, 80.946159),
    city("Eluru", 16.7100, 81.1000),
    city("Rajahmundry", 16.9902, 81.7893),
    city("Vijayawada", 16.5062, 80.6480),
    city("Visakapatnam", 17.6868, 83.2185),
];

/// Look up a built-in city, ignoring case.
pub fn find_city(name: &str) -> Result<&'static City, SourceError> {
    let name = name.trim();
    CITIES
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| SourceError::UnknownCity(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let c = find_city("hyderabad").unwrap();
        assert_eq!(c.name, "Hyderabad");
        assert!((c.location.latitude_deg - 17.385044).abs() < 1e-9);
    }

    #[test]
    fn unknown_city() {
        assert_eq!(
            find_city("Atlantis"),
            Err(SourceError::UnknownCity("Atlantis".into()))
        );
    }

    #[test]
    fn coordinates_in_range() {
        for c in CITIES {
            assert!((-90.0..=90.0).contains(&c.location.latitude_deg), "{}", c.name);
            assert!((-180.0..=180.0).contains(&c.location.longitude_deg), "{}", c.name);
        }
    }

    #[test]
    fn names_unique() {
        for (i, a) in CITIES.iter().enumerate() {
            for b in &CITIES[i + 1..] {
                assert!(!a.name.eq_ignore_ascii_case(b.name));
            }
        }
    }
}
