//! Static city registry.
//!
//! The dashboard tracks a fixed, hand-authored set of cities. This is
//! immutable reference data with no lifecycle beyond process start.

use serde::Serialize;

/// A monitored city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    /// Display name
    pub name: &'static str,
    /// URL slug, also the CSV file-name prefix
    pub id: &'static str,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
    /// Country display name
    pub country: &'static str,
    /// Optional region/continent label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<&'static str>,
    /// Optional IANA timezone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<&'static str>,
}

/// Slug of the city whose series is used when a per-city CSV is missing.
pub const DEFAULT_CITY_ID: &str = "tokyo";

static CITIES: &[City] = &[
    City {
        name: "Tokyo",
        id: "tokyo",
        lat: 35.6762,
        lng: 139.6503,
        country: "Japan",
        region: Some("Asia"),
        timezone: Some("Asia/Tokyo"),
    },
    City {
        name: "Paris",
        id: "paris",
        lat: 48.8566,
        lng: 2.3522,
        country: "France",
        region: Some("Europe"),
        timezone: Some("Europe/Paris"),
    },
    City {
        name: "New York",
        id: "new-york",
        lat: 40.7128,
        lng: -74.0060,
        country: "United States",
        region: Some("North America"),
        timezone: Some("America/New_York"),
    },
    City {
        name: "London",
        id: "london",
        lat: 51.5074,
        lng: -0.1278,
        country: "United Kingdom",
        region: Some("Europe"),
        timezone: Some("Europe/London"),
    },
    City {
        name: "Lagos",
        id: "lagos",
        lat: 6.5244,
        lng: 3.3792,
        country: "Nigeria",
        region: Some("Africa"),
        timezone: Some("Africa/Lagos"),
    },
    City {
        name: "Mumbai",
        id: "mumbai",
        lat: 19.0760,
        lng: 72.8777,
        country: "India",
        region: Some("Asia"),
        timezone: Some("Asia/Kolkata"),
    },
    City {
        name: "Tehran",
        id: "tehran",
        lat: 35.6892,
        lng: 51.3890,
        country: "Iran",
        region: Some("Asia"),
        timezone: Some("Asia/Tehran"),
    },
    City {
        name: "Moscow",
        id: "moscow",
        lat: 55.7558,
        lng: 37.6173,
        country: "Russia",
        region: Some("Europe"),
        timezone: Some("Europe/Moscow"),
    },
    City {
        name: "Sao Paulo",
        id: "sao-paulo",
        lat: -23.5505,
        lng: -46.6333,
        country: "Brazil",
        region: Some("South America"),
        timezone: Some("America/Sao_Paulo"),
    },
    City {
        name: "Jakarta",
        id: "jakarta",
        lat: -6.2088,
        lng: 106.8456,
        country: "Indonesia",
        region: Some("Asia"),
        timezone: Some("Asia/Jakarta"),
    },
];

/// All monitored cities, in registry order.
pub fn cities() -> &'static [City] {
    CITIES
}

/// Look up a city by its slug.
pub fn city_by_id(id: &str) -> Option<&'static City> {
    CITIES.iter().find(|c| c.id == id)
}

/// The fallback city used when a per-city CSV is missing.
pub fn default_city() -> &'static City {
    // The registry always contains the default city.
    city_by_id(DEFAULT_CITY_ID).unwrap_or(&CITIES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_city() {
        let city = city_by_id("paris").unwrap();
        assert_eq!(city.name, "Paris");
        assert_eq!(city.country, "France");
    }

    #[test]
    fn test_lookup_unknown_city() {
        assert!(city_by_id("atlantis").is_none());
    }

    #[test]
    fn test_default_city_is_registered() {
        assert_eq!(default_city().id, DEFAULT_CITY_ID);
    }

    #[test]
    fn test_slugs_are_unique() {
        let mut ids: Vec<&str> = cities().iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), cities().len());
    }
}
