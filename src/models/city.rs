//! City model: the resolved place that drives all forecast requests

use serde::{Deserialize, Serialize};

/// A resolved city with display labels and coordinates.
///
/// A `City` is a plain value: resolution and search always replace the
/// current city wholesale, nothing mutates one in place.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct City {
    /// Town or city name
    pub town: String,
    /// State / region label
    pub state: String,
    /// Country name
    pub country: String,
    /// (latitude, longitude) in decimal degrees
    pub location: (f64, f64),
}

impl City {
    /// Create a new city
    #[must_use]
    pub fn new(
        town: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            town: town.into(),
            state: state.into(),
            country: country.into(),
            location: (latitude, longitude),
        }
    }

    /// The static city used when every resolution strategy has failed.
    ///
    /// The coordinate pair is kept exactly as it has always shipped,
    /// longitude first.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            town: "New York (fallback)".to_string(),
            state: "New York".to_string(),
            country: "United States".to_string(),
            location: (-74.0060, 40.7128),
        }
    }

    /// Latitude component of the location pair
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.location.0
    }

    /// Longitude component of the location pair
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.location.1
    }

    /// Format the city as "Town, State, Country"
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}, {}, {}", self.town, self.state, self.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_city_is_pinned() {
        let city = City::fallback();
        assert_eq!(city.town, "New York (fallback)");
        assert_eq!(city.state, "New York");
        assert_eq!(city.country, "United States");
        assert_eq!(city.location, (-74.0060, 40.7128));
    }

    #[test]
    fn test_display_name() {
        let city = City::new("Austin", "Texas", "United States", 30.27, -97.74);
        assert_eq!(city.display_name(), "Austin, Texas, United States");
        assert_eq!(city.latitude(), 30.27);
        assert_eq!(city.longitude(), -97.74);
    }
}
