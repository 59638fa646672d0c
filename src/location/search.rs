//! Forward geocoding: city name search via the Open-Meteo geocoding API
//!
//! Powers the explicit search path, which bypasses the resolver chain by
//! supplying a [`City`] directly.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::GeocodingConfig;
use crate::error::WeatherDashError;
use crate::models::City;

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    admin1: Option<String>,
}

impl From<GeocodingResult> for City {
    fn from(result: GeocodingResult) -> Self {
        City::new(
            result.name,
            result.admin1.unwrap_or_default(),
            result.country.unwrap_or_else(|| "Unknown".to_string()),
            result.latitude,
            result.longitude,
        )
    }
}

/// Client for the Open-Meteo geocoding search API
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl SearchClient {
    /// Create a new search client
    pub fn new(config: &GeocodingConfig) -> Result<Self, WeatherDashError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(|e| WeatherDashError::general(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.search_base_url.clone(),
        })
    }

    /// Search for cities matching a name, best matches first
    #[instrument(skip(self))]
    pub async fn search(&self, name: &str) -> Result<Vec<City>, WeatherDashError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WeatherDashError::validation("Search query cannot be empty"));
        }

        let url = format!(
            "{}/search?name={}&count=5&language=en&format=json",
            self.base_url,
            urlencoding::encode(name)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherDashError::api(format!("Geocoding search request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherDashError::api(format!(
                "Geocoding search returned status {status}"
            )));
        }

        let body: GeocodingResponse = response.json().await.map_err(|e| {
            WeatherDashError::malformed(format!("Failed to parse geocoding search response: {e}"))
        })?;

        let cities: Vec<City> = body
            .results
            .unwrap_or_default()
            .into_iter()
            .map(City::from)
            .collect();

        if cities.is_empty() {
            warn!("No results found for '{}'", name);
        } else {
            debug!("Found {} candidates for '{}'", cities.len(), name);
        }

        Ok(cities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocoding_result_to_city() {
        let result = GeocodingResult {
            name: "Austin".to_string(),
            latitude: 30.27,
            longitude: -97.74,
            country: Some("United States".to_string()),
            admin1: Some("Texas".to_string()),
        };

        let city: City = result.into();
        assert_eq!(city.town, "Austin");
        assert_eq!(city.state, "Texas");
        assert_eq!(city.country, "United States");
        assert_eq!(city.location, (30.27, -97.74));
    }

    #[test]
    fn test_geocoding_result_missing_labels() {
        let result = GeocodingResult {
            name: "Somewhere".to_string(),
            latitude: 1.0,
            longitude: 2.0,
            country: None,
            admin1: None,
        };

        let city: City = result.into();
        assert_eq!(city.state, "");
        assert_eq!(city.country, "Unknown");
    }
}
