//! Reverse geocoding via Nominatim (OpenStreetMap)
//!
//! Converts a coordinate pair into town/state/country labels. Free, no API
//! key; Nominatim's usage policy requires a descriptive user agent.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::GeocodingConfig;
use crate::error::WeatherDashError;
use crate::location::device::Coordinates;
use crate::models::City;

const USER_AGENT: &str = concat!("weatherdash/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    address: Option<Address>,
}

#[derive(Debug, Deserialize)]
struct Address {
    town: Option<String>,
    city: Option<String>,
    village: Option<String>,
    state: Option<String>,
    country: Option<String>,
}

/// Client for the Nominatim `/reverse` endpoint
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Client,
    base_url: String,
}

impl NominatimClient {
    /// Create a new reverse geocoding client
    pub fn new(config: &GeocodingConfig) -> Result<Self, WeatherDashError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| WeatherDashError::general(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.reverse_base_url.clone(),
        })
    }

    /// Resolve coordinates to a city with human-readable labels.
    ///
    /// Any failure (transport, non-success status, missing `address` labels)
    /// is an error; the resolver treats it as a fall-through, never a crash.
    #[instrument(skip(self), fields(lat = coords.latitude, lon = coords.longitude))]
    pub async fn reverse(&self, coords: Coordinates) -> Result<City, WeatherDashError> {
        let url = format!(
            "{}/reverse?format=json&lat={}&lon={}",
            self.base_url, coords.latitude, coords.longitude
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherDashError::api(format!("Reverse geocoding request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherDashError::api(format!(
                "Reverse geocoding returned status {status}"
            )));
        }

        let body: ReverseResponse = response.json().await.map_err(|e| {
            WeatherDashError::malformed(format!("Failed to parse reverse geocoding response: {e}"))
        })?;

        let address = body
            .address
            .ok_or_else(|| WeatherDashError::malformed("Reverse geocoding response has no address"))?;

        // Nominatim labels the place under town, city or village depending
        // on the settlement size; take the first present.
        let town = address
            .town
            .or(address.city)
            .or(address.village)
            .ok_or_else(|| {
                WeatherDashError::malformed("Reverse geocoding address has no town label")
            })?;
        let state = address
            .state
            .ok_or_else(|| WeatherDashError::malformed("Reverse geocoding address has no state"))?;
        let country = address.country.ok_or_else(|| {
            WeatherDashError::malformed("Reverse geocoding address has no country")
        })?;

        debug!("Reverse geocoded to {}, {}, {}", town, state, country);

        Ok(City::new(
            town,
            state,
            country,
            coords.latitude,
            coords.longitude,
        ))
    }
}
