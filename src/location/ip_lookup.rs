//! IP-based geolocation
//!
//! Approximates the caller's city from their network origin using an
//! ipapi.co-style JSON endpoint. No parameters, no API key.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::IpLookupConfig;
use crate::error::WeatherDashError;
use crate::models::City;

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    city: String,
    region: String,
    country_name: String,
    latitude: f64,
    longitude: f64,
}

/// Client for the IP geolocation service
#[derive(Debug, Clone)]
pub struct IpLookupClient {
    client: Client,
    base_url: String,
}

impl IpLookupClient {
    /// Create a new IP lookup client
    pub fn new(config: &IpLookupConfig) -> Result<Self, WeatherDashError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(|e| WeatherDashError::general(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Look up an approximate city from the caller's network origin
    #[instrument(skip(self))]
    pub async fn lookup(&self) -> Result<City, WeatherDashError> {
        let url = format!("{}/json/", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherDashError::api(format!("IP geolocation request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherDashError::api(format!(
                "IP geolocation returned status {status}"
            )));
        }

        let body: IpLookupResponse = response.json().await.map_err(|e| {
            WeatherDashError::malformed(format!("Failed to parse IP geolocation response: {e}"))
        })?;

        debug!(
            "IP geolocated to {}, {} ({:.4}, {:.4})",
            body.city, body.region, body.latitude, body.longitude
        );

        Ok(City::new(
            body.city,
            body.region,
            body.country_name,
            body.latitude,
            body.longitude,
        ))
    }
}
