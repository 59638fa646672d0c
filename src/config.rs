//! Configuration management for the weatherdash application
//!
//! Handles loading configuration from files and environment variables,
//! and provides validation for all configuration settings.

use crate::WeatherDashError;
use crate::models::UnitPreferences;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the weatherdash application
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WeatherDashConfig {
    /// Forecast provider configuration
    #[serde(default)]
    pub forecast: ForecastApiConfig,
    /// Geocoding service configuration (forward search + reverse lookup)
    #[serde(default)]
    pub geocoding: GeocodingConfig,
    /// IP geolocation service configuration
    #[serde(default)]
    pub ip_lookup: IpLookupConfig,
    /// Device location fix, when the deployment has one
    #[serde(default)]
    pub device: DeviceConfig,
    /// Default display unit preferences
    #[serde(default)]
    pub units: UnitPreferences,
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Forecast provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastApiConfig {
    /// Base URL for the Open-Meteo forecast API
    #[serde(default = "default_forecast_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_forecast_timeout")]
    pub timeout_seconds: u32,
}

/// Geocoding service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL for the Open-Meteo geocoding API (city name search)
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,
    /// Base URL for the Nominatim reverse geocoding API
    #[serde(default = "default_reverse_base_url")]
    pub reverse_base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_lookup_timeout")]
    pub timeout_seconds: u32,
}

/// IP geolocation service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpLookupConfig {
    /// Base URL for the ipapi.co-style lookup service
    #[serde(default = "default_ip_lookup_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_lookup_timeout")]
    pub timeout_seconds: u32,
}

/// Pinned device coordinates. When both are set they act as the platform
/// location fix; when absent the device strategy reports the capability as
/// unavailable and the resolver falls through.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeviceConfig {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the API server binds to
    #[serde(default = "default_server_port")]
    pub port: u16,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_search_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_reverse_base_url() -> String {
    "https://nominatim.openstreetmap.org".to_string()
}

fn default_ip_lookup_base_url() -> String {
    "https://ipapi.co".to_string()
}

fn default_forecast_timeout() -> u32 {
    30
}

fn default_lookup_timeout() -> u32 {
    10
}

fn default_server_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ForecastApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_forecast_base_url(),
            timeout_seconds: default_forecast_timeout(),
        }
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            search_base_url: default_search_base_url(),
            reverse_base_url: default_reverse_base_url(),
            timeout_seconds: default_lookup_timeout(),
        }
    }
}

impl Default for IpLookupConfig {
    fn default() -> Self {
        Self {
            base_url: default_ip_lookup_base_url(),
            timeout_seconds: default_lookup_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl WeatherDashConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment variable overrides with WEATHERDASH_ prefix,
        // e.g. WEATHERDASH_FORECAST__BASE_URL
        builder = builder.add_source(
            Environment::with_prefix("WEATHERDASH")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: WeatherDashConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("weatherdash").join("config.toml"))
    }

    /// The pinned device coordinates, when both components are configured
    #[must_use]
    pub fn device_coordinates(&self) -> Option<(f64, f64)> {
        match (self.device.latitude, self.device.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_urls()?;
        self.validate_numeric_ranges()?;
        self.validate_logging()?;
        Ok(())
    }

    fn validate_urls(&self) -> Result<()> {
        for (name, url) in [
            ("forecast.base_url", &self.forecast.base_url),
            ("geocoding.search_base_url", &self.geocoding.search_base_url),
            (
                "geocoding.reverse_base_url",
                &self.geocoding.reverse_base_url,
            ),
            ("ip_lookup.base_url", &self.ip_lookup.base_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(WeatherDashError::config(format!(
                    "{name} must be a valid HTTP or HTTPS URL"
                ))
                .into());
            }
        }
        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.forecast.timeout_seconds == 0 || self.forecast.timeout_seconds > 300 {
            return Err(WeatherDashError::config(
                "Forecast timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        if self.geocoding.timeout_seconds == 0 || self.geocoding.timeout_seconds > 300 {
            return Err(WeatherDashError::config(
                "Geocoding timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        if self.ip_lookup.timeout_seconds == 0 || self.ip_lookup.timeout_seconds > 300 {
            return Err(WeatherDashError::config(
                "IP lookup timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        if let Some(lat) = self.device.latitude
            && !(-90.0..=90.0).contains(&lat)
        {
            return Err(
                WeatherDashError::config("Device latitude must be between -90 and 90").into(),
            );
        }

        if let Some(lon) = self.device.longitude
            && !(-180.0..=180.0).contains(&lon)
        {
            return Err(
                WeatherDashError::config("Device longitude must be between -180 and 180").into(),
            );
        }

        Ok(())
    }

    fn validate_logging(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WeatherDashError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(WeatherDashError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        Ok(())
    }
}
