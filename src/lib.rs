//! `weatherdash` - weather dashboard backend
//!
//! This library resolves the user's current city through a fallback chain
//! (device fix, reverse geocoding, IP lookup, static default), fetches
//! Open-Meteo forecasts and normalizes them into the dashboard's fixed-size
//! hourly/daily sequences, and builds the map embed URL.

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod forecast;
pub mod location;
pub mod map;
pub mod models;
pub mod session;
pub mod web;

// Re-export core types for public API
pub use config::WeatherDashConfig;
pub use error::WeatherDashError;
pub use forecast::ForecastClient;
pub use location::{DeviceLocation, LocationResolver, SearchClient};
pub use models::{City, UnitPreferences, WeatherData, WeatherDescription};
pub use session::Session;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherDashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
