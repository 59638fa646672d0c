//! Normalized weather data for the dashboard

use serde::{Deserialize, Serialize};

use crate::models::units::TemperatureUnit;

/// Number of entries in a populated hourly sequence
pub const HOURLY_WINDOW: usize = 12;

/// Number of entries in a populated daily sequence
pub const DAILY_DAYS: usize = 7;

/// Weather condition categories mapped from WMO weather codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherDescription {
    #[default]
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    FreezingRain,
    Snow,
    Showers,
    Thunderstorm,
}

impl WeatherDescription {
    /// Map a WMO weather code to its condition category.
    /// Unknown codes map to `Clear`.
    /// See: <https://open-meteo.com/en/docs#weathervariables>
    #[must_use]
    pub fn from_wmo_code(code: u8) -> Self {
        match code {
            0 => Self::Clear,
            1 | 2 => Self::PartlyCloudy,
            3 => Self::Cloudy,
            45 | 48 => Self::Fog,
            51 | 53 | 55 | 56 | 57 => Self::Drizzle,
            61 | 63 | 65 => Self::Rain,
            66 | 67 => Self::FreezingRain,
            71 | 73 | 75 | 77 => Self::Snow,
            80..=82 | 85 | 86 => Self::Showers,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::Clear,
        }
    }

    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Cloudy => "Overcast",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::FreezingRain => "Freezing rain",
            Self::Snow => "Snow",
            Self::Showers => "Showers",
            Self::Thunderstorm => "Thunderstorm",
        }
    }
}

/// One "now" snapshot, replaced in full on every fetch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CurrentConditions {
    /// Wind speed in the requested speed unit, passed through unmodified
    pub wind_speed: f64,
    /// Today's peak UV index
    pub uv_index: f64,
    /// Temperature floored to an integer, in the requested unit
    pub temperature: i32,
    pub description: WeatherDescription,
    /// Relative humidity in percent, passed through unmodified
    pub relative_humidity: u8,
}

/// One entry of the 12-hour forecast window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecastItem {
    /// Hour of day, 0-23
    pub hour: u8,
    pub description: WeatherDescription,
    /// Temperature floored to an integer
    pub temperature: i32,
    /// Visibility in metres, passed through unmodified
    pub visibility: f64,
    /// Precipitation probability in percent
    pub rain_chance: u8,
}

/// One entry of the 7-day forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecastItem {
    /// Daily maximum temperature, floored
    pub temperature_high: i32,
    /// Daily minimum temperature, floored
    pub temperature_low: i32,
    /// Weekday label derived from the date, e.g. "Thursday"
    pub weekday: String,
    pub description: WeatherDescription,
}

/// Normalized forecast for the current city.
///
/// Invariant: `hourly` and `daily` are either empty (nothing fetched yet)
/// or exactly [`HOURLY_WINDOW`] / [`DAILY_DAYS`] entries long, never partial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WeatherData {
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyForecastItem>,
    pub daily: Vec<DailyForecastItem>,
}

impl WeatherData {
    /// Whether a fetch has populated this value yet
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.hourly.len() == HOURLY_WINDOW && self.daily.len() == DAILY_DAYS
    }
}

/// Format a floored temperature with its unit symbol
#[must_use]
pub fn format_temperature(temperature: i32, unit: TemperatureUnit) -> String {
    format!("{}{}", temperature, unit.symbol())
}
