//! Open-Meteo forecast API response structures
//!
//! Field names follow the provider's variable names. Every field the
//! normalizer reads is mandatory: a payload missing one of them fails
//! decoding instead of silently producing defaults.

use serde::Deserialize;

/// Forecast response from the Open-Meteo `/v1/forecast` endpoint
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub latitude: f64,
    pub longitude: f64,
    /// Offset of the location's local timezone from UTC, in seconds.
    /// Resolved by the provider from `timezone=auto`.
    pub utc_offset_seconds: i64,
    pub current: CurrentData,
    pub hourly: HourlyData,
    pub daily: DailyData,
}

/// Flat current-conditions object
#[derive(Debug, Deserialize)]
pub struct CurrentData {
    pub temperature_2m: f64,
    pub relative_humidity_2m: u8,
    pub wind_speed_10m: f64,
    pub weather_code: u8,
}

/// Parallel hourly arrays, ordered by ascending time
#[derive(Debug, Deserialize)]
pub struct HourlyData {
    /// ISO-8601 timestamps like "2024-05-02T13:00"
    pub time: Vec<String>,
    pub temperature_2m: Vec<f64>,
    pub visibility: Vec<f64>,
    pub weather_code: Vec<u8>,
    pub precipitation_probability: Vec<u8>,
}

/// Parallel daily arrays, ordered by ascending date
#[derive(Debug, Deserialize)]
pub struct DailyData {
    /// Dates like "2024-05-02"
    pub time: Vec<String>,
    pub uv_index_max: Vec<f64>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub weather_code: Vec<u8>,
}
