//! Forecast fetching and normalization
//!
//! Builds the single Open-Meteo request for a city + unit preferences and
//! reshapes the heterogeneous response into the dashboard's fixed-size
//! [`WeatherData`]: one current snapshot, 12 hourly entries starting at the
//! location's current local hour, and 7 daily entries starting today.

pub mod open_meteo;

use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};
use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::config::ForecastApiConfig;
use crate::error::WeatherDashError;
use crate::models::{
    City, CurrentConditions, DAILY_DAYS, DailyForecastItem, HOURLY_WINDOW, HourlyForecastItem,
    UnitPreferences, WeatherData, WeatherDescription,
};
use open_meteo::ForecastResponse;

/// Client for the Open-Meteo forecast API
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl ForecastClient {
    /// Create a new forecast client
    pub fn new(config: &ForecastApiConfig) -> Result<Self, WeatherDashError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(|e| WeatherDashError::general(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Build the forecast request URL for a coordinate pair and units
    #[must_use]
    pub fn forecast_url(&self, latitude: f64, longitude: f64, units: &UnitPreferences) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}\
             &daily=uv_index_max,temperature_2m_max,temperature_2m_min,weather_code\
             &hourly=temperature_2m,visibility,weather_code,precipitation_probability\
             &current=temperature_2m,relative_humidity_2m,wind_speed_10m,weather_code\
             &temperature_unit={}&wind_speed_unit={}&precipitation_unit={}\
             &timezone=auto&forecast_days=7",
            self.base_url,
            latitude,
            longitude,
            units.temperature.api_value(),
            units.speed.api_value(),
            units.speed.precipitation_api_value(),
        )
    }

    /// Fetch and normalize the forecast for a city
    #[instrument(skip(self, units), fields(town = %city.town))]
    pub async fn fetch(
        &self,
        city: &City,
        units: &UnitPreferences,
    ) -> Result<WeatherData, WeatherDashError> {
        let url = self.forecast_url(city.latitude(), city.longitude(), units);
        debug!("Forecast request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherDashError::api(format!("Forecast request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherDashError::api(format!(
                "Forecast request returned status {status}"
            )));
        }

        let forecast_response: ForecastResponse = response.json().await.map_err(|e| {
            WeatherDashError::malformed(format!("Failed to parse forecast response: {e}"))
        })?;

        let data = normalize(&forecast_response, Utc::now())?;
        info!(
            "Fetched forecast for {}: {} hourly / {} daily entries",
            city.town,
            data.hourly.len(),
            data.daily.len()
        );
        Ok(data)
    }
}

/// Reshape a provider response into dashboard data.
///
/// `now` anchors the hourly window: the first entry is the current hour in
/// the location's local timezone (derived from `utc_offset_seconds`).
/// Deterministic for a fixed response and `now`.
pub fn normalize(
    response: &ForecastResponse,
    now: DateTime<Utc>,
) -> Result<WeatherData, WeatherDashError> {
    let local_now = now + chrono::Duration::seconds(response.utc_offset_seconds);
    let start_hour = local_now.hour() as usize;

    let hourly = normalize_hourly(&response.hourly, start_hour)?;
    let daily = normalize_daily(&response.daily)?;

    // The provider orders daily arrays by ascending date, so index 0 is today.
    let uv_index = *response
        .daily
        .uv_index_max
        .first()
        .ok_or_else(|| WeatherDashError::malformed("Daily uv_index_max array is empty"))?;

    let current = CurrentConditions {
        wind_speed: response.current.wind_speed_10m,
        uv_index,
        temperature: response.current.temperature_2m.floor() as i32,
        description: WeatherDescription::from_wmo_code(response.current.weather_code),
        relative_humidity: response.current.relative_humidity_2m,
    };

    Ok(WeatherData {
        current,
        hourly,
        daily,
    })
}

fn normalize_hourly(
    hourly: &open_meteo::HourlyData,
    start_hour: usize,
) -> Result<Vec<HourlyForecastItem>, WeatherDashError> {
    let end = start_hour + HOURLY_WINDOW;
    let mut items = Vec::with_capacity(HOURLY_WINDOW);

    for i in start_hour..end {
        let time = hourly.time.get(i).ok_or_else(|| {
            WeatherDashError::malformed(format!(
                "Hourly arrays end at {} entries, need {}",
                hourly.time.len(),
                end
            ))
        })?;
        let temperature = hourly
            .temperature_2m
            .get(i)
            .ok_or_else(|| WeatherDashError::malformed("Hourly temperature array too short"))?;
        let visibility = hourly
            .visibility
            .get(i)
            .ok_or_else(|| WeatherDashError::malformed("Hourly visibility array too short"))?;
        let weather_code = hourly
            .weather_code
            .get(i)
            .ok_or_else(|| WeatherDashError::malformed("Hourly weather_code array too short"))?;
        let rain_chance = hourly.precipitation_probability.get(i).ok_or_else(|| {
            WeatherDashError::malformed("Hourly precipitation_probability array too short")
        })?;

        items.push(HourlyForecastItem {
            hour: parse_hour(time)?,
            description: WeatherDescription::from_wmo_code(*weather_code),
            temperature: temperature.floor() as i32,
            visibility: *visibility,
            rain_chance: *rain_chance,
        });
    }

    Ok(items)
}

fn normalize_daily(
    daily: &open_meteo::DailyData,
) -> Result<Vec<DailyForecastItem>, WeatherDashError> {
    let mut items = Vec::with_capacity(DAILY_DAYS);

    for i in 0..DAILY_DAYS {
        let date = daily
            .time
            .get(i)
            .ok_or_else(|| WeatherDashError::malformed("Daily arrays shorter than 7 days"))?;
        let high = daily
            .temperature_2m_max
            .get(i)
            .ok_or_else(|| WeatherDashError::malformed("Daily temperature_2m_max too short"))?;
        let low = daily
            .temperature_2m_min
            .get(i)
            .ok_or_else(|| WeatherDashError::malformed("Daily temperature_2m_min too short"))?;
        let weather_code = daily
            .weather_code
            .get(i)
            .ok_or_else(|| WeatherDashError::malformed("Daily weather_code too short"))?;

        items.push(DailyForecastItem {
            temperature_high: high.floor() as i32,
            temperature_low: low.floor() as i32,
            weekday: weekday_from_date(date)?,
            description: WeatherDescription::from_wmo_code(*weather_code),
        });
    }

    Ok(items)
}

/// Parse the hour component out of an ISO-8601 timestamp like "2024-05-02T13:00"
fn parse_hour(timestamp: &str) -> Result<u8, WeatherDashError> {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M")
        .map(|dt| dt.hour() as u8)
        .map_err(|e| {
            WeatherDashError::malformed(format!("Bad hourly timestamp '{timestamp}': {e}"))
        })
}

/// Derive a weekday label ("Thursday") from a date like "2024-05-02"
fn weekday_from_date(date: &str) -> Result<String, WeatherDashError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%A").to_string())
        .map_err(|e| WeatherDashError::malformed(format!("Bad daily date '{date}': {e}")))
}
