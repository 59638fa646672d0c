//! Session state
//!
//! All transient dashboard state lives in one explicit [`Session`] value:
//! the current city, the current weather data, the unit preferences and the
//! loading flag. The resolver replaces the city wholesale; the forecast path
//! replaces the weather data wholesale.
//!
//! Fetches are tagged with a monotonically increasing generation id. A
//! completion carrying a stale id is discarded, so when city or units change
//! quickly, the last *started* fetch wins regardless of completion order.

use tracing::{debug, warn};

use crate::error::WeatherDashError;
use crate::forecast::ForecastClient;
use crate::models::{City, UnitPreferences, WeatherData};

/// Ticket identifying one fetch pass
pub type FetchGeneration = u64;

/// Transient per-session dashboard state
#[derive(Debug)]
pub struct Session {
    city: City,
    units: UnitPreferences,
    weather: WeatherData,
    loading: bool,
    last_error: Option<String>,
    generation: FetchGeneration,
}

impl Session {
    /// Create a session around an initial city
    #[must_use]
    pub fn new(city: City, units: UnitPreferences) -> Self {
        Self {
            city,
            units,
            weather: WeatherData::default(),
            loading: false,
            last_error: None,
            generation: 0,
        }
    }

    #[must_use]
    pub fn city(&self) -> &City {
        &self.city
    }

    #[must_use]
    pub fn units(&self) -> &UnitPreferences {
        &self.units
    }

    #[must_use]
    pub fn weather(&self) -> &WeatherData {
        &self.weather
    }

    /// Whether a fetch is in flight. Consumers must treat the weather data
    /// as not-yet-ready while this is true.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The failure recorded by the most recent completed fetch, if any
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replace the current city (resolution result or explicit search)
    pub fn set_city(&mut self, city: City) {
        debug!("Current city is now {}", city.display_name());
        self.city = city;
    }

    /// Replace the unit preferences
    pub fn set_units(&mut self, units: UnitPreferences) {
        self.units = units;
    }

    /// Mark a fetch as started and hand out its generation ticket
    pub fn begin_fetch(&mut self) -> FetchGeneration {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Apply a fetch result. Returns false (and changes nothing) when the
    /// ticket is stale, i.e. a newer fetch has started since.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchGeneration,
        result: Result<WeatherData, WeatherDashError>,
    ) -> bool {
        if ticket != self.generation {
            debug!(
                "Discarding stale fetch result (ticket {} vs generation {})",
                ticket, self.generation
            );
            return false;
        }

        match result {
            Ok(weather) => {
                self.weather = weather;
                self.last_error = None;
            }
            Err(e) => {
                warn!("Forecast fetch failed: {}", e);
                self.last_error = Some(e.user_message());
            }
        }

        self.loading = false;
        true
    }

    /// Run one full fetch pass against the forecast client
    pub async fn refresh(&mut self, client: &ForecastClient) {
        let ticket = self.begin_fetch();
        let city = self.city.clone();
        let units = self.units;
        let result = client.fetch(&city, &units).await;
        self.complete_fetch(ticket, result);
    }
}
