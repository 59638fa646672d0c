//! HTTP API consumed by the dashboard frontend

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::clock;
use crate::config::WeatherDashConfig;
use crate::error::WeatherDashError;
use crate::forecast::ForecastClient;
use crate::location::{LocationResolver, SearchClient};
use crate::map;
use crate::models::{City, SpeedUnit, TemperatureUnit, UnitPreferences, WeatherData};

/// Shared state behind the API handlers
#[derive(Clone)]
pub struct ApiState {
    resolver: LocationResolver,
    forecast: ForecastClient,
    search: SearchClient,
    default_units: UnitPreferences,
}

impl ApiState {
    /// Build the full client stack from configuration
    pub fn from_config(config: &WeatherDashConfig) -> Result<Self, WeatherDashError> {
        Ok(Self {
            resolver: LocationResolver::from_config(config)?,
            forecast: ForecastClient::new(&config.forecast)?,
            search: SearchClient::new(&config.geocoding)?,
            default_units: config.units,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    latitude: f64,
    longitude: f64,
    temperature: Option<TemperatureUnit>,
    speed: Option<SpeedUnit>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: String,
}

#[derive(Debug, Deserialize)]
pub struct MapQuery {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Serialize)]
pub struct MapEmbed {
    pub embed_url: String,
}

#[derive(Debug, Serialize)]
pub struct WorldClockEntry {
    pub label: String,
    pub timezone: String,
    pub time: String,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/location", get(get_location))
        .route("/weather", get(get_weather))
        .route("/search", get(search_cities))
        .route("/map", get(get_map_embed))
        .route("/clocks", get(get_world_clocks))
        .with_state(state)
}

/// Run the resolver chain; by contract this always yields a city.
async fn get_location(State(state): State<ApiState>) -> Json<City> {
    Json(state.resolver.resolve().await)
}

async fn get_weather(
    State(state): State<ApiState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherData>, StatusCode> {
    if !(-90.0..=90.0).contains(&query.latitude)
        || !(-180.0..=180.0).contains(&query.longitude)
    {
        warn!(
            "Rejecting out-of-range coordinates ({}, {})",
            query.latitude, query.longitude
        );
        return Err(StatusCode::BAD_REQUEST);
    }

    let units = UnitPreferences {
        temperature: query.temperature.unwrap_or(state.default_units.temperature),
        speed: query.speed.unwrap_or(state.default_units.speed),
        clock: state.default_units.clock,
    };

    let city = City::new("", "", "", query.latitude, query.longitude);

    state
        .forecast
        .fetch(&city, &units)
        .await
        .map(Json)
        .map_err(|e| {
            warn!("Weather fetch failed: {}", e);
            match e {
                WeatherDashError::Validation { .. } => StatusCode::BAD_REQUEST,
                _ => StatusCode::BAD_GATEWAY,
            }
        })
}

async fn search_cities(
    State(state): State<ApiState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<City>>, StatusCode> {
    state.search.search(&query.q).await.map(Json).map_err(|e| {
        warn!("City search failed: {}", e);
        match e {
            WeatherDashError::Validation { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::BAD_GATEWAY,
        }
    })
}

async fn get_map_embed(Query(query): Query<MapQuery>) -> Json<MapEmbed> {
    Json(MapEmbed {
        embed_url: map::embed_url(query.latitude, query.longitude),
    })
}

/// The world clocks panel, rendered with the configured clock format
async fn get_world_clocks(State(state): State<ApiState>) -> Json<Vec<WorldClockEntry>> {
    let entries = clock::WORLD_CLOCK_ZONES
        .iter()
        .map(|(label, timezone)| WorldClockEntry {
            label: (*label).to_string(),
            timezone: timezone.name().to_string(),
            time: clock::world_clock(*timezone, state.default_units.clock),
        })
        .collect();
    Json(entries)
}
