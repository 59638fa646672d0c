//! Data models for the weatherdash application
//!
//! Core domain models organized by concern:
//! - City: the resolved place driving all forecast requests
//! - Units: user display preferences and their provider query values
//! - Weather: normalized current/hourly/daily dashboard data

pub mod city;
pub mod units;
pub mod weather;

// Re-export all public types for convenient access
pub use city::City;
pub use units::{ClockFormat, SpeedUnit, TemperatureUnit, UnitPreferences};
pub use weather::{
    CurrentConditions, DAILY_DAYS, DailyForecastItem, HOURLY_WINDOW, HourlyForecastItem,
    WeatherData, WeatherDescription,
};
