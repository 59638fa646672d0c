//! Display unit preferences and their Open-Meteo query values

use serde::{Deserialize, Serialize};

/// Temperature unit preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Value for the provider's `temperature_unit` query parameter
    #[must_use]
    pub fn api_value(self) -> &'static str {
        match self {
            Self::Celsius => "celsius",
            Self::Fahrenheit => "fahrenheit",
        }
    }

    /// Display suffix ("°C" / "°F")
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

/// Wind speed unit preference. The precipitation unit is tied to it:
/// metric speeds report precipitation in millimetres, imperial in inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpeedUnit {
    #[default]
    #[serde(rename = "kmh")]
    KmPerHour,
    #[serde(rename = "mph")]
    MilesPerHour,
}

impl SpeedUnit {
    /// Value for the provider's `wind_speed_unit` query parameter
    #[must_use]
    pub fn api_value(self) -> &'static str {
        match self {
            Self::KmPerHour => "kmh",
            Self::MilesPerHour => "mph",
        }
    }

    /// Value for the provider's `precipitation_unit` query parameter
    #[must_use]
    pub fn precipitation_api_value(self) -> &'static str {
        match self {
            Self::KmPerHour => "mm",
            Self::MilesPerHour => "inch",
        }
    }

    /// Display suffix ("km/h" / "mph")
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::KmPerHour => "km/h",
            Self::MilesPerHour => "mph",
        }
    }
}

/// Clock display format. Never sent to the provider, only used when
/// rendering hours and times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClockFormat {
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
    #[serde(rename = "12h")]
    TwelveHour,
}

/// User-controlled display preferences, independent of the current city.
/// Changing these re-triggers forecast normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UnitPreferences {
    #[serde(default)]
    pub temperature: TemperatureUnit,
    #[serde(default)]
    pub speed: SpeedUnit,
    #[serde(default)]
    pub clock: ClockFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TemperatureUnit::Celsius, "celsius")]
    #[case(TemperatureUnit::Fahrenheit, "fahrenheit")]
    fn test_temperature_api_values(#[case] unit: TemperatureUnit, #[case] expected: &str) {
        assert_eq!(unit.api_value(), expected);
    }

    #[rstest]
    #[case(SpeedUnit::KmPerHour, "kmh", "mm")]
    #[case(SpeedUnit::MilesPerHour, "mph", "inch")]
    fn test_speed_api_values(
        #[case] unit: SpeedUnit,
        #[case] speed: &str,
        #[case] precipitation: &str,
    ) {
        assert_eq!(unit.api_value(), speed);
        assert_eq!(unit.precipitation_api_value(), precipitation);
    }

    #[test]
    fn test_default_preferences_are_metric_24h() {
        let prefs = UnitPreferences::default();
        assert_eq!(prefs.temperature, TemperatureUnit::Celsius);
        assert_eq!(prefs.speed, SpeedUnit::KmPerHour);
        assert_eq!(prefs.clock, ClockFormat::TwentyFourHour);
    }
}
