//! WMO weather code table
//!
//! Maps the integer condition codes reported by Open-Meteo to a description
//! and an icon identifier. Codes outside the table resolve to `Unknown`.
//! See <https://open-meteo.com/en/docs> for the code reference.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Description and icon for one weather condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeatherCodeEntry {
    pub description: &'static str,
    pub icon_id: &'static str,
}

/// Weather condition derived from a WMO code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    /// WMO 0
    ClearSky,
    /// WMO 1
    MainlyClear,
    /// WMO 2
    PartlyCloudy,
    /// WMO 3
    Overcast,
    /// WMO 45, 48
    Fog,
    /// WMO 51, 53, 55
    Drizzle,
    /// WMO 61, 63, 65
    Rain,
    /// WMO 71, 73, 75
    Snow,
    /// WMO 95, 96, 99
    Thunderstorm,
    Unknown,
}

impl WeatherCondition {
    /// Resolve a WMO code. Total over `i32`.
    #[must_use]
    pub const fn from_wmo_code(code: i32) -> Self {
        match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            61 | 63 | 65 => Self::Rain,
            71 | 73 | 75 => Self::Snow,
            95 | 96 | 99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear Sky",
            Self::MainlyClear => "Mainly Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }

    #[must_use]
    pub const fn icon_id(&self) -> &'static str {
        match self {
            Self::ClearSky => "sun",
            Self::MainlyClear | Self::PartlyCloudy => "cloud-sun",
            Self::Overcast => "cloud",
            Self::Fog => "smog",
            Self::Drizzle => "cloud-rain",
            Self::Rain => "cloud-showers-heavy",
            Self::Snow => "snowflake",
            Self::Thunderstorm => "bolt",
            Self::Unknown => "question",
        }
    }

    /// Terminal glyph for the condition
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::ClearSky => "☀️",
            Self::MainlyClear => "🌤️",
            Self::PartlyCloudy => "⛅",
            Self::Overcast => "☁️",
            Self::Fog => "🌫️",
            Self::Drizzle => "🌦️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::Thunderstorm => "⛈️",
            Self::Unknown => "❓",
        }
    }

    #[must_use]
    pub const fn entry(&self) -> WeatherCodeEntry {
        WeatherCodeEntry {
            description: self.description(),
            icon_id: self.icon_id(),
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Look up the table entry for a WMO code
#[must_use]
pub const fn resolve_weather_code(code: i32) -> WeatherCodeEntry {
    WeatherCondition::from_wmo_code(code).entry()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_codes() {
        let table = [
            (0, "Clear Sky", "sun"),
            (1, "Mainly Clear", "cloud-sun"),
            (2, "Partly Cloudy", "cloud-sun"),
            (3, "Overcast", "cloud"),
            (45, "Fog", "smog"),
            (48, "Fog", "smog"),
            (51, "Drizzle", "cloud-rain"),
            (53, "Drizzle", "cloud-rain"),
            (55, "Drizzle", "cloud-rain"),
            (61, "Rain", "cloud-showers-heavy"),
            (63, "Rain", "cloud-showers-heavy"),
            (65, "Rain", "cloud-showers-heavy"),
            (71, "Snow", "snowflake"),
            (73, "Snow", "snowflake"),
            (75, "Snow", "snowflake"),
            (95, "Thunderstorm", "bolt"),
            (96, "Thunderstorm", "bolt"),
            (99, "Thunderstorm", "bolt"),
        ];

        for (code, description, icon_id) in table {
            let entry = resolve_weather_code(code);
            assert_eq!(entry.description, description, "code {code}");
            assert_eq!(entry.icon_id, icon_id, "code {code}");
        }
    }

    #[test]
    fn test_codes_outside_table_are_unknown() {
        for code in [4, 44, 56, 66, 77, 80, 82, 85, 100, -1, i32::MIN, i32::MAX] {
            assert_eq!(
                WeatherCondition::from_wmo_code(code),
                WeatherCondition::Unknown,
                "code {code}"
            );
        }
        let entry = resolve_weather_code(80);
        assert_eq!(entry.description, "Unknown");
        assert_eq!(entry.icon_id, "question");
    }

    #[test]
    fn test_display_uses_description() {
        assert_eq!(WeatherCondition::Overcast.to_string(), "Overcast");
    }

    #[test]
    fn test_emoji() {
        assert_eq!(WeatherCondition::ClearSky.emoji(), "☀️");
        assert_eq!(WeatherCondition::Unknown.emoji(), "❓");
    }
}
