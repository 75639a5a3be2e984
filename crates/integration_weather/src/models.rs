//! Weather data models
//!
//! Parsed forecast types plus the raw Open-Meteo wire shapes they are
//! built from.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Current conditions block of a forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Apparent (feels like) temperature in Celsius
    pub apparent_temperature: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// WMO weather code
    pub weather_code: i32,
    /// Wind speed at 10m in km/h
    pub wind_speed: f64,
    /// Surface pressure in hPa
    pub surface_pressure: f64,
    /// Visibility in meters (not reported by every weather model)
    pub visibility: Option<f64>,
}

/// One day of the daily forecast series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub weather_code: i32,
    pub temperature_max: f64,
    pub temperature_min: f64,
    /// Sunrise in the location's local time
    pub sunrise: NaiveDateTime,
    /// Sunset in the location's local time
    pub sunset: NaiveDateTime,
    pub uv_index_max: f64,
    /// Precipitation probability percentage (0-100)
    pub precipitation_probability_max: Option<f64>,
}

/// Complete forecast: current conditions and the daily series (index 0 = today)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub current: CurrentWeather,
    pub daily: Vec<DailyForecast>,
    /// IANA timezone resolved by the service
    pub timezone: String,
}

impl Forecast {
    /// Today's entry, if the series is not empty
    #[must_use]
    pub fn today(&self) -> Option<&DailyForecast> {
        self.daily.first()
    }
}

/// Raw current block
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CurrentData {
    pub temperature_2m: f64,
    pub relative_humidity_2m: u8,
    pub apparent_temperature: f64,
    pub weather_code: i32,
    pub wind_speed_10m: f64,
    pub surface_pressure: f64,
    #[serde(default)]
    pub visibility: Option<f64>,
}

/// Raw daily block: parallel arrays indexed by day offset
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DailyData {
    pub time: Vec<String>,
    pub weather_code: Vec<i32>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub sunrise: Vec<String>,
    pub sunset: Vec<String>,
    pub uv_index_max: Vec<f64>,
    #[serde(default)]
    pub precipitation_probability_max: Option<Vec<Option<f64>>>,
}

/// Raw forecast response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub timezone: String,
    pub current: Option<CurrentData>,
    pub daily: Option<DailyData>,
}

/// Raw geocoding response; `results` is omitted when nothing matched
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_response_without_daily() {
        let json = r#"{
            "timezone": "Europe/London",
            "current": {
                "time": "2024-01-15T12:00",
                "temperature_2m": 15.4,
                "relative_humidity_2m": 82,
                "apparent_temperature": 13.9,
                "weather_code": 3,
                "wind_speed_10m": 11.2,
                "surface_pressure": 1012.3,
                "visibility": 24140.0
            }
        }"#;
        let response: ApiResponse = serde_json::from_str(json).expect("should parse");
        assert!(response.daily.is_none());
        let current = response.current.expect("current block");
        assert_eq!(current.weather_code, 3);
        assert_eq!(current.relative_humidity_2m, 82);
        assert_eq!(current.visibility, Some(24140.0));
    }

    #[test]
    fn test_current_without_visibility() {
        let json = r#"{
            "temperature_2m": 1.0,
            "relative_humidity_2m": 90,
            "apparent_temperature": -2.0,
            "weather_code": 71,
            "wind_speed_10m": 5.0,
            "surface_pressure": 990.0
        }"#;
        let current: CurrentData = serde_json::from_str(json).expect("should parse");
        assert!(current.visibility.is_none());
    }

    #[test]
    fn test_daily_precipitation_with_nulls() {
        let json = r#"{
            "time": ["2024-01-15"],
            "weather_code": [3],
            "temperature_2m_max": [8.0],
            "temperature_2m_min": [2.0],
            "sunrise": ["2024-01-15T07:15"],
            "sunset": ["2024-01-15T16:30"],
            "uv_index_max": [1.0],
            "precipitation_probability_max": [null]
        }"#;
        let daily: DailyData = serde_json::from_str(json).expect("should parse");
        assert_eq!(daily.precipitation_probability_max, Some(vec![None]));
    }

    #[test]
    fn test_geocoding_response_without_results() {
        let response: GeocodingResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.5}"#).expect("should parse");
        assert!(response.results.is_none());
    }

    #[test]
    fn test_geocoding_result_without_country() {
        let json = r#"{"results": [{"id": 1, "name": "Null Island", "latitude": 0.0, "longitude": 0.0}]}"#;
        let response: GeocodingResponse = serde_json::from_str(json).expect("should parse");
        let results = response.results.expect("results");
        assert_eq!(results[0].name, "Null Island");
        assert!(results[0].country.is_none());
    }
}
