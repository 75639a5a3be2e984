//! Open-Meteo forecast client
//!
//! HTTP client for the Open-Meteo forecast endpoint, requesting current
//! conditions and the daily series in a single call.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ApiResponse, CurrentData, CurrentWeather, DailyData, DailyForecast, Forecast};

/// Current-conditions fields requested from the forecast endpoint
pub const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m,\
                                  apparent_temperature,surface_pressure,visibility";

/// Daily fields requested from the forecast endpoint
pub const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,sunrise,sunset,\
                                uv_index_max,precipitation_probability_max";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Forecast service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of forecast days, today included (1-16, default: 7)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    10
}

const fn default_forecast_days() -> u8 {
    7
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            forecast_days: default_forecast_days(),
        }
    }
}

impl WeatherConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("weather.base_url must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("weather.timeout_secs must be greater than 0".to_string());
        }
        if !(1..=16).contains(&self.forecast_days) {
            return Err("weather.forecast_days must be between 1 and 16".to_string());
        }
        Ok(())
    }
}

/// Weather client trait for fetching forecasts
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions and the daily series for a location
    async fn get_forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(WeatherConfig::default())
    }

    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    fn forecast_query(&self, latitude: f64, longitude: f64) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", "auto".to_string()),
            (
                "forecast_days",
                self.config.forecast_days.clamp(1, 16).to_string(),
            ),
        ]
    }

    fn check_status(status: StatusCode) -> Result<(), WeatherError> {
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }
        Ok(())
    }

    fn parse_current_weather(data: &CurrentData) -> CurrentWeather {
        CurrentWeather {
            temperature: data.temperature_2m,
            apparent_temperature: data.apparent_temperature,
            humidity: data.relative_humidity_2m,
            weather_code: data.weather_code,
            wind_speed: data.wind_speed_10m,
            surface_pressure: data.surface_pressure,
            visibility: data.visibility,
        }
    }

    /// Zip the parallel daily arrays into entries
    ///
    /// `time` decides the number of days; a shorter sibling array is a
    /// malformed response.
    fn parse_daily_forecasts(daily: &DailyData) -> Result<Vec<DailyForecast>, WeatherError> {
        fn at<'a, T>(values: &'a [T], i: usize, field: &str) -> Result<&'a T, WeatherError> {
            values.get(i).ok_or_else(|| {
                WeatherError::ParseError(format!("daily.{field} has no entry for day {i}"))
            })
        }

        let mut forecasts = Vec::with_capacity(daily.time.len());

        for (i, date) in daily.time.iter().enumerate() {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|e| WeatherError::ParseError(format!("Invalid date: {e}")))?;

            let precipitation_probability_max = daily
                .precipitation_probability_max
                .as_ref()
                .and_then(|p| p.get(i).copied().flatten());

            forecasts.push(DailyForecast {
                date,
                weather_code: *at(&daily.weather_code, i, "weather_code")?,
                temperature_max: *at(&daily.temperature_2m_max, i, "temperature_2m_max")?,
                temperature_min: *at(&daily.temperature_2m_min, i, "temperature_2m_min")?,
                sunrise: Self::parse_datetime(at(&daily.sunrise, i, "sunrise")?)?,
                sunset: Self::parse_datetime(at(&daily.sunset, i, "sunset")?)?,
                uv_index_max: *at(&daily.uv_index_max, i, "uv_index_max")?,
                precipitation_probability_max,
            });
        }

        Ok(forecasts)
    }

    /// Parse a local ISO 8601 timestamp as sent with `timezone=auto`
    fn parse_datetime(s: &str) -> Result<NaiveDateTime, WeatherError> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
            .map_err(|_| WeatherError::ParseError(format!("Invalid datetime format: {s}")))
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = format!("{}/forecast", self.config.base_url);
        debug!(url = %url, "Fetching weather forecast");

        let response = self
            .client
            .get(&url)
            .query(&self.forecast_query(latitude, longitude))
            .send()
            .await
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Self::check_status(response.status())?;

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let current_data = api_response.current.ok_or_else(|| {
            WeatherError::ParseError("No current weather data in response".to_string())
        })?;

        let daily_data = api_response.daily.ok_or_else(|| {
            WeatherError::ParseError("No daily forecast data in response".to_string())
        })?;

        let daily = Self::parse_daily_forecasts(&daily_data)?;
        debug!(days = daily.len(), "Parsed daily forecast");

        Ok(Forecast {
            current: Self::parse_current_weather(&current_data),
            daily,
            timezone: api_response.timezone,
        })
    }
}
