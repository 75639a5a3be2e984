//! Forecast adapter - Implements ForecastPort using integration_weather

use application::error::ApplicationError;
use application::ports::{CurrentConditions, DailyForecast, ForecastData, ForecastPort};
use async_trait::async_trait;
use domain::value_objects::{GeoLocation, Humidity, UvIndex};
use integration_weather::{
    CurrentWeather as IntegrationCurrent, DailyForecast as IntegrationDaily, OpenMeteoClient,
    WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for forecasts using the Open-Meteo forecast API
pub struct ForecastAdapter {
    client: OpenMeteoClient,
}

impl std::fmt::Debug for ForecastAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastAdapter")
            .field("client", &"OpenMeteoClient")
            .finish()
    }
}

impl ForecastAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::with_defaults()
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenMeteoClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::RateLimitExceeded => {
                ApplicationError::ExternalService("Weather service rate limit exceeded".into())
            },
            WeatherError::ParseError(e) => ApplicationError::Internal(e),
            WeatherError::InvalidCoordinates => {
                ApplicationError::Internal("Invalid coordinates".into())
            },
        }
    }

    /// Convert integration current weather; humidity above 100 is rejected
    fn map_current(current: &IntegrationCurrent) -> Result<CurrentConditions, ApplicationError> {
        Ok(CurrentConditions {
            temperature: current.temperature,
            apparent_temperature: current.apparent_temperature,
            wind_speed: current.wind_speed,
            humidity: Humidity::new(current.humidity)?,
            weather_code: current.weather_code,
            surface_pressure: current.surface_pressure,
            visibility_meters: current.visibility,
        })
    }

    #[allow(clippy::cast_sign_loss)] // clamped to 0..=100 first
    fn map_daily(daily: &IntegrationDaily) -> DailyForecast {
        DailyForecast {
            date: daily.date,
            weather_code: daily.weather_code,
            temperature_max: daily.temperature_max,
            temperature_min: daily.temperature_min,
            sunrise: daily.sunrise,
            sunset: daily.sunset,
            uv_index_max: UvIndex::new(daily.uv_index_max),
            precipitation_probability_max: daily
                .precipitation_probability_max
                .map(|p| p.clamp(0.0, 100.0).round() as u8),
        }
    }
}

#[async_trait]
impl ForecastPort for ForecastAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn fetch_forecast(
        &self,
        location: &GeoLocation,
    ) -> Result<ForecastData, ApplicationError> {
        let forecast = self
            .client
            .get_forecast(location.latitude(), location.longitude())
            .await
            .map_err(|e| {
                debug!(error = %e, "Failed to get forecast");
                Self::map_error(e)
            })?;

        debug!(
            timezone = %forecast.timezone,
            days = forecast.daily.len(),
            "Retrieved forecast"
        );

        Ok(ForecastData {
            current: Self::map_current(&forecast.current)?,
            daily: forecast.daily.iter().map(Self::map_daily).collect(),
        })
    }
}
