//! City search pipeline
//!
//! Geocodes a city name, then fetches its forecast. Failures are collapsed
//! into the three user-facing [`SearchError`] kinds; the underlying cause
//! is only logged.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::ports::{ForecastData, ForecastPort, GeocodingPort, Place};

/// User-facing search failure; `Display` is the message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchError {
    /// The geocoder had no match for the name
    #[error("City not found. Please try again.")]
    NotFound,

    /// The geocoding request failed
    #[error("Network error. Please try again later.")]
    Network,

    /// The forecast request failed
    #[error("Failed to fetch data")]
    ForecastFetch,
}

/// Successful search result: the resolved place and its forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub place: Place,
    pub forecast: ForecastData,
}

/// Geocode-then-forecast pipeline
#[derive(Clone)]
pub struct SearchPipeline {
    geocoding: Arc<dyn GeocodingPort>,
    forecast: Arc<dyn ForecastPort>,
}

impl fmt::Debug for SearchPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchPipeline").finish_non_exhaustive()
    }
}

impl SearchPipeline {
    /// Create a new pipeline over the given ports
    pub fn new(geocoding: Arc<dyn GeocodingPort>, forecast: Arc<dyn ForecastPort>) -> Self {
        Self {
            geocoding,
            forecast,
        }
    }

    /// Run one search; the forecast is only requested after a geocoding match
    #[instrument(skip(self))]
    pub async fn run(&self, city: &str) -> Result<WeatherReport, SearchError> {
        let place = match self.geocoding.geocode(city).await {
            Ok(Some(place)) => place,
            Ok(None) => {
                info!(%city, "No geocoding match");
                return Err(SearchError::NotFound);
            },
            Err(e) => {
                warn!(error = %e, %city, "Geocoding failed");
                return Err(SearchError::Network);
            },
        };

        debug!(place = %place.display_name(), location = %place.location, "Resolved city");

        let forecast = self
            .forecast
            .fetch_forecast(&place.location)
            .await
            .map_err(|e| {
                warn!(error = %e, place = %place.display_name(), "Forecast fetch failed");
                SearchError::ForecastFetch
            })?;

        info!(
            place = %place.display_name(),
            days = forecast.daily.len(),
            "Search completed"
        );

        Ok(WeatherReport { place, forecast })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApplicationError;
    use crate::ports::{CurrentConditions, MockForecastPort, MockGeocodingPort};
    use domain::value_objects::{GeoLocation, Humidity};

    fn london() -> Place {
        Place {
            name: "London".to_string(),
            country: "UK".to_string(),
            location: GeoLocation::new(51.5, -0.12).expect("valid"),
        }
    }

    fn forecast_data() -> ForecastData {
        ForecastData {
            current: CurrentConditions {
                temperature: 15.4,
                apparent_temperature: 14.0,
                wind_speed: 11.2,
                humidity: Humidity::clamped(82),
                weather_code: 3,
                surface_pressure: 1012.0,
                visibility_meters: Some(10000.0),
            },
            daily: Vec::new(),
        }
    }

    fn pipeline(geocoding: MockGeocodingPort, forecast: MockForecastPort) -> SearchPipeline {
        SearchPipeline::new(Arc::new(geocoding), Arc::new(forecast))
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SearchError::NotFound.to_string(),
            "City not found. Please try again."
        );
        assert_eq!(
            SearchError::Network.to_string(),
            "Network error. Please try again later."
        );
        assert_eq!(SearchError::ForecastFetch.to_string(), "Failed to fetch data");
    }

    #[test]
    fn test_debug_output() {
        let p = pipeline(MockGeocodingPort::new(), MockForecastPort::new());
        assert!(format!("{p:?}").contains("SearchPipeline"));
    }

    #[tokio::test]
    async fn test_success() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_geocode()
            .withf(|city| city == "London")
            .times(1)
            .returning(|_| Ok(Some(london())));

        let mut forecast = MockForecastPort::new();
        forecast
            .expect_fetch_forecast()
            .withf(|loc| (loc.latitude() - 51.5).abs() < f64::EPSILON)
            .times(1)
            .returning(|_| Ok(forecast_data()));

        let report = pipeline(geocoding, forecast)
            .run("London")
            .await
            .expect("search should succeed");

        assert_eq!(report.place, london());
        assert_eq!(report.forecast.current.weather_code, 3);
    }

    #[tokio::test]
    async fn test_not_found_skips_forecast() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding.expect_geocode().returning(|_| Ok(None));

        let mut forecast = MockForecastPort::new();
        forecast.expect_fetch_forecast().times(0);

        let result = pipeline(geocoding, forecast).run("Paris").await;
        assert_eq!(result, Err(SearchError::NotFound));
    }

    #[tokio::test]
    async fn test_geocoding_failure_is_network_error() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding
            .expect_geocode()
            .returning(|_| Err(ApplicationError::ExternalService("timeout".to_string())));

        let mut forecast = MockForecastPort::new();
        forecast.expect_fetch_forecast().times(0);

        let result = pipeline(geocoding, forecast).run("London").await;
        assert_eq!(result, Err(SearchError::Network));
    }

    #[tokio::test]
    async fn test_forecast_failure() {
        let mut geocoding = MockGeocodingPort::new();
        geocoding.expect_geocode().returning(|_| Ok(Some(london())));

        let mut forecast = MockForecastPort::new();
        forecast
            .expect_fetch_forecast()
            .returning(|_| Err(ApplicationError::ExternalService("HTTP 502".to_string())));

        let result = pipeline(geocoding, forecast).run("London").await;
        assert_eq!(result, Err(SearchError::ForecastFetch));
    }
}
