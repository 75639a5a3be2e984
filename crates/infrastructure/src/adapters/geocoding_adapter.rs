//! Geocoding adapter - Implements GeocodingPort using integration_weather

use application::error::ApplicationError;
use application::ports::{GeocodingPort, Place};
use async_trait::async_trait;
use integration_weather::{
    GeocodedPlace, GeocodingClient, GeocodingConfig, GeocodingError, OpenMeteoGeocodingClient,
};
use tracing::{debug, instrument};

/// Adapter for city lookups using the Open-Meteo geocoding API
pub struct GeocodingAdapter {
    client: OpenMeteoGeocodingClient,
}

impl std::fmt::Debug for GeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeocodingAdapter")
            .field("client", &"OpenMeteoGeocodingClient")
            .finish()
    }
}

impl GeocodingAdapter {
    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        Self::with_config(GeocodingConfig::default())
    }

    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: GeocodingConfig) -> Result<Self, ApplicationError> {
        let client = OpenMeteoGeocodingClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration geocoding error to application error
    fn map_error(err: GeocodingError) -> ApplicationError {
        match err {
            GeocodingError::ConnectionFailed(e) | GeocodingError::RequestFailed(e) => {
                ApplicationError::ExternalService(e)
            },
            GeocodingError::Timeout => {
                ApplicationError::ExternalService("Geocoding request timed out".into())
            },
            // `NotFound` never reaches here; `geocode` turns it into `Ok(None)`
            other @ (GeocodingError::ParseError(_) | GeocodingError::NotFound(_)) => {
                ApplicationError::Internal(other.to_string())
            },
        }
    }

    fn map_place(place: GeocodedPlace) -> Place {
        Place {
            name: place.name,
            country: place.country.unwrap_or_default(),
            location: place.location,
        }
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, city: &str) -> Result<Option<Place>, ApplicationError> {
        match self.client.search(city).await {
            Ok(place) => {
                debug!(name = %place.name, "Geocoding match");
                Ok(Some(Self::map_place(place)))
            },
            Err(GeocodingError::NotFound(_)) => {
                debug!("No geocoding match");
                Ok(None)
            },
            Err(e) => {
                debug!(error = %e, "Geocoding failed");
                Err(Self::map_error(e))
            },
        }
    }
}
