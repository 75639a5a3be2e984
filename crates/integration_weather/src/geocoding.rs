//! Open-Meteo geocoding client
//!
//! Resolves a free-form city name to coordinates using the
//! [Open-Meteo geocoding API](https://open-meteo.com/en/docs/geocoding-api).
//! Only the top-ranked match is requested.

use std::time::Duration;

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{GeocodingResponse, GeocodingResult};

/// Configuration for the geocoding service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Base URL for the geocoding API
    #[serde(default = "default_geocoding_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_geocoding_timeout_secs")]
    pub timeout_secs: u64,

    /// Language for place and country names
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

const fn default_geocoding_timeout_secs() -> u64 {
    10
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_geocoding_base_url(),
            timeout_secs: default_geocoding_timeout_secs(),
            language: default_language(),
        }
    }
}

impl GeocodingConfig {
    /// Create a configuration pointing at a local mock server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("geocoding.base_url must not be empty".to_string());
        }
        if self.timeout_secs == 0 {
            return Err("geocoding.timeout_secs must be greater than 0".to_string());
        }
        if self.language.trim().is_empty() {
            return Err("geocoding.language must not be empty".to_string());
        }
        Ok(())
    }
}

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Connection to geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to geocoding service failed
    #[error("Geocoding request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse geocoding response
    #[error("Geocoding parse error: {0}")]
    ParseError(String),

    /// The service returned no match for the name
    #[error("Place not found: {0}")]
    NotFound(String),

    /// Request timeout
    #[error("Geocoding request timed out")]
    Timeout,
}

/// Top-ranked geocoding match
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub name: String,
    /// Country name; absent for places outside any country
    pub country: Option<String>,
    pub location: GeoLocation,
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a city name to its best match
    async fn search(&self, name: &str) -> Result<GeocodedPlace, GeocodingError>;
}

/// Open-Meteo geocoding client
#[derive(Debug)]
pub struct OpenMeteoGeocodingClient {
    client: Client,
    config: GeocodingConfig,
}

impl OpenMeteoGeocodingClient {
    /// Create a new geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: GeocodingConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn into_place(result: GeocodingResult) -> Result<GeocodedPlace, GeocodingError> {
        let location = GeoLocation::new(result.latitude, result.longitude)
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        Ok(GeocodedPlace {
            name: result.name,
            country: result.country.filter(|c| !c.is_empty()),
            location,
        })
    }
}

#[async_trait]
impl GeocodingClient for OpenMeteoGeocodingClient {
    #[instrument(skip(self))]
    async fn search(&self, name: &str) -> Result<GeocodedPlace, GeocodingError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GeocodingError::NotFound(
                "Name must not be empty".to_string(),
            ));
        }

        let url = format!("{}/search", self.config.base_url);
        let params = [
            ("name", name.to_string()),
            ("count", "1".to_string()),
            ("language", self.config.language.clone()),
            ("format", "json".to_string()),
        ];

        debug!(%name, "Geocoding city");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::ConnectionFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(GeocodingError::RequestFailed(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let body: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        let result = body
            .results
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| GeocodingError::NotFound(name.to_string()))?;

        let place = Self::into_place(result)?;
        debug!(
            name = %place.name,
            lat = place.location.latitude(),
            lon = place.location.longitude(),
            "Geocoded city"
        );

        Ok(place)
    }
}
