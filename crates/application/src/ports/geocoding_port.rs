//! Geocoding port
//!
//! Resolves a city name typed by the user to a place with coordinates.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Best match for a city name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Display name as returned by the geocoder
    pub name: String,
    /// Country name, empty when the geocoder reports none
    pub country: String,
    pub location: GeoLocation,
}

impl Place {
    /// Header text: `"<name>, <country>"`, or the name alone without a country
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }
}

/// Port for geocoding lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Look up the top match for `city`
    ///
    /// Returns `Ok(None)` when the service has no match. Transport and
    /// decoding failures are errors.
    async fn geocode(&self, city: &str) -> Result<Option<Place>, ApplicationError>;
}
