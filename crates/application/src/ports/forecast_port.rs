//! Forecast port
//!
//! Defines the interface for fetching current conditions and the daily
//! series for a resolved location.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use domain::value_objects::{GeoLocation, Humidity, UvIndex, WeatherCondition};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Current weather conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Apparent/feels-like temperature in Celsius
    pub apparent_temperature: f64,
    /// Wind speed at 10m in km/h
    pub wind_speed: f64,
    pub humidity: Humidity,
    /// WMO weather code
    pub weather_code: i32,
    /// Surface pressure in hPa
    pub surface_pressure: f64,
    /// Visibility in meters, absent when the weather model does not report it
    pub visibility_meters: Option<f64>,
}

impl CurrentConditions {
    #[must_use]
    pub const fn condition(&self) -> WeatherCondition {
        WeatherCondition::from_wmo_code(self.weather_code)
    }
}

/// One day of the forecast series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    /// WMO weather code
    pub weather_code: i32,
    /// Maximum temperature in Celsius
    pub temperature_max: f64,
    /// Minimum temperature in Celsius
    pub temperature_min: f64,
    /// Local sunrise time at the location
    pub sunrise: NaiveDateTime,
    /// Local sunset time at the location
    pub sunset: NaiveDateTime,
    pub uv_index_max: UvIndex,
    /// Precipitation probability (0-100)
    pub precipitation_probability_max: Option<u8>,
}

impl DailyForecast {
    #[must_use]
    pub const fn condition(&self) -> WeatherCondition {
        WeatherCondition::from_wmo_code(self.weather_code)
    }
}

/// Current conditions plus the daily series, index 0 being today
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastData {
    pub current: CurrentConditions,
    pub daily: Vec<DailyForecast>,
}

impl ForecastData {
    /// Today's entry, if the series is not empty
    #[must_use]
    pub fn today(&self) -> Option<&DailyForecast> {
        self.daily.first()
    }
}

/// Port for forecast retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch current conditions and the daily series for a location
    async fn fetch_forecast(&self, location: &GeoLocation)
    -> Result<ForecastData, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn ForecastPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ForecastPort>();
    }

    #[test]
    fn current_condition_resolves_code() {
        let current = CurrentConditions {
            temperature: 15.4,
            apparent_temperature: 14.0,
            wind_speed: 10.0,
            humidity: Humidity::clamped(70),
            weather_code: 3,
            surface_pressure: 1013.0,
            visibility_meters: None,
        };
        assert_eq!(current.condition(), WeatherCondition::Overcast);
    }
}
