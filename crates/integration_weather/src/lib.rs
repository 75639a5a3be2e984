//! Open-Meteo weather integration
//!
//! Clients for the Open-Meteo geocoding and forecast APIs
//! (<https://open-meteo.com>). Neither endpoint requires an API key.

pub mod client;
pub mod geocoding;
mod models;

pub use client::{OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
pub use geocoding::{
    GeocodedPlace, GeocodingClient, GeocodingConfig, GeocodingError, OpenMeteoGeocodingClient,
};
pub use models::{CurrentWeather, DailyForecast, Forecast};
