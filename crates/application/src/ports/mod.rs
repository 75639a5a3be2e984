//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod forecast_port;
mod geocoding_port;
mod settings_store_port;

#[cfg(test)]
pub use forecast_port::MockForecastPort;
pub use forecast_port::{CurrentConditions, DailyForecast, ForecastData, ForecastPort};
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::{GeocodingPort, Place};
#[cfg(test)]
pub use settings_store_port::MockSettingsStorePort;
pub use settings_store_port::SettingsStorePort;
