//! Adapters implementing application ports

mod file_settings_store;
mod forecast_adapter;
mod geocoding_adapter;

pub use file_settings_store::{FileSettingsStore, SETTINGS_FILE};
pub use forecast_adapter::ForecastAdapter;
pub use geocoding_adapter::GeocodingAdapter;
