//! Application configuration
//!
//! Layered with the `config` crate, later sources overriding earlier ones:
//! 1. built-in defaults
//! 2. `nimbus.toml` in the working directory, or an explicit file
//! 3. `NIMBUS_*` environment variables, `__` separating sections
//!    (e.g. `NIMBUS_WEATHER__TIMEOUT_SECS=5`)

mod storage;

use std::path::Path;

use integration_weather::{GeocodingConfig, WeatherConfig};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::telemetry::TelemetryConfig;

pub use storage::{APP_DIR_NAME, StorageConfig};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "NIMBUS";

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "nimbus";

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    #[serde(default)]
    pub weather: WeatherConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from defaults, file and process environment
    ///
    /// An explicit `path` must exist; the default `nimbus.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Load configuration with an explicit environment map
    ///
    /// `None` reads the process environment.
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            .set_default("geocoding.language", "en")?
            .set_default("weather.forecast_days", 7)?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate().map_err(config::ConfigError::Message)?;

        debug!(
            geocoding = %config.geocoding.base_url,
            weather = %config.weather.base_url,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn validate(&self) -> Result<(), String> {
        self.geocoding.validate()?;
        self.weather.validate()?;
        self.storage.validate()?;
        self.telemetry.validate()
    }
}
