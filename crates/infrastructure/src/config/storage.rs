//! Storage configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Name of the application directory under the platform config dir
pub const APP_DIR_NAME: &str = "nimbus";

/// Where settings and the interactive log file live
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory; defaults to `<platform config dir>/nimbus`
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the data directory
    ///
    /// Falls back to the current directory when the platform has no
    /// config directory.
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR_NAME)
        })
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        match &self.data_dir {
            Some(dir) if dir.as_os_str().is_empty() => {
                Err("storage.data_dir must not be empty".to_string())
            },
            _ => Ok(()),
        }
    }
}
