//! File-backed settings store
//!
//! Keeps user settings as a small JSON document (`settings.json`) in the
//! data directory. Writes go to a temporary sibling first and are then
//! renamed over the target.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::SettingsStorePort;
use domain::value_objects::ThemePreference;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// File name of the settings document inside the data directory
pub const SETTINGS_FILE: &str = "settings.json";

/// On-disk shape of the settings document
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<ThemePreference>,
}

/// Settings store backed by a JSON file
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// Create a store for `settings.json` inside `data_dir`
    ///
    /// The directory is created on first write.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(SETTINGS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Option<SettingsDocument>, ApplicationError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(storage_error("read", &self.path, &e)),
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| ApplicationError::Storage(format!("{}: {e}", self.path.display())))
    }

    fn write_document(&self, document: &SettingsDocument) -> Result<(), ApplicationError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| storage_error("create", parent, &e))?;
        }

        let json = serde_json::to_string_pretty(document)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(|e| storage_error("write", &tmp, &e))?;
        fs::rename(&tmp, &self.path).map_err(|e| storage_error("rename", &self.path, &e))
    }
}

fn storage_error(action: &str, path: &Path, err: &io::Error) -> ApplicationError {
    ApplicationError::Storage(format!("Failed to {action} {}: {err}", path.display()))
}

impl SettingsStorePort for FileSettingsStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load_theme(&self) -> Result<Option<ThemePreference>, ApplicationError> {
        let theme = self.read_document()?.and_then(|doc| doc.theme);
        debug!(?theme, "Loaded theme preference");
        Ok(theme)
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn save_theme(&self, theme: ThemePreference) -> Result<(), ApplicationError> {
        // A corrupt document is replaced rather than blocking the write.
        let mut document = self.read_document().ok().flatten().unwrap_or_default();
        document.theme = Some(theme);
        self.write_document(&document)?;
        debug!(%theme, "Saved theme preference");
        Ok(())
    }
}
