//! Settings store port
//!
//! Persistence for user preferences that survive restarts. Only the
//! display theme is stored.

use domain::value_objects::ThemePreference;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for persisted user settings
#[cfg_attr(test, automock)]
pub trait SettingsStorePort: Send + Sync {
    /// Read the stored theme; `Ok(None)` when nothing has been saved yet
    fn load_theme(&self) -> Result<Option<ThemePreference>, ApplicationError>;

    /// Persist the theme, replacing any previous value
    fn save_theme(&self, theme: ThemePreference) -> Result<(), ApplicationError>;
}
