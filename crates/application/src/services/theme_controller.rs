//! Display theme controller
//!
//! Holds the active theme and keeps the settings store in sync with it.

use std::fmt;
use std::sync::Arc;

use domain::value_objects::ThemePreference;
use parking_lot::RwLock;
use tracing::{info, warn};

use crate::error::ApplicationError;
use crate::ports::SettingsStorePort;

/// Active light/dark theme backed by a settings store
pub struct ThemeController {
    store: Arc<dyn SettingsStorePort>,
    current: RwLock<ThemePreference>,
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("current", &*self.current.read())
            .finish_non_exhaustive()
    }
}

impl ThemeController {
    /// Create a controller initialized from the stored preference
    ///
    /// A missing or unreadable preference falls back to the default theme.
    pub fn new(store: Arc<dyn SettingsStorePort>) -> Self {
        let initial = match store.load_theme() {
            Ok(Some(theme)) => theme,
            Ok(None) => ThemePreference::default(),
            Err(e) => {
                warn!(error = %e, "Failed to read theme preference, using default");
                ThemePreference::default()
            },
        };

        Self {
            store,
            current: RwLock::new(initial),
        }
    }

    pub fn current(&self) -> ThemePreference {
        *self.current.read()
    }

    /// Icon of the toggle control for the active theme
    pub fn toggle_icon(&self) -> &'static str {
        self.current().toggle_icon()
    }

    /// Flip the theme and persist the new value
    ///
    /// The in-memory theme flips even when persisting fails; the storage
    /// error is returned to the caller.
    pub fn toggle(&self) -> Result<ThemePreference, ApplicationError> {
        let next = {
            let mut current = self.current.write();
            *current = current.toggled();
            *current
        };

        info!(theme = %next, "Theme toggled");
        self.store.save_theme(next)?;
        Ok(next)
    }
}
