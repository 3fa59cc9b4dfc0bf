//! Display configuration for the month view.
//!
//! Settings that the console used to keep as ambient UI state (locale, dark
//! mode) live here and are passed explicitly to whatever renders the grid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CalendarError, CalendarResult};
use crate::event::CalendarEvent;
use crate::locale::DEFAULT_LOCALE;

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_guard_color() -> String {
    "primary".to_string()
}

fn default_request_color() -> String {
    "warning".to_string()
}

/// Display configuration at ~/.config/bomberos/config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Locale for weekday headers (e.g. "es_ES", "en_US")
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default)]
    pub dark_mode: bool,

    /// Color token for guard events that arrive without one
    #[serde(default = "default_guard_color")]
    pub guard_color: String,

    /// Color token for request events that arrive without one
    #[serde(default = "default_request_color")]
    pub request_color: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            locale: default_locale(),
            dark_mode: false,
            guard_color: default_guard_color(),
            request_color: default_request_color(),
        }
    }
}

impl DisplayConfig {
    pub fn config_path() -> CalendarResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalendarError::Config("Could not determine config directory".into()))?
            .join("bomberos");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default path, falling back to defaults if the file
    /// does not exist.
    pub fn load() -> CalendarResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> CalendarResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| CalendarError::Config(format!("Could not read {}: {e}", path.display())))?;

        toml::from_str(&content)
            .map_err(|e| CalendarError::Config(format!("Invalid config {}: {e}", path.display())))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalendarResult<()> {
        let defaults = Self::default();
        let contents = format!(
            "\
# Bomberos calendar configuration

# Locale for weekday headers:
# locale = \"{}\"

# Render with a dark palette:
# dark_mode = false

# Color tokens for events that arrive without one:
# guard_color = \"{}\"
# request_color = \"{}\"
",
            defaults.locale, defaults.guard_color, defaults.request_color
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalendarError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalendarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// The color token to draw an event with.
    pub fn color_for<'a>(&'a self, event: &'a CalendarEvent) -> &'a str {
        if !event.color.is_empty() {
            return &event.color;
        }
        if event.event_type.is_request() {
            &self.request_color
        } else {
            &self.guard_color
        }
    }
}
