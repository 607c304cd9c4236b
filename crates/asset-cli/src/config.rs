//! User settings for the `asset-register` binary.
//!
//! Stored as TOML in the platform config directory. Every field has a
//! default, so a partial or missing file is fine.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use asset_sets::{GroupingOptions, SetIdOrder};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const SETTINGS_FILE_NAME: &str = "settings.toml";

// =============================================================================
// ROOT SETTINGS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Desktop-set grouping options.
    pub grouping: GroupingOptions,

    /// Table rendering.
    pub display: DisplaySettings,
}

impl Settings {
    /// Load settings from `path`, or from the default location when `None`.
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_from(&Self::config_path()),
        }
    }

    /// Load settings from a specific path.
    ///
    /// A missing file yields defaults silently; an unreadable or invalid one
    /// yields defaults with a warning.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Self::default();
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "cannot read settings, using defaults");
                return Self::default();
            }
        };
        match Self::from_toml(&content) {
            Ok(settings) => settings,
            Err(error) => {
                warn!(path = %path.display(), %error, "invalid settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serialize settings")
    }

    /// Save settings to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create config directory {}", parent.display()))?;
        }
        let content = self.to_toml()?;
        std::fs::write(path, content)
            .with_context(|| format!("write settings to {}", path.display()))
    }

    /// Default settings file location.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("edu", "CollegeAssets", "asset-register")
            .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE_NAME))
    }

    /// Apply the `--numeric-order` flag; it only ever switches numeric on.
    #[must_use]
    pub fn with_numeric_order(mut self, numeric: bool) -> Self {
        if numeric {
            self.grouping.set_id_order = SetIdOrder::Numeric;
        }
        self
    }
}

// =============================================================================
// DISPLAY
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Upper bound for table width, in columns.
    pub table_width: u16,

    /// Show the cost column and total.
    pub show_costs: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            table_width: 160,
            show_costs: true,
        }
    }
}
