//! Persistent CLI settings.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use dash_model::Theme;
use dash_view::SortKey;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings read from `settings.toml`. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Storage endpoint. Mock data is used when unset.
    pub endpoint: Option<String>,
    pub theme: Theme,
    /// Initial sort column of the file table.
    pub default_sort: SortKey,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: None,
            theme: Theme::default(),
            default_sort: SortKey::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults if the file is
    /// missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Self::default();
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to read settings");
                return Self::default();
            }
        };
        match toml::from_str(&content) {
            Ok(settings) => {
                debug!(path = %path.display(), "loaded settings");
                settings
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "invalid settings file, using defaults");
                Self::default()
            }
        }
    }

    /// Save settings to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("create config directory")?;
        }
        let content = self.to_toml()?;
        std::fs::write(path, content)
            .with_context(|| format!("write settings to {}", path.display()))
    }

    /// Settings as written to `settings.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("serialize settings")
    }

    /// Apply command-line overrides on top of loaded settings.
    #[must_use]
    pub fn with_overrides(mut self, endpoint: Option<&str>, theme: Option<Theme>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.to_string());
        }
        if let Some(theme) = theme {
            self.theme = theme;
        }
        self
    }

    /// Default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "StorageDashboard", "storage-dashboard")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}
