use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tab shown when the dashboard starts or is reset.
pub const DEFAULT_TAB_ID: &str = "storage-overview";

/// Colour theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the system preference.
    #[default]
    Auto,
}

impl Theme {
    /// All available themes for pickers.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::Auto];

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Auto => "Auto",
        }
    }

    /// Wire name as used in settings files.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when parsing an unknown theme name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown theme: {}", self.0)
    }
}

impl std::error::Error for UnknownTheme {}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|theme| theme.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Transient UI flags, independent of storage data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiSnapshot {
    /// Identifier of the selected tab (not checked against the registry).
    pub active_tab_id: String,
    pub theme: Theme,
    pub is_loading: bool,
    /// User-facing error message, if any.
    pub error: Option<String>,
}

impl Default for UiSnapshot {
    fn default() -> Self {
        Self {
            active_tab_id: DEFAULT_TAB_ID.to_string(),
            theme: Theme::Auto,
            is_loading: false,
            error: None,
        }
    }
}
