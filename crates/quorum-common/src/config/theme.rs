//! Theme configuration
//!
//! Static styling consumed by the tree presenter: status glyphs and colors,
//! sidebar colors, roster labels. Values are opaque lookup strings; the
//! terminal toolkit interprets them. Loads from an optional TOML file with
//! `QUORUM_*` environment overrides, falling back to complete defaults.

use serde::Deserialize;

use quorum_core::Status;

/// Colors and glyph for presence statuses
#[derive(Debug, Clone, Deserialize)]
pub struct StatusTheme {
    #[serde(default = "default_status_glyph")]
    pub glyph: String,
    #[serde(default = "default_online_color")]
    pub online: String,
    #[serde(default = "default_idle_color")]
    pub idle: String,
    #[serde(default = "default_dnd_color")]
    pub dnd: String,
    #[serde(default = "default_offline_color")]
    pub offline: String,
}

impl StatusTheme {
    /// Color for a given status
    #[must_use]
    pub fn color(&self, status: Status) -> &str {
        match status {
            Status::Online => &self.online,
            Status::Idle => &self.idle,
            Status::Dnd => &self.dnd,
            Status::Offline => &self.offline,
        }
    }
}

impl Default for StatusTheme {
    fn default() -> Self {
        Self {
            glyph: default_status_glyph(),
            online: default_online_color(),
            idle: default_idle_color(),
            dnd: default_dnd_color(),
            offline: default_offline_color(),
        }
    }
}

/// Colors for the guild/folder sidebar
#[derive(Debug, Clone, Deserialize)]
pub struct SidebarTheme {
    #[serde(default = "default_dm_label")]
    pub dm_label: String,
    #[serde(default = "default_dm_color")]
    pub dm_color: String,
    #[serde(default = "default_folder_color")]
    pub folder_color: String,
}

impl Default for SidebarTheme {
    fn default() -> Self {
        Self {
            dm_label: default_dm_label(),
            dm_color: default_dm_color(),
            folder_color: default_folder_color(),
        }
    }
}

/// Full presentation theme
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Theme {
    #[serde(default)]
    pub status: StatusTheme,
    #[serde(default)]
    pub sidebar: SidebarTheme,
    /// Label of the terminal roster group
    #[serde(default = "default_offline_label")]
    pub offline_label: String,
}

impl Theme {
    /// Load the theme from an optional file plus environment overrides
    ///
    /// Missing file and missing keys fall back to defaults; only a
    /// malformed file is an error.
    pub fn load(path: Option<&str>) -> Result<Self, ThemeError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::with_name(path).required(false));
        }
        let settings = builder
            .add_source(::config::Environment::with_prefix("QUORUM").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

/// Theme loading errors
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("Failed to load theme: {0}")]
    Load(#[from] ::config::ConfigError),
}

fn default_status_glyph() -> String {
    "\u{25cf} ".to_string()
}

fn default_online_color() -> String {
    "green".to_string()
}

fn default_idle_color() -> String {
    "yellow".to_string()
}

fn default_dnd_color() -> String {
    "red".to_string()
}

fn default_offline_color() -> String {
    "gray".to_string()
}

fn default_dm_label() -> String {
    "Direct Messages".to_string()
}

fn default_dm_color() -> String {
    "white".to_string()
}

fn default_folder_color() -> String {
    "white".to_string()
}

fn default_offline_label() -> String {
    "Offline".to_string()
}
