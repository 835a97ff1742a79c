// SPDX-License-Identifier: MPL-2.0
//! User preferences stored in `settings.toml`.
//!
//! ```toml
//! [general]
//! language = "fr"        # optional, otherwise CLI flag or OS locale
//! theme_mode = "system"  # light | dark | system, any case
//!
//! [appearance]
//! animate_shapes = false # freeze the backdrop
//! ```
//!
//! The file lives in the directory picked by [`paths`]; tests pass an
//! explicit directory or file path instead. A missing file means defaults, an
//! unreadable one means defaults plus a warning key for the page.

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// i18n key shown when the settings file cannot be used.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

/// `[general]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// BCP-47 locale, e.g. `en-US` or `fr`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, deserialize_with = "theme_mode_any_case")]
    pub theme_mode: ThemeMode,
}

/// `[appearance]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceConfig {
    /// Let the backdrop shapes drift. Turn off for reduced motion.
    #[serde(default = "animate_by_default", skip_serializing_if = "Option::is_none")]
    pub animate_shapes: Option<bool>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            animate_shapes: animate_by_default(),
        }
    }
}

/// Whole settings file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub appearance: AppearanceConfig,
}

impl Config {
    /// Effective backdrop animation setting.
    #[must_use]
    pub fn animate_shapes(&self) -> bool {
        self.appearance
            .animate_shapes
            .unwrap_or(DEFAULT_ANIMATE_SHAPES)
    }
}

fn animate_by_default() -> Option<bool> {
    Some(DEFAULT_ANIMATE_SHAPES)
}

fn theme_mode_any_case<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<ThemeMode, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

fn settings_file(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = settings_file(base_dir).filter(|path| path.exists()) else {
        return (Config::default(), None);
    };
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "config unreadable, using defaults");
            (Config::default(), Some(LOAD_ERROR_KEY.to_string()))
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
