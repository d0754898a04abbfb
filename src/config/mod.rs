// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[rotation]` - Auto-advance timing for rotating panels
//!
//! # Examples
//!
//! ```no_run
//! use atm_atlas::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "AtmAtlas";

/// Seconds between automatic panel advances.
pub const DEFAULT_ROTATION_TICK_SECS: u64 = 12;
/// Seconds of inactivity after an explicit selection before auto-advance resumes.
pub const DEFAULT_ROTATION_RESUME_SECS: u64 = 90;

pub const MIN_ROTATION_TICK_SECS: u64 = 2;
pub const MAX_ROTATION_TICK_SECS: u64 = 60;
pub const MIN_ROTATION_RESUME_SECS: u64 = 10;
pub const MAX_ROTATION_RESUME_SECS: u64 = 600;

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Timing for the auto-rotating panel selectors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RotationConfig {
    /// Seconds between automatic advances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_secs: Option<u64>,

    /// Seconds before auto-advance resumes after a click selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub rotation: RotationConfig,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
