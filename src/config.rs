// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving viewer preferences to a `settings.toml` file, and centralizes the
//! viewer's default dimensions.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedFolio";

/// Default viewport clip width in pixels.
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 400.0;
/// Default viewport clip height in pixels.
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 300.0;
/// Default exponent step applied per wheel notch (`exp(±step)`).
pub const DEFAULT_WHEEL_ZOOM_STEP: f32 = 0.1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub viewport_width: Option<f32>,
    #[serde(default)]
    pub viewport_height: Option<f32>,
    #[serde(default)]
    pub wheel_zoom_step: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport_width: Some(DEFAULT_VIEWPORT_WIDTH),
            viewport_height: Some(DEFAULT_VIEWPORT_HEIGHT),
            wheel_zoom_step: Some(DEFAULT_WHEEL_ZOOM_STEP),
        }
    }
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
