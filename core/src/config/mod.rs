//! Configuration management
//!
//! Optional `clawtank.toml`, looked up in the working directory and then in
//! the user's config directory. Every key has a default, so a missing file is
//! the same as an empty one.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::output::ColorMode;
use crate::replay::{Pacing, DEFAULT_MAX_DELAY_MS, DEFAULT_SCALE_FACTOR};

pub const CONFIG_FILE_NAME: &str = "clawtank.toml";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error occurred while reading the config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub replay: ReplayConfig,
}

/// Playback settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayConfig {
    /// Milliseconds of playback per recorded second
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,
    /// Cap on a single inter-event wait
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
    #[serde(default)]
    pub color: ColorMode,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            scale_factor: default_scale_factor(),
            max_delay_ms: default_max_delay_ms(),
            color: ColorMode::default(),
        }
    }
}

impl ReplayConfig {
    pub fn pacing(&self) -> Pacing {
        Pacing::new(self.scale_factor.max(0.0), self.max_delay_ms)
    }
}

fn default_scale_factor() -> f64 {
    DEFAULT_SCALE_FACTOR
}

fn default_max_delay_ms() -> u64 {
    DEFAULT_MAX_DELAY_MS
}

impl Config {
    /// Load configuration from a specific file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load from the first config file found, or fall back to defaults
    ///
    /// A broken file is reported and ignored.
    pub fn load_or_default() -> Self {
        let Some(path) = find_config_file() else {
            debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                debug!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Find the configuration file in standard locations
pub fn find_config_file() -> Option<PathBuf> {
    if let Ok(cwd) = std::env::current_dir() {
        let path = cwd.join(CONFIG_FILE_NAME);
        if path.exists() {
            return Some(path);
        }
    }

    let path = get_config_dir()?.join(CONFIG_FILE_NAME);
    path.exists().then_some(path)
}

/// Get the configuration directory path
pub fn get_config_dir() -> Option<PathBuf> {
    if let Some(dir) = dirs::config_dir() {
        return Some(dir.join("clawtank"));
    }

    home::home_dir().map(|home| home.join(".config").join("clawtank"))
}
