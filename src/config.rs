//! Configuration loading
//!
//! Reads `~/.config/hoverpop/config.toml`. A missing file is silently
//! replaced by defaults; an unreadable, malformed or out-of-range file
//! yields defaults plus a warning for the caller to surface.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, DEFAULT_HIDE_DELAY_MS, DEFAULT_SHOW_DELAY_MS, TooltipConfig};

use crate::position::DEFAULT_PADDING;

/// Loaded configuration and any non-fatal problem found while loading it
#[derive(Debug, Clone)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Default location of the config file
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("hoverpop").join("config.toml"))
}

/// Load configuration from the default location
pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

/// Load configuration from `path`
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    if !path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config file: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&content) {
        Ok(config) => validate(config),
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("Invalid config file: {}", e)),
        },
    }
}

fn validate(mut config: Config) -> ConfigResult {
    let padding = config.tooltip.padding;
    if padding.is_finite() && padding >= 0.0 {
        return ConfigResult {
            config,
            warning: None,
        };
    }

    config.tooltip.padding = DEFAULT_PADDING;
    ConfigResult {
        config,
        warning: Some(format!(
            "Invalid tooltip padding {}, using {}",
            padding, DEFAULT_PADDING
        )),
    }
}
