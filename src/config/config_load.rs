// src/config/config_load.rs
//
// loading of config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::*;
use crate::error::DeckError;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub window: WindowConfig,
    pub paths: PathConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub osc: OscConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load() -> Result<Self, DeckError> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::exe_dir().map(|dir| dir.join(CONFIG_FILE)) {
            if exe_config.exists() {
                return Self::load_from(exe_config);
            }
        }

        // Fallback to loading from the current working directory
        Self::load_from(CONFIG_FILE)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, DeckError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DeckError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, DeckError> {
        Ok(toml::from_str(content)?)
    }

    pub fn resolve_services_path(&self) -> PathBuf {
        Self::resolve_path(&self.paths.services_file)
    }

    pub fn resolve_image_dir(&self) -> PathBuf {
        Self::resolve_path(&self.paths.image_directory)
    }

    // Relative paths resolve against the executable's directory, then the working directory
    fn resolve_path(path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            return PathBuf::from(path);
        }
        Self::exe_dir()
            .map(|exe_dir| exe_dir.join(path))
            .filter(|candidate| candidate.exists())
            .unwrap_or_else(|| PathBuf::from(path))
    }

    fn exe_dir() -> Option<PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }
}
