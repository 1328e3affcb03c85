use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to read tags file '{path}': {source}")]
    Tags {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Note index CSV opened when no --index argument is given.
    pub default_index: Option<PathBuf>,
    /// Root folder of the original documents referenced by `filepath`.
    pub pdf_root_folder: Option<PathBuf>,
    /// Tag vocabulary file for suggestions, one tag per line.
    pub tags_file: Option<PathBuf>,
    /// The full set of commonplace (index) keys notes may carry.
    pub commonplace_keys: Vec<String>,
    /// Display icon per commonplace key (lowercase key).
    pub key_icons: BTreeMap<String, String>,
    /// Display color per commonplace key (lowercase key).
    pub key_colors: BTreeMap<String, String>,
}

impl AppConfig {
    pub fn icon_for(&self, commonplace_key: &str) -> &str {
        self.key_icons
            .get(&commonplace_key.to_lowercase())
            .map(String::as_str)
            .unwrap_or("•")
    }

    pub fn color_for(&self, commonplace_key: &str) -> &str {
        self.key_colors
            .get(&commonplace_key.to_lowercase())
            .map(String::as_str)
            .unwrap_or("white")
    }
}

pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = path {
        load_config_from_path(path)
    } else {
        Ok(default_config().clone())
    }
}

pub fn load_config_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let path_display = path.display().to_string();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path_display.clone(),
        source,
    })?;

    toml::from_str::<AppConfig>(&raw).map_err(|source| ConfigError::Parse {
        path: path_display,
        source,
    })
}

pub fn default_config() -> &'static AppConfig {
    static DEFAULT_CONFIG: LazyLock<AppConfig> = LazyLock::new(AppConfig::default);
    &DEFAULT_CONFIG
}

/// Load the predefined tag vocabulary: one tag per line, blank lines and
/// `#` comment lines skipped, returned sorted.
pub fn load_predefined_tags(path: &Path) -> Result<Vec<String>, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Tags {
        path: path.display().to_string(),
        source,
    })?;

    let mut tags: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();
    tags.sort();
    Ok(tags)
}
