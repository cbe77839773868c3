use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::document::WriteOptions;
use crate::domain::VersionBump;
use crate::error::{Result, VersionerError};
use crate::manifest::DEFAULT_MANIFEST;

/// Name of the configuration file looked up in the working and config directories.
pub const CONFIG_FILE_NAME: &str = "versioner.toml";

/// Represents the complete configuration for versioner.
///
/// Contains the manifest location, the bump preselected by the prompt, and write behavior.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default = "default_bump")]
    pub default_bump: VersionBump,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_manifest() -> String {
    DEFAULT_MANIFEST.to_string()
}

fn default_bump() -> VersionBump {
    VersionBump::Patch
}

/// Configuration for how bumped documents are written.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    /// Write through a temporary file and rename instead of overwriting in place
    #[serde(default)]
    pub atomic_writes: bool,

    /// Terminate rewritten documents with a newline
    #[serde(default)]
    pub trailing_newline: bool,
}

impl BehaviorConfig {
    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            atomic: self.atomic_writes,
            trailing_newline: self.trailing_newline,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifest: default_manifest(),
            default_bump: default_bump(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Config {
    pub fn manifest_path(&self) -> PathBuf {
        PathBuf::from(&self.manifest)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versioner.toml` in current directory
/// 3. `versioner.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        PathBuf::from(CONFIG_FILE_NAME)
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            config_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        VersionerError::config(format!("cannot read {}: {}", path.display(), e))
    })?;

    let config: Config = toml::from_str(&config_str).map_err(|e| {
        VersionerError::config(format!("cannot parse {}: {}", path.display(), e))
    })?;

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}
