//! Configuration module for imgann
//!
//! Manages application defaults: display format, annotation file name and
//! which files count as images during discovery. Configuration is stored in
//! the user's config directory and can be overridden per run through
//! `IMGANN_*` environment variables.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Path display format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PathFormat {
    /// Display absolute paths
    #[default]
    Absolute,
    /// Display relative paths (relative to current directory)
    Relative,
}

impl FromStr for PathFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "absolute" => Ok(Self::Absolute),
            "relative" => Ok(Self::Relative),
            other => Err(ConfigError::Message(format!(
                "Invalid path format '{other}'. Expected 'absolute' or 'relative'"
            ))),
        }
    }
}

impl fmt::Display for PathFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute => f.write_str("absolute"),
            Self::Relative => f.write_str("relative"),
        }
    }
}

/// Keys accepted by `imgann config get/set`
pub const KEYS: [&str; 5] = [
    "quiet",
    "path_format",
    "annotation_file",
    "extensions",
    "recursive",
];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ImgannConfig {
    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Default format for displaying paths (absolute or relative)
    #[serde(default)]
    pub path_format: PathFormat,

    /// File name used when no annotation file is given on the command line
    #[serde(default = "default_annotation_file")]
    pub annotation_file: String,

    /// File extensions (without dot, lowercase) treated as images
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Scan subdirectories during discovery
    #[serde(default)]
    pub recursive: bool,
}

fn default_annotation_file() -> String {
    "annotation.csv".to_string()
}

fn default_extensions() -> Vec<String> {
    ["jpg", "jpeg", "png", "bmp", "gif", "webp"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for ImgannConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            path_format: PathFormat::default(),
            annotation_file: default_annotation_file(),
            extensions: default_extensions(),
            recursive: false,
        }
    }
}

impl ImgannConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("imgann").join("config.toml"))
    }

    /// Load configuration from the user config file, creating a default one
    /// if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there first if the
    /// file is missing
    ///
    /// `IMGANN_<KEY>` environment variables override the file in both cases;
    /// `IMGANN_EXTENSIONS` takes a comma-separated list.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created,
    /// or an override does not fit its key.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(path, env_overrides())
    }

    fn load_with_env(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::default().save_to(path)?;
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(env)
            .build()?;

        let mut config: Self = settings.try_deserialize()?;
        config.extensions = normalize_extensions(&config.extensions);
        Ok(config)
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Same as [`ImgannConfig::save`].
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Render the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for an unknown key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "quiet" => Ok(self.quiet.to_string()),
            "path_format" => Ok(self.path_format.to_string()),
            "annotation_file" => Ok(self.annotation_file.clone()),
            "extensions" => Ok(self.extensions.join(",")),
            "recursive" => Ok(self.recursive.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Parse `value` and store it under `key` (in memory only)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unknown key or a value that does not
    /// parse for that key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "quiet" => self.quiet = parse_bool(key, value)?,
            "path_format" => self.path_format = value.parse()?,
            "annotation_file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(ConfigError::Message(
                        "annotation_file cannot be empty".to_string(),
                    ));
                }
                self.annotation_file = value.to_string();
            }
            "extensions" => {
                self.extensions = normalize_extensions(&value.split(',').collect::<Vec<_>>());
            }
            "recursive" => self.recursive = parse_bool(key, value)?,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

/// Environment source for `IMGANN_<KEY>` overrides
fn env_overrides() -> Environment {
    Environment::with_prefix("IMGANN")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("extensions")
}

/// Lowercase, strip leading dots and drop empty entries
fn normalize_extensions<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values
        .iter()
        .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    value.trim().parse::<bool>().map_err(|_| {
        ConfigError::Message(format!(
            "Invalid value for {key}: '{value}'. Expected 'true' or 'false'"
        ))
    })
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        KEYS.join(", ")
    ))
}
