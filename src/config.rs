//! # Configuration Module
//!
//! This module provides optional configuration for put-license. Only traversal
//! and presentation settings are configurable; the extension to marker table
//! is fixed.
//!
//! Configuration can be specified in a `.put-license.toml` file in the root
//! directory or via the `PUT_LICENSE_CONFIG` environment variable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::logging::ColorMode;
use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".put-license.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "PUT_LICENSE_CONFIG";

/// Main configuration struct.
///
/// ```toml
/// follow-symlinks = true
/// colors = "never"
/// ```
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
  /// Follow symbolic links during traversal.
  #[serde(default)]
  pub follow_symlinks: Option<bool>,

  /// Color mode used when the CLI doesn't set one.
  #[serde(default)]
  pub colors: Option<ColorMode>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{}': {source}", .path.display())]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{}': {source}", .path.display())]
  ParseError { path: PathBuf, source: toml::de::Error },
}

impl Config {
  /// Load configuration from a file.
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `PUT_LICENSE_CONFIG` environment variable
/// 3. `.put-license.toml` in the root directory
///
/// # Returns
///
/// The path to the configuration file, or `None` if no config file is found.
pub fn discover_config_path(explicit_path: Option<&Path>, root: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    if path.exists() {
      verbose_log!("Using explicit config path: {}", path.display());
      return Some(path.to_path_buf());
    }
    verbose_log!("Explicit config path does not exist: {}", path.display());
    return None;
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  let root_config = root.join(DEFAULT_CONFIG_FILENAME);
  if root_config.is_file() {
    verbose_log!("Using root config: {}", root_config.display());
    return Some(root_config);
  }

  verbose_log!("No config file found");
  None
}

/// Load configuration from the discovered path, or `None` if there is none.
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path from CLI flag
/// * `root` - The directory being rewritten
/// * `no_config` - If true, skip config file discovery
pub fn load_config(explicit_path: Option<&Path>, root: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, root) {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}
