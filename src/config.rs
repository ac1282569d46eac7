//! # Configuration Module
//!
//! This module holds the constants that decide which files get a header and
//! how, along with optional overrides loaded from a `.copyhead.toml` file.
//!
//! With no configuration file the defaults reproduce the classic behaviour:
//! stamp `*.cs` files (except `*Designer.cs`) outside `.git` and `Extras`
//! directories with `copyright.template`, skipping files that already contain
//! `copyright file=`.
//!
//! The configuration file is located via the `--config` flag, the
//! `COPYHEAD_CONFIG` environment variable, or `.copyhead.toml` in the working
//! directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".copyhead.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "COPYHEAD_CONFIG";

/// Header template file, relative to the working directory.
pub const DEFAULT_TEMPLATE_PATH: &str = "copyright.template";

/// Token in the template replaced with each file's base name.
pub const DEFAULT_PLACEHOLDER: &str = "FILENAME";

/// Substring whose presence means a file already has its header.
///
/// This does not match the text a `// copyright FILENAME` style template
/// inserts; the two are independent settings and are never reconciled.
pub const DEFAULT_MARKER: &str = "copyright file=";

/// File name suffix selecting candidate files.
pub const DEFAULT_EXTENSION: &str = ".cs";

/// File name suffix of generated code that is never stamped.
pub const DEFAULT_GENERATED_SUFFIX: &str = "Designer.cs";

/// Directory path substrings whose subtrees are never entered.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[".git", "Extras"];

/// Fully resolved settings for a stamping run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSettings {
  /// Path to the header template.
  pub template_path: PathBuf,
  /// Placeholder token substituted with the file's base name.
  pub placeholder: String,
  /// Marker substring checked for before stamping.
  pub marker: String,
  /// File name suffix of candidate files.
  pub extension: String,
  /// File name suffix of generated files to leave alone.
  pub generated_suffix: String,
  /// Directory path substrings to prune from the walk.
  pub exclude_dirs: Vec<String>,
}

impl Default for HeaderSettings {
  fn default() -> Self {
    Self {
      template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
      placeholder: DEFAULT_PLACEHOLDER.to_string(),
      marker: DEFAULT_MARKER.to_string(),
      extension: DEFAULT_EXTENSION.to_string(),
      generated_suffix: DEFAULT_GENERATED_SUFFIX.to_string(),
      exclude_dirs: DEFAULT_EXCLUDE_DIRS.iter().map(|d| (*d).to_string()).collect(),
    }
  }
}

impl HeaderSettings {
  /// Overlays every value present in `config` onto these settings.
  pub fn merge_config(&mut self, config: Config) {
    if let Some(template) = config.template {
      self.template_path = template;
    }
    if let Some(placeholder) = config.placeholder {
      self.placeholder = placeholder;
    }
    if let Some(marker) = config.marker {
      self.marker = marker;
    }
    if let Some(extension) = config.extension {
      self.extension = extension;
    }
    if let Some(generated_suffix) = config.generated_suffix {
      self.generated_suffix = generated_suffix;
    }
    if let Some(exclude_dirs) = config.exclude_dirs {
      self.exclude_dirs = exclude_dirs;
    }
  }
}

/// Contents of a `.copyhead.toml` file.
///
/// Every key is optional; anything left out keeps its default.
///
/// ```toml
/// template = "tools/copyright.template"
/// placeholder = "FILENAME"
/// marker = "copyright file="
/// extension = ".cs"
/// generated-suffix = "Designer.cs"
/// exclude-dirs = [".git", "Extras", "obj"]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
  pub template: Option<PathBuf>,
  pub placeholder: Option<String>,
  pub marker: Option<String>,
  pub extension: Option<String>,
  pub generated_suffix: Option<String>,
  pub exclude_dirs: Option<Vec<String>>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// A value in the config file is unusable.
  #[error("Invalid value for '{key}': {message}")]
  InvalidValue { key: String, message: String },
}

impl Config {
  /// Load configuration from a file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    config.validate()?;

    Ok(config)
  }

  /// Validate the configuration.
  ///
  /// Rejects empty suffixes and empty directory markers, since an empty
  /// string matches every name and would either select or prune the whole
  /// tree. The marker and placeholder are taken as given.
  fn validate(&self) -> Result<(), ConfigError> {
    if let Some(ref extension) = self.extension
      && extension.is_empty()
    {
      return Err(ConfigError::InvalidValue {
        key: "extension".to_string(),
        message: "cannot be empty".to_string(),
      });
    }

    if let Some(ref suffix) = self.generated_suffix
      && suffix.is_empty()
    {
      return Err(ConfigError::InvalidValue {
        key: "generated-suffix".to_string(),
        message: "cannot be empty".to_string(),
      });
    }

    if let Some(ref dirs) = self.exclude_dirs
      && dirs.iter().any(|d| d.is_empty())
    {
      return Err(ConfigError::InvalidValue {
        key: "exclude-dirs".to_string(),
        message: "entries cannot be empty".to_string(),
      });
    }

    Ok(())
  }
}

/// Discover the configuration file path.
///
/// The configuration file is discovered in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `COPYHEAD_CONFIG` environment variable
/// 3. `.copyhead.toml` in `base_dir`
///
/// An explicit or environment path is returned even when it does not exist,
/// so loading it fails instead of silently falling back to the defaults.
pub fn discover_config_path(explicit_path: Option<&Path>, base_dir: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    verbose_log!("Using explicit config path: {}", path.display());
    return Some(path.to_path_buf());
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR)
    && !env_path.is_empty()
  {
    verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, env_path);
    return Some(PathBuf::from(env_path));
  }

  let local_config = base_dir.join(DEFAULT_CONFIG_FILENAME);
  if local_config.exists() {
    verbose_log!("Using config: {}", local_config.display());
    return Some(local_config);
  }

  verbose_log!("No config file found");
  None
}

/// Load configuration from the discovered path.
///
/// Returns `None` when discovery is disabled or no file is found.
pub fn load_config(explicit_path: Option<&Path>, base_dir: &Path, no_config: bool) -> Result<Option<Config>> {
  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(None);
  }

  match discover_config_path(explicit_path, base_dir) {
    Some(path) => {
      let config = Config::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(Some(config))
    }
    None => Ok(None),
  }
}
