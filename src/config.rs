//! # Configuration Module
//!
//! This module loads the run configuration for headerstamp: who authored the
//! files, which company holds the copyright, the copyright year, and which
//! files are eligible for stamping.
//!
//! Configuration lives in an env-style `key=value` file, `.env` in the
//! current directory by default. Another file can be selected with the
//! `--env-file` flag or the `HEADERSTAMP_ENV` environment variable.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use chrono::Datelike;
use tracing::{debug, warn};

use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_ENV_FILENAME: &str = ".env";

/// Environment variable for specifying the config file path.
pub const ENV_FILE_ENV_VAR: &str = "HEADERSTAMP_ENV";

/// Config keys understood by [`Config::from_map`].
pub const AUTHOR_KEY: &str = "HEADER_AUTHOR";
pub const COMPANY_KEY: &str = "HEADER_COMPANY";
pub const YEAR_KEY: &str = "HEADER_YEAR";
pub const EXTENSIONS_KEY: &str = "HEADER_EXTENSIONS";
pub const EXCLUDE_DIRS_KEY: &str = "HEADER_EXCLUDE_DIRS";

pub const DEFAULT_EXTENSIONS: &str = ".ts,.vue";
pub const DEFAULT_EXCLUDE_DIRS: &str = "node_modules,.git";

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// No config file exists where one was expected.
  #[error("Config file not found at '{path}'. Copy .env.example to .env and fill in your values.")]
  Missing { path: PathBuf },

  /// The config file exists but could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  Read { path: PathBuf, source: std::io::Error },
}

/// Resolved, immutable settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Value substituted for `{{AUTHOR}}`
  pub author: String,
  /// Value substituted for `{{COMPANY}}`
  pub company: String,
  /// Value substituted for `{{YEAR}}`
  pub year: String,
  /// File-name suffixes eligible for stamping, each with its leading `.`
  pub extensions: BTreeSet<String>,
  /// Directory names pruned from traversal
  pub exclude_dirs: BTreeSet<String>,
}

impl Config {
  /// Builds a config from a flat key/value mapping, applying defaults for
  /// absent keys.
  ///
  /// An unset or empty `HEADER_YEAR` falls back to the current calendar year.
  pub fn from_map(vars: &HashMap<String, String>) -> Self {
    let get = |key: &str| vars.get(key).map(String::as_str);

    let year = match get(YEAR_KEY) {
      Some(year) if !year.is_empty() => year.to_string(),
      _ => chrono::Local::now().year().to_string(),
    };

    let extensions = split_list(get(EXTENSIONS_KEY).unwrap_or(DEFAULT_EXTENSIONS))
      .map(|ext| if ext.starts_with('.') { ext.to_string() } else { format!(".{ext}") })
      .collect();

    let exclude_dirs = split_list(get(EXCLUDE_DIRS_KEY).unwrap_or(DEFAULT_EXCLUDE_DIRS))
      .map(str::to_string)
      .collect();

    Self {
      author: get(AUTHOR_KEY).unwrap_or_default().to_string(),
      company: get(COMPANY_KEY).unwrap_or_default().to_string(),
      year,
      extensions,
      exclude_dirs,
    }
  }

  /// Loads and resolves the config file at `path`.
  ///
  /// # Errors
  ///
  /// Returns [`ConfigError::Missing`] when the file does not exist and
  /// [`ConfigError::Read`] when it cannot be read.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let vars = load_env_file(path)?;
    Ok(Self::from_map(&vars))
  }

  /// Replaces the configured year, e.g. from a `--year` flag.
  pub fn with_year(mut self, year: impl Into<String>) -> Self {
    self.year = year.into();
    self
  }

  /// Checks whether a file name ends with one of the configured extensions.
  pub fn matches_extension(&self, file_name: &str) -> bool {
    self.extensions.iter().any(|ext| file_name.ends_with(ext.as_str()))
  }

  /// Checks whether a single path segment names an excluded directory.
  pub fn is_excluded_dir(&self, segment: &str) -> bool {
    self.exclude_dirs.contains(segment)
  }
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
  raw.split(',').map(str::trim).filter(|entry| !entry.is_empty())
}

/// Parses env-style `key=value` text into a mapping.
///
/// Blank lines and `#` comments are skipped, the first `=` separates key from
/// value, and a value wrapped in matching quotes is unquoted. Later keys
/// overwrite earlier ones.
pub fn parse_env(content: &str) -> HashMap<String, String> {
  let mut vars = HashMap::new();

  for (index, raw_line) in content.lines().enumerate() {
    let line = raw_line.trim();
    if line.is_empty() || line.starts_with('#') {
      continue;
    }

    let Some((key, value)) = line.split_once('=') else {
      warn!("Ignoring line {} without '=' in config file", index + 1);
      continue;
    };

    vars.insert(key.trim().to_string(), unquote(value.trim()).to_string());
  }

  vars
}

fn unquote(value: &str) -> &str {
  for quote in ['"', '\''] {
    if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
      return &value[1..value.len() - 1];
    }
  }
  value
}

/// Reads and parses an env-style file.
///
/// # Errors
///
/// Returns [`ConfigError::Missing`] if `path` does not exist, or
/// [`ConfigError::Read`] if reading it fails.
pub fn load_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
  verbose_log!("Loading config from: {}", path.display());

  if !path.is_file() {
    return Err(ConfigError::Missing {
      path: path.to_path_buf(),
    });
  }

  let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
    path: path.to_path_buf(),
    source,
  })?;

  let vars = parse_env(&content);
  debug!("Loaded {} config entries from {}", vars.len(), path.display());
  Ok(vars)
}

/// Discover the config file path.
///
/// The config file is discovered in the following order:
/// 1. Path specified via `--env-file` (passed as `explicit_path`)
/// 2. Path specified via the `HEADERSTAMP_ENV` environment variable
/// 3. `.env` in `current_dir`
///
/// The returned path is not checked for existence; [`Config::load`] reports a
/// missing file.
pub fn discover_env_path(explicit_path: Option<&Path>, current_dir: &Path) -> PathBuf {
  if let Some(path) = explicit_path {
    verbose_log!("Using explicit config path: {}", path.display());
    return path.to_path_buf();
  }

  if let Ok(env_path) = std::env::var(ENV_FILE_ENV_VAR)
    && !env_path.is_empty()
  {
    verbose_log!("Using config from {}: {}", ENV_FILE_ENV_VAR, env_path);
    return PathBuf::from(env_path);
  }

  current_dir.join(DEFAULT_ENV_FILENAME)
}
