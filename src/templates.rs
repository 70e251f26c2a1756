//! # Templates Module
//!
//! This module loads the header template document and resolves its
//! placeholders for a specific file.
//!
//! The module includes:
//! - [`TemplateDocument`] holding the four line sequences of a document
//! - [`HeaderKind`] and [`Marker`] selecting one of those sequences
//! - [`Placeholder`] enumerating the supported `{{TOKENS}}`
//! - [`resolve`] filling a line sequence for one path
//!
//! ## Example
//!
//! ```rust
//! use std::path::Path;
//!
//! use headerstamp::config::Config;
//! use headerstamp::templates::{HeaderKind, Marker, TemplateDocument, resolve};
//!
//! # fn main() -> anyhow::Result<()> {
//! let templates = TemplateDocument::builtin()?;
//! let config = Config::from_map(&Default::default()).with_year("2025");
//!
//! let path = Path::new("src/stores/cart.ts");
//! let lines = templates.get(HeaderKind::for_path(path), Marker::Header);
//! let header = resolve(lines, path, &config);
//!
//! assert!(header.starts_with("/*\nFile Name: cart.ts\n"));
//! assert!(header.contains("Description: Pinia/Vuex store module for cart."));
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::trace;

use crate::config::Config;
use crate::description::generate_description;
use crate::verbose_log;

/// Default file name of the template document.
pub const DEFAULT_TEMPLATE_FILENAME: &str = "header.json";

/// Environment variable for specifying the template document path.
pub const TEMPLATE_ENV_VAR: &str = "HEADERSTAMP_TEMPLATES";

/// Template document compiled into the binary.
const BUILTIN_TEMPLATES: &str = include_str!("../templates/header.json");

/// Extensions (lowercase, without the dot) whose headers are wrapped in an
/// HTML comment.
const MARKUP_EXTENSIONS: &[&str] = &["vue", "svelte", "html"];

/// Error type for template document operations.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
  /// The template document could not be read.
  #[error("Failed to read template file '{path}': {source}")]
  Read { path: PathBuf, source: std::io::Error },

  /// The document is not valid JSON or lacks a required key.
  #[error("Failed to parse template document '{origin}': {source}")]
  Parse { origin: String, source: serde_json::Error },
}

/// The header family a file belongs to, selected by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderKind {
  /// Plain block comment (`/* ... */`)
  Primary,
  /// Block comment wrapped in `<!-- ... -->` for single-file components
  Markup,
}

impl HeaderKind {
  /// Selects the kind for `path` from its extension, case-insensitively.
  pub fn for_path(path: &Path) -> Self {
    let is_markup = path
      .extension()
      .map(|ext| ext.to_string_lossy().to_lowercase())
      .is_some_and(|ext| MARKUP_EXTENSIONS.contains(&ext.as_str()));

    if is_markup { HeaderKind::Markup } else { HeaderKind::Primary }
  }
}

/// Which body of a kind to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
  /// The full header that gets prepended
  Header,
  /// The prefix used to recognize an existing header
  IsHeaderCheck,
}

/// The placeholder tokens understood by [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
  FileName,
  Author,
  Year,
  Company,
  Description,
}

impl Placeholder {
  /// All tokens, in substitution order.
  pub const ALL: [Placeholder; 5] = [
    Placeholder::FileName,
    Placeholder::Author,
    Placeholder::Year,
    Placeholder::Company,
    Placeholder::Description,
  ];

  /// The literal text of this token inside a template line.
  pub const fn token(self) -> &'static str {
    match self {
      Placeholder::FileName => "{{FILE_NAME}}",
      Placeholder::Author => "{{AUTHOR}}",
      Placeholder::Year => "{{YEAR}}",
      Placeholder::Company => "{{COMPANY}}",
      Placeholder::Description => "{{DESCRIPTION}}",
    }
  }

  /// The value this token takes for `path` under `config`.
  pub fn value(self, path: &Path, config: &Config) -> String {
    match self {
      Placeholder::FileName => path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default(),
      Placeholder::Author => config.author.clone(),
      Placeholder::Year => config.year.clone(),
      Placeholder::Company => config.company.clone(),
      Placeholder::Description => generate_description(path),
    }
  }
}

/// A loaded template document.
///
/// All four entries are required. Lines may contain any text; placeholder
/// tokens are left for [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateDocument {
  /// Header for [`HeaderKind::Primary`] files
  pub header: Vec<String>,

  /// Header for [`HeaderKind::Markup`] files
  #[serde(rename = "vueHeader")]
  pub vue_header: Vec<String>,

  /// Detection prefix for [`HeaderKind::Primary`] files
  #[serde(rename = "isHeader")]
  pub is_header: Vec<String>,

  /// Detection prefix for [`HeaderKind::Markup`] files
  #[serde(rename = "isVueHeader")]
  pub is_vue_header: Vec<String>,
}

impl TemplateDocument {
  /// Parses a template document from JSON text.
  ///
  /// # Errors
  ///
  /// Returns [`TemplateError::Parse`] if the text is not valid JSON or any of
  /// `header`, `vueHeader`, `isHeader`, `isVueHeader` is missing.
  pub fn parse(content: &str, origin: &str) -> Result<Self, TemplateError> {
    serde_json::from_str(content).map_err(|source| TemplateError::Parse {
      origin: origin.to_string(),
      source,
    })
  }

  /// Loads a template document from a file.
  ///
  /// # Errors
  ///
  /// Returns [`TemplateError::Read`] if the file cannot be read, or
  /// [`TemplateError::Parse`] if its content is malformed.
  pub fn load(path: &Path) -> Result<Self, TemplateError> {
    verbose_log!("Loading templates from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| TemplateError::Read {
      path: path.to_path_buf(),
      source,
    })?;

    Self::parse(&content, &path.display().to_string())
  }

  /// The document shipped with headerstamp.
  ///
  /// # Errors
  ///
  /// Only fails if the embedded document is malformed.
  pub fn builtin() -> Result<Self, TemplateError> {
    Self::parse(BUILTIN_TEMPLATES, "<builtin>")
  }

  /// Returns the raw lines for a kind and marker.
  pub fn get(&self, kind: HeaderKind, marker: Marker) -> &[String] {
    match (kind, marker) {
      (HeaderKind::Primary, Marker::Header) => &self.header,
      (HeaderKind::Markup, Marker::Header) => &self.vue_header,
      (HeaderKind::Primary, Marker::IsHeaderCheck) => &self.is_header,
      (HeaderKind::Markup, Marker::IsHeaderCheck) => &self.is_vue_header,
    }
  }

  /// Resolves the body selected by `marker` for `path`'s kind.
  pub fn render(&self, marker: Marker, path: &Path, config: &Config) -> String {
    resolve(self.get(HeaderKind::for_path(path), marker), path, config)
  }
}

/// Fills a line sequence for one file.
///
/// Lines are joined with `\n` and a trailing `\n` is appended. Each
/// [`Placeholder`] token is then replaced by its value; any other `{{...}}`
/// text is left untouched.
pub fn resolve(lines: &[String], path: &Path, config: &Config) -> String {
  let mut text = lines.join("\n");
  text.push('\n');

  for placeholder in Placeholder::ALL {
    let token = placeholder.token();
    if text.contains(token) {
      text = text.replace(token, &placeholder.value(path, config));
    }
  }

  trace!("Resolved {} template lines for {}", lines.len(), path.display());
  text
}

/// Discover the template document path.
///
/// The document is discovered in the following order:
/// 1. Path specified via `--templates` (passed as `explicit_path`)
/// 2. Path specified via the `HEADERSTAMP_TEMPLATES` environment variable
/// 3. `header.json` in `current_dir`, if it exists
///
/// Returns `None` when the built-in document should be used.
pub fn discover_template_path(explicit_path: Option<&Path>, current_dir: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    verbose_log!("Using explicit template path: {}", path.display());
    return Some(path.to_path_buf());
  }

  if let Ok(env_path) = std::env::var(TEMPLATE_ENV_VAR)
    && !env_path.is_empty()
  {
    verbose_log!("Using templates from {}: {}", TEMPLATE_ENV_VAR, env_path);
    return Some(PathBuf::from(env_path));
  }

  let local = current_dir.join(DEFAULT_TEMPLATE_FILENAME);
  if local.is_file() {
    verbose_log!("Using local templates: {}", local.display());
    return Some(local);
  }

  verbose_log!("No template file found, using builtin templates");
  None
}

/// Loads the discovered template document, or the built-in one.
///
/// # Errors
///
/// Returns an error if a discovered document cannot be read or parsed.
pub fn load_templates(explicit_path: Option<&Path>, current_dir: &Path) -> Result<TemplateDocument, TemplateError> {
  match discover_template_path(explicit_path, current_dir) {
    Some(path) => TemplateDocument::load(&path),
    None => TemplateDocument::builtin(),
  }
}
