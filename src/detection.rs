//! # Header Detection Module
//!
//! Decides whether a file already carries a stamped header.
//!
//! Detection runs two independent checks, either of which is enough:
//! 1. The content starts with the resolved `isHeader`/`isVueHeader` marker
//!    for the file, i.e. a header produced with the current settings.
//! 2. The content starts with one of the [`LEGACY_PREFIXES`] for the file's
//!    kind, i.e. a header produced with other settings or an older template.
//!
//! The second check does not depend on [`Config`], so changing the author or
//! company never causes a file to be stamped twice.
//!
//! Both checks see the content with `\r\n` line endings folded to `\n`, so a
//! header converted to CRLF after stamping is still recognized.

use std::borrow::Cow;
use std::path::Path;

use tracing::trace;

use crate::config::Config;
use crate::templates::{HeaderKind, Marker, TemplateDocument};

/// Fixed header openers recognized regardless of configuration.
///
/// New formats can be appended here without touching the marker check.
pub const LEGACY_PREFIXES: &[(HeaderKind, &str)] = &[
  (HeaderKind::Primary, "/*\nFile Name:"),
  (HeaderKind::Markup, "<!--\n/**\nFile Name:"),
];

/// Checks whether `content` starts with the resolved detection marker for
/// `path`.
pub fn has_current_marker(content: &str, path: &Path, config: &Config, templates: &TemplateDocument) -> bool {
  let marker = templates.render(Marker::IsHeaderCheck, path, config);
  content.starts_with(&marker)
}

/// Checks whether `content` starts with a legacy prefix of `kind`.
pub fn has_legacy_prefix(content: &str, kind: HeaderKind) -> bool {
  LEGACY_PREFIXES
    .iter()
    .any(|(prefix_kind, prefix)| *prefix_kind == kind && content.starts_with(prefix))
}

/// Folds CRLF line endings to LF.
fn normalize_line_endings(content: &str) -> Cow<'_, str> {
  if content.contains("\r\n") {
    Cow::Owned(content.replace("\r\n", "\n"))
  } else {
    Cow::Borrowed(content)
  }
}

/// Returns `true` if the file at `path` with `content` already has a header.
pub fn already_has_header(content: &str, path: &Path, config: &Config, templates: &TemplateDocument) -> bool {
  let content = normalize_line_endings(content);

  if has_current_marker(&content, path, config, templates) {
    trace!("{}: matches current header marker", path.display());
    return true;
  }

  if has_legacy_prefix(&content, HeaderKind::for_path(path)) {
    trace!("{}: matches legacy header prefix", path.display());
    return true;
  }

  false
}
