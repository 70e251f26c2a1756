//! # Report Module
//!
//! Per-file outcomes of a run and the summary printed at the end. Outcomes
//! live only for the duration of the run.

use std::path::PathBuf;

/// Action taken on a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
  /// The file already had a header and was left untouched
  Skipped,
  /// A header was prepended to the file
  Added,
  /// Check mode only: the file lacks a header and would be stamped
  Missing,
}

impl FileAction {
  /// Short label used in the per-file output lines.
  pub const fn label(self) -> &'static str {
    match self {
      FileAction::Skipped => "skip",
      FileAction::Added => "added",
      FileAction::Missing => "missing",
    }
  }
}

impl std::fmt::Display for FileAction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.label())
  }
}

/// Outcome of processing one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
  /// Path to the file
  pub path: PathBuf,
  /// Action taken on the file
  pub action: FileAction,
}

impl FileOutcome {
  pub fn new(path: impl Into<PathBuf>, action: FileAction) -> Self {
    Self {
      path: path.into(),
      action,
    }
  }
}

/// Counts over a run's outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
  pub total: usize,
  pub added: usize,
  pub skipped: usize,
  pub missing: usize,
}

impl RunSummary {
  /// Records one outcome.
  pub const fn record(&mut self, action: FileAction) {
    self.total += 1;
    match action {
      FileAction::Added => self.added += 1,
      FileAction::Skipped => self.skipped += 1,
      FileAction::Missing => self.missing += 1,
    }
  }

  /// Whether any file was found lacking a header in check mode.
  pub const fn has_missing(&self) -> bool {
    self.missing > 0
  }
}
