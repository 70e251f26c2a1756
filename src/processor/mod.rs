//! # Processor Module
//!
//! This module contains the core functionality for stamping headers onto
//! files and checking for existing ones.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - Whole-file reading and crash-safe writing
//! - [`file_collector`] - Directory traversal, extension filtering and
//!   excluded-directory pruning
//!
//! The [`Processor`] struct is the main entry point, holding the run's
//! [`Config`] and [`TemplateDocument`].

mod file_collector;
mod file_io;

use std::path::{Path, PathBuf};

use anyhow::Result;
pub use file_collector::FileCollector;
pub use file_io::{FileIO, FileIoError};
use tracing::debug;

use crate::config::Config;
use crate::detection::already_has_header;
use crate::report::{FileAction, FileOutcome, RunSummary};
use crate::templates::{Marker, TemplateDocument};

/// Stamps headers onto files.
///
/// The `Processor` is responsible for:
/// - Collecting eligible files from a target path
/// - Detecting files that already carry a header
/// - Prepending the resolved header to the rest
/// - Reporting an outcome per file
pub struct Processor {
  /// Settings substituted into headers and used for file selection
  config: Config,

  /// Header and marker templates
  templates: TemplateDocument,

  /// Whether to only report missing headers without modifying files
  check_only: bool,
}

impl Processor {
  /// Creates a processor that modifies files.
  pub const fn new(config: Config, templates: TemplateDocument) -> Self {
    Self {
      config,
      templates,
      check_only: false,
    }
  }

  /// Switches the processor to check-only mode, where files missing a header
  /// are reported as [`FileAction::Missing`] and nothing is written.
  pub fn check_only(mut self, check_only: bool) -> Self {
    self.check_only = check_only;
    self
  }

  pub const fn config(&self) -> &Config {
    &self.config
  }

  /// Collects the files under `target` that would be processed, in order.
  ///
  /// # Errors
  ///
  /// Returns an error if directory traversal fails.
  pub fn collect_files(&self, target: &Path) -> Result<Vec<PathBuf>> {
    FileCollector::new(&self.config).collect(target)
  }

  /// Checks whether `content` of the file at `path` already has a header.
  pub fn has_header(&self, content: &str, path: &Path) -> bool {
    already_has_header(content, path, &self.config, &self.templates)
  }

  /// Resolves the header that would be prepended to `path`.
  pub fn header_for(&self, path: &Path) -> String {
    self.templates.render(Marker::Header, path, &self.config)
  }

  /// Applies the header to one file.
  ///
  /// Reads the file, skips it if it already has a header, and otherwise
  /// rewrites it as header followed by the original content. Exactly one
  /// write happens per added file and none per skipped file.
  ///
  /// # Errors
  ///
  /// Returns [`FileIoError::Read`] or [`FileIoError::Write`] if the file
  /// cannot be read or replaced.
  pub fn apply(&self, path: &Path) -> Result<FileOutcome, FileIoError> {
    let content = FileIO::read_full_content(path)?;

    if self.has_header(&content, path) {
      debug!("Skipping: {} (header present)", path.display());
      return Ok(FileOutcome::new(path, FileAction::Skipped));
    }

    if self.check_only {
      debug!("Missing header: {}", path.display());
      return Ok(FileOutcome::new(path, FileAction::Missing));
    }

    let mut new_content = self.header_for(path);
    new_content.push_str(&content);
    FileIO::write_file(path, &new_content)?;

    debug!("Added header to: {}", path.display());
    Ok(FileOutcome::new(path, FileAction::Added))
  }

  /// Applies headers to `files` in order, calling `on_outcome` after each.
  ///
  /// Processing stops at the first error.
  ///
  /// # Errors
  ///
  /// Returns the first read or write failure.
  pub fn process_files<F>(&self, files: &[PathBuf], mut on_outcome: F) -> Result<RunSummary>
  where
    F: FnMut(&FileOutcome),
  {
    let mut summary = RunSummary::default();

    for path in files {
      let outcome = self.apply(path)?;
      summary.record(outcome.action);
      on_outcome(&outcome);
    }

    Ok(summary)
  }
}

/// Applies the header for `path` using explicit settings.
///
/// # Errors
///
/// See [`Processor::apply`].
pub fn apply(path: &Path, config: &Config, templates: &TemplateDocument) -> Result<FileOutcome, FileIoError> {
  Processor::new(config.clone(), templates.clone()).apply(path)
}
