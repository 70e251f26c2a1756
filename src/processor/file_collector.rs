//! # File Collector Module
//!
//! This module collects the files eligible for stamping from a target path,
//! filtering by extension and pruning excluded directories.

use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, trace};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;

/// File collector for directory traversal.
///
/// The `FileCollector` handles:
/// - Accepting a single file when its name matches a configured extension
/// - Walking directories, never descending into excluded directory names
/// - Returning a sorted, duplicate-free list of paths
pub struct FileCollector<'a> {
  config: &'a Config,
}

impl<'a> FileCollector<'a> {
  pub const fn new(config: &'a Config) -> Self {
    Self { config }
  }

  /// Collects eligible files under `target`, which may be a file or a
  /// directory.
  ///
  /// # Errors
  ///
  /// Returns an error if a directory cannot be read during traversal.
  pub fn collect(&self, target: &Path) -> Result<Vec<PathBuf>> {
    if target.is_file() {
      return Ok(if self.matches_extension(target) {
        vec![target.to_path_buf()]
      } else {
        trace!("Skipping: {} (extension not configured)", target.display());
        Vec::new()
      });
    }

    self.traverse_directory(target)
  }

  /// Walks `dir` recursively and returns the matching files in sorted order.
  ///
  /// # Errors
  ///
  /// Returns an error if a directory cannot be read.
  pub fn traverse_directory(&self, dir: &Path) -> Result<Vec<PathBuf>> {
    if self.has_excluded_component(dir) {
      debug!("Skipping: {} (excluded directory)", dir.display());
      return Ok(Vec::new());
    }

    debug!("Scanning directory: {}", dir.display());
    let start_time = std::time::Instant::now();

    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
      .sort_by_file_name()
      .into_iter()
      .filter_entry(|entry| !self.is_pruned(entry));

    for entry in walker {
      let entry = entry.with_context(|| format!("Failed to traverse directory: {}", dir.display()))?;
      let file_type = entry.file_type();

      if file_type.is_symlink() {
        trace!("Skipping: {} (symlink)", entry.path().display());
        continue;
      }

      if file_type.is_file() && self.matches_extension(entry.path()) {
        files.push(entry.into_path());
      }
    }

    files.sort();
    files.dedup();

    debug!(
      "Found {} files in {}ms",
      files.len(),
      start_time.elapsed().as_millis()
    );

    Ok(files)
  }

  fn matches_extension(&self, path: &Path) -> bool {
    path
      .file_name()
      .is_some_and(|name| self.config.matches_extension(&name.to_string_lossy()))
  }

  /// Directories below the root whose name is excluded are not entered.
  fn is_pruned(&self, entry: &DirEntry) -> bool {
    let pruned = entry.depth() > 0
      && entry.file_type().is_dir()
      && self.config.is_excluded_dir(&entry.file_name().to_string_lossy());

    if pruned {
      trace!("Pruning: {} (excluded directory)", entry.path().display());
    }
    pruned
  }

  fn has_excluded_component(&self, path: &Path) -> bool {
    path.components().any(|component| match component {
      Component::Normal(name) => self.config.is_excluded_dir(&name.to_string_lossy()),
      _ => false,
    })
  }
}
