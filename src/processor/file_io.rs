//! # File I/O Module
//!
//! This module provides the whole-file read and write operations used by the
//! processor.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Error type for file operations on a target path.
#[derive(Debug, thiserror::Error)]
pub enum FileIoError {
  /// The file could not be read as UTF-8 text.
  #[error("Failed to read file '{path}': {source}")]
  Read { path: PathBuf, source: std::io::Error },

  /// The new content could not be written.
  #[error("Failed to write file '{path}': {source}")]
  Write { path: PathBuf, source: std::io::Error },
}

/// File I/O operations for the processor.
///
/// This struct provides static methods for reading and writing files.
pub struct FileIO;

impl FileIO {
  /// Reads the full content of a file.
  ///
  /// # Errors
  ///
  /// Returns [`FileIoError::Read`] if the file cannot be opened or is not
  /// valid UTF-8.
  pub fn read_full_content(path: &Path) -> Result<String, FileIoError> {
    std::fs::read_to_string(path).map_err(|source| FileIoError::Read {
      path: path.to_path_buf(),
      source,
    })
  }

  /// Replaces the content of a file.
  ///
  /// The content is written to a temporary file in the same directory, which
  /// takes over the original's permissions and is then renamed over it.
  /// Readers never observe a partially written file. A symlink is written
  /// through: the file it points to is replaced and the link is kept.
  ///
  /// # Errors
  ///
  /// Returns [`FileIoError::Write`] if any step fails; the original file is
  /// left untouched in that case.
  pub fn write_file(path: &Path, content: &str) -> Result<(), FileIoError> {
    let write_err = |source: std::io::Error| FileIoError::Write {
      path: path.to_path_buf(),
      source,
    };

    let target = Self::resolve_symlink(path).map_err(write_err)?;

    let dir = match target.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(content.as_bytes()).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;

    if let Ok(metadata) = std::fs::metadata(&target) {
      std::fs::set_permissions(temp.path(), metadata.permissions()).map_err(write_err)?;
    }

    temp.persist(&target).map_err(|e| write_err(e.error))?;
    Ok(())
  }

  /// Returns the file a symlink ultimately points to, or `path` itself.
  fn resolve_symlink(path: &Path) -> std::io::Result<PathBuf> {
    match std::fs::symlink_metadata(path) {
      Ok(metadata) if metadata.file_type().is_symlink() => std::fs::canonicalize(path),
      _ => Ok(path.to_path_buf()),
    }
  }
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_write_then_read() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a.ts");
    std::fs::write(&path, "old").unwrap();

    FileIO::write_file(&path, "new content\n").unwrap();
    assert_eq!(FileIO::read_full_content(&path).unwrap(), "new content\n");
  }

  #[test]
  fn test_write_leaves_no_temp_files() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("a.ts");
    std::fs::write(&path, "old").unwrap();

    FileIO::write_file(&path, "new").unwrap();

    let entries: Vec<_> = std::fs::read_dir(temp_dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
  }

  #[cfg(unix)]
  #[test]
  fn test_write_preserves_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("script.ts");
    std::fs::write(&path, "old").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

    FileIO::write_file(&path, "new").unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
  }

  #[test]
  fn test_read_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = FileIO::read_full_content(&temp_dir.path().join("missing.ts"));
    assert!(matches!(result, Err(FileIoError::Read { .. })));
  }

  #[test]
  fn test_read_invalid_utf8() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("binary.ts");
    std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    assert!(matches!(FileIO::read_full_content(&path), Err(FileIoError::Read { .. })));
  }

  #[cfg(unix)]
  #[test]
  fn test_write_through_symlink() {
    let temp_dir = TempDir::new().unwrap();
    let real = temp_dir.path().join("real.ts");
    let link = temp_dir.path().join("link.ts");
    std::fs::write(&real, "old").unwrap();
    std::os::unix::fs::symlink(&real, &link).unwrap();

    FileIO::write_file(&link, "new").unwrap();

    assert!(std::fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(std::fs::read_to_string(&real).unwrap(), "new");
  }

  #[cfg(unix)]
  #[test]
  fn test_write_failure_leaves_original() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("locked");
    std::fs::create_dir(&dir).unwrap();
    let path = dir.join("a.ts");
    std::fs::write(&path, "old").unwrap();
    std::fs::set_permissions(&dir, std::fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users can still create files in a read-only directory.
    if std::fs::File::create(dir.join(".writable")).is_ok() {
      std::fs::set_permissions(&dir, std::fs::Permissions::from_mode(0o755)).unwrap();
      return;
    }

    let result = FileIO::write_file(&path, "new");
    std::fs::set_permissions(&dir, std::fs::Permissions::from_mode(0o755)).unwrap();

    assert!(matches!(result, Err(FileIoError::Write { .. })));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "old");
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 1);
  }
}
