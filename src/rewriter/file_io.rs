//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the rewriter.
//! It encapsulates synchronous file operations and maps failures onto
//! [`RewriteError`] kinds carrying the offending path.

use std::fs::File;
use std::io::{Read as _, Write as _};
use std::path::Path;

use crate::error::RewriteError;

/// File I/O operations for the rewriter.
///
/// Handles are scoped to each call and closed on drop, on success and error
/// paths alike.
pub struct FileIO;

impl FileIO {
  /// Reads the complete content of a file as raw bytes.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to read
  ///
  /// # Errors
  ///
  /// [`RewriteError::UnreadableFile`] if the file can't be opened or read.
  pub fn read_full_content(path: &Path) -> Result<Vec<u8>, RewriteError> {
    let mut file = File::open(path).map_err(|e| RewriteError::unreadable(path, e))?;

    let size_hint = file
      .metadata()
      .map_or(0, |m| usize::try_from(m.len()).unwrap_or(0));
    let mut content = Vec::with_capacity(size_hint);
    file
      .read_to_end(&mut content)
      .map_err(|e| RewriteError::unreadable(path, e))?;

    Ok(content)
  }

  /// Overwrites a file with `content`, truncating what was there before.
  ///
  /// # Parameters
  ///
  /// * `path` - Path to the file to write
  /// * `content` - Content to write to the file
  ///
  /// # Errors
  ///
  /// [`RewriteError::UnwritableFile`] if the file can't be opened or written.
  pub fn write_file(path: &Path, content: &[u8]) -> Result<(), RewriteError> {
    let mut file = File::create(path).map_err(|e| RewriteError::unwritable(path, e))?;
    file.write_all(content).map_err(|e| RewriteError::unwritable(path, e))?;
    file.flush().map_err(|e| RewriteError::unwritable(path, e))
  }
}
