//! # Error Module
//!
//! Error kinds produced while rewriting a tree. Every variant is fatal: the
//! rewriter stops at the first one and returns it to the caller.

use std::path::{Path, PathBuf};

/// Errors raised by the tree rewriter.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
  /// The root directory or header file does not exist.
  #[error("Path '{}' doesn't exist", .path.display())]
  PathNotFound { path: PathBuf },

  /// The root path exists but is not a directory.
  #[error("Given top-level directory '{}' is not a directory", .path.display())]
  NotADirectory { path: PathBuf },

  /// A file could not be opened or read.
  #[error("File '{}' can't be opened for reading: {source}", .path.display())]
  UnreadableFile {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// A file could not be opened or written.
  #[error("File '{}' can't be opened for writing: {source}", .path.display())]
  UnwritableFile {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// A file with a recognized extension does not contain its marker.
  #[error("Necessary substring '{marker}' not found in '{}'", .path.display())]
  MarkerNotFound { path: PathBuf, marker: String },

  /// The directory walk itself failed (unreadable directory, symlink loop).
  #[error("Failed to traverse '{}': {source}", .path.display())]
  Traversal {
    path: PathBuf,
    #[source]
    source: walkdir::Error,
  },
}

impl RewriteError {
  pub fn unreadable(path: &Path, source: std::io::Error) -> Self {
    Self::UnreadableFile {
      path: path.to_path_buf(),
      source,
    }
  }

  pub fn unwritable(path: &Path, source: std::io::Error) -> Self {
    Self::UnwritableFile {
      path: path.to_path_buf(),
      source,
    }
  }

  /// The path the error is about.
  pub fn path(&self) -> &Path {
    match self {
      Self::PathNotFound { path }
      | Self::NotADirectory { path }
      | Self::UnreadableFile { path, .. }
      | Self::UnwritableFile { path, .. }
      | Self::MarkerNotFound { path, .. }
      | Self::Traversal { path, .. } => path.as_path(),
    }
  }
}
