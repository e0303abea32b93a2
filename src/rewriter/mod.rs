//! # Rewriter Module
//!
//! This module contains the tree rewriter: it walks a directory, picks the
//! files whose extension is in the [`MarkerTable`], and splices the license
//! header in front of each file's marker.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading and writing operations
//! - [`splice`] - Marker lookup and header splicing
//! - [`file_collector`] - Recursive directory traversal
//!
//! The [`Rewriter`] struct is the main entry point, orchestrating the
//! submodules into a single sequential, fail-fast pass.

mod file_collector;
mod file_io;
pub mod splice;

use std::path::Path;
use std::time::Instant;

pub use file_collector::FileCollector;
pub use file_io::FileIO;
use tracing::{debug, trace};

use crate::diff::DiffManager;
use crate::error::RewriteError;
use crate::markers::MarkerTable;
use crate::report::RunSummary;
use crate::verbose_log;

/// Behavior switches for a [`Rewriter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteOptions {
  /// Compute every rewrite but never write to disk
  pub dry_run: bool,
  /// Follow symbolic links while walking the tree
  pub follow_symlinks: bool,
}

/// Outcome of handling a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
  /// Extension not in the marker table; the file was not touched
  Skipped,
  /// The header was spliced in (or would be, in a dry run)
  Rewritten,
}

/// Tree rewriter.
///
/// The `Rewriter` is responsible for:
/// - Validating the root directory and header file
/// - Loading the header once
/// - Walking the tree and rewriting every file whose extension has a marker
///
/// Any error stops the run immediately. Files rewritten before the failure
/// stay rewritten; files not yet visited are untouched.
pub struct Rewriter {
  /// Extension to marker mapping
  markers: MarkerTable,

  /// Behavior switches
  options: RewriteOptions,

  /// Diff rendering for dry runs
  diff_manager: DiffManager,

  /// Directory traversal
  file_collector: FileCollector,
}

impl Default for Rewriter {
  fn default() -> Self {
    Self::new(MarkerTable::default(), RewriteOptions::default(), None)
  }
}

impl Rewriter {
  /// Creates a new rewriter.
  ///
  /// # Parameters
  ///
  /// * `markers` - Extension to marker mapping
  /// * `options` - Dry-run and symlink behavior
  /// * `diff_manager` - Diff rendering for dry runs; `None` disables diffs
  pub fn new(markers: MarkerTable, options: RewriteOptions, diff_manager: Option<DiffManager>) -> Self {
    Self {
      markers,
      options,
      diff_manager: diff_manager.unwrap_or_else(|| DiffManager::new(false)),
      file_collector: FileCollector::new(options.follow_symlinks),
    }
  }

  /// Rewrites every eligible file under `root` with the header read from
  /// `header_path`.
  ///
  /// # Errors
  ///
  /// - [`RewriteError::PathNotFound`] if `root` or `header_path` is missing
  /// - [`RewriteError::NotADirectory`] if `root` is not a directory
  /// - [`RewriteError::UnreadableFile`] / [`RewriteError::UnwritableFile`] on I/O failures
  /// - [`RewriteError::MarkerNotFound`] if an eligible file lacks its marker
  /// - [`RewriteError::Traversal`] if the directory walk fails
  pub fn run(&self, root: &Path, header_path: &Path) -> Result<RunSummary, RewriteError> {
    let start_time = Instant::now();

    validate_root(root)?;
    if !header_path.exists() {
      return Err(RewriteError::PathNotFound {
        path: header_path.to_path_buf(),
      });
    }

    let header = FileIO::read_full_content(header_path)?;
    debug!("Loaded {} byte header from {}", header.len(), header_path.display());

    let mut summary = RunSummary {
      dry_run: self.options.dry_run,
      ..RunSummary::default()
    };

    for entry in self.file_collector.traverse_directory(root) {
      let path = entry?;
      summary.files_scanned += 1;

      match self.rewrite_file(&path, &header)? {
        FileOutcome::Rewritten => summary.rewritten.push(path),
        FileOutcome::Skipped => summary.files_skipped += 1,
      }
    }

    summary.processing_time = start_time.elapsed();
    debug!(
      "Rewrote {} of {} files in {}ms",
      summary.files_rewritten(),
      summary.files_scanned,
      summary.processing_time.as_millis()
    );

    Ok(summary)
  }

  /// Handles a single file: splices `header` before its marker and writes it
  /// back, unless its extension is not in the table.
  ///
  /// # Errors
  ///
  /// [`RewriteError::MarkerNotFound`] if the marker is absent, or an I/O
  /// error kind if the file can't be read or written.
  pub fn rewrite_file(&self, path: &Path, header: &[u8]) -> Result<FileOutcome, RewriteError> {
    let Some(marker) = self.markers.marker_for_path(path) else {
      trace!("Skipping {}: extension not in marker table", path.display());
      return Ok(FileOutcome::Skipped);
    };

    verbose_log!("Processing file: {}", path.display());

    let content = FileIO::read_full_content(path)?;
    let new_content = splice::splice_header(header, &content, marker).ok_or_else(|| RewriteError::MarkerNotFound {
      path: path.to_path_buf(),
      marker: marker.to_string(),
    })?;

    if self.options.dry_run {
      self.diff_manager.display_diff(path, &content, &new_content);
      return Ok(FileOutcome::Rewritten);
    }

    FileIO::write_file(path, &new_content)?;
    Ok(FileOutcome::Rewritten)
  }
}

/// Rewrites `root` with the default marker table and options.
///
/// See [`Rewriter::run`].
pub fn run(root: &Path, header_path: &Path) -> Result<RunSummary, RewriteError> {
  Rewriter::default().run(root, header_path)
}

fn validate_root(root: &Path) -> Result<(), RewriteError> {
  if !root.exists() {
    return Err(RewriteError::PathNotFound {
      path: root.to_path_buf(),
    });
  }
  if !root.is_dir() {
    return Err(RewriteError::NotADirectory {
      path: root.to_path_buf(),
    });
  }
  Ok(())
}
