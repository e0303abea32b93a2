//! # File Collector Module
//!
//! Recursive directory traversal yielding the regular files under a root.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use crate::error::RewriteError;

/// File collector for directory traversal.
///
/// Files are yielded lazily, one at a time, so a failure while handling one
/// file leaves every later file untouched. Entries are sorted by file name
/// within each directory.
pub struct FileCollector {
  /// Whether symbolic links are followed
  follow_symlinks: bool,
}

impl FileCollector {
  /// Creates a new FileCollector.
  ///
  /// # Parameters
  ///
  /// * `follow_symlinks` - Follow symbolic links to files and directories.
  ///   When `false`, symlinks are neither files nor directories and are
  ///   skipped.
  pub const fn new(follow_symlinks: bool) -> Self {
    Self { follow_symlinks }
  }

  /// Traverses `dir` recursively, yielding every regular file exactly once.
  ///
  /// Directories, unfollowed symlinks and special files (FIFOs, sockets,
  /// devices) are skipped. Walk failures, including symlink cycles when
  /// following links, are yielded as [`RewriteError::Traversal`].
  ///
  /// When following links, a file reachable through several paths is
  /// yielded only under the first one visited.
  pub fn traverse_directory<'a>(&self, dir: &'a Path) -> impl Iterator<Item = Result<PathBuf, RewriteError>> + 'a {
    let follow_symlinks = self.follow_symlinks;
    let mut seen: HashSet<PathBuf> = HashSet::new();

    WalkDir::new(dir)
      .follow_links(follow_symlinks)
      .sort_by_file_name()
      .into_iter()
      .filter_map(move |result| match result {
        Ok(entry) => {
          let file_type = entry.file_type();
          if file_type.is_file() {
            if !follow_symlinks {
              return Some(Ok(entry.into_path()));
            }
            let target = match std::fs::canonicalize(entry.path()) {
              Ok(target) => target,
              Err(e) => return Some(Err(RewriteError::unreadable(entry.path(), e))),
            };
            if seen.insert(target) {
              Some(Ok(entry.into_path()))
            } else {
              trace!("Skipping already visited file: {}", entry.path().display());
              None
            }
          } else {
            if !file_type.is_dir() {
              trace!("Skipping non-regular entry: {}", entry.path().display());
            }
            None
          }
        }
        Err(e) => {
          let path = e.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
          Some(Err(RewriteError::Traversal { path, source: e }))
        }
      })
  }
}
