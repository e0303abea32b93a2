//! # Diff Module
//!
//! This module renders diffs between a file's original content and the content
//! the rewriter would write. It's used by dry runs to show what would change.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};
use similar::{ChangeTag, TextDiff};

/// Manages diff rendering for dry-run rewrites.
pub struct DiffManager {
  /// Whether to show diffs in dry run mode
  pub show_diff: bool,
}

impl DiffManager {
  /// Creates a new DiffManager.
  ///
  /// # Parameters
  ///
  /// * `show_diff` - Whether to show diffs in dry run mode
  pub const fn new(show_diff: bool) -> Self {
    Self { show_diff }
  }

  /// Renders a line diff between `original` and `new`.
  ///
  /// Non-UTF-8 bytes are replaced lossily for display only; the bytes written
  /// to disk are never affected.
  pub fn render(path: &Path, original: &[u8], new: &[u8]) -> String {
    let original = String::from_utf8_lossy(original);
    let new = String::from_utf8_lossy(new);
    let diff = TextDiff::from_lines(original.as_ref(), new.as_ref());

    let mut content = format!("Diff for {}:\n", path.display());
    for change in diff.iter_all_changes() {
      let sign = match change.tag() {
        ChangeTag::Delete => "-",
        ChangeTag::Insert => "+",
        ChangeTag::Equal => " ",
      };
      content.push_str(sign);
      content.push_str(change.value());
      if change.missing_newline() {
        content.push('\n');
      }
    }

    content
  }

  /// Prints the diff to stderr if `show_diff` is enabled.
  pub fn display_diff(&self, path: &Path, original: &[u8], new: &[u8]) {
    if !self.show_diff {
      return;
    }

    for line in Self::render(path, original, new).lines() {
      if line.starts_with('+') {
        eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.green()));
      } else if line.starts_with('-') {
        eprintln!("{}", line.if_supports_color(Stream::Stderr, |l| l.red()));
      } else {
        eprintln!("{}", line);
      }
    }
    eprintln!();
  }
}
