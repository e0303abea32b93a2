//! # Output Module
//!
//! This module centralizes all user-facing output for the put-license tool.
//! Progress and results go to stdout; `-q` silences everything except errors
//! and `-v` lifts the file list limit.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::report::RunSummary;

/// Symbols used in output
pub mod symbols {
  /// Success
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Dry-run preview
  pub const PREVIEW: &str = "\u{2192}"; // →
}

/// Maximum number of files to show in the default output before truncating
const DEFAULT_FILE_LIST_LIMIT: usize = 20;

/// Print the initial "Rewriting files under DIR..." message.
pub fn print_start_message(root: &Path, dry_run: bool) {
  if is_quiet() {
    return;
  }

  let verb = if dry_run { "Checking" } else { "Rewriting" };
  println!("{} files under {}...", verb, root.display());
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the list of rewritten files, relative to `root`.
///
/// Shows up to `DEFAULT_FILE_LIST_LIMIT` files unless verbose.
pub fn print_rewritten_files(summary: &RunSummary, root: &Path) {
  if is_quiet() || summary.rewritten.is_empty() {
    return;
  }

  let count = summary.files_rewritten();
  let files_word = if count == 1 { "file" } else { "files" };
  let header = if summary.dry_run {
    format!(
      "{} Would add license header to {} {}:",
      symbols::PREVIEW.if_supports_color(Stream::Stdout, |s| s.yellow()),
      count,
      files_word
    )
  } else {
    format!(
      "{} Added license header to {} {}:",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      count,
      files_word
    )
  };
  println!("{}", header);

  let show_all = is_verbose();
  let limit = if show_all { count } else { DEFAULT_FILE_LIST_LIMIT };

  for file in summary.rewritten.iter().take(limit) {
    println!("  {}", make_relative_path(file, root));
  }

  if !show_all && count > limit {
    println!(
      "  {} ... and {} more (use -v to see all)",
      "".if_supports_color(Stream::Stdout, |s| s.dimmed()),
      count - limit
    );
  }
}

/// Print the one-line run summary.
pub fn print_summary(summary: &RunSummary) {
  if is_quiet() {
    return;
  }

  let rewritten = summary.files_rewritten();
  let rewritten_str = rewritten.if_supports_color(Stream::Stdout, |s| s.cyan());
  let skipped_str = summary.files_skipped.if_supports_color(Stream::Stdout, |s| s.dimmed());

  let verb = if summary.dry_run { "to rewrite" } else { "rewritten" };
  let mut summary_line = format!(
    "Summary: {} {}, {} skipped, {} scanned",
    rewritten_str, verb, skipped_str, summary.files_scanned
  );

  if is_verbose() {
    summary_line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
  }

  println!("{}", summary_line);
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}

/// Displays `path` relative to `root` when possible.
fn make_relative_path(path: &Path, root: &Path) -> String {
  pathdiff::diff_paths(path, root)
    .filter(|p| !p.as_os_str().is_empty())
    .map(|p| p.to_string_lossy().to_string())
    .unwrap_or_else(|| path.to_string_lossy().to_string())
}
