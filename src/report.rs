//! # Report Module
//!
//! This module captures the outcome of a rewrite run and can write it out as a
//! JSON report for tooling.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

/// Outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
  /// Regular files visited during traversal
  pub files_scanned: usize,
  /// Files whose extension is not in the marker table
  pub files_skipped: usize,
  /// Files rewritten (or that would be rewritten in a dry run), in visit order
  pub rewritten: Vec<PathBuf>,
  /// Whether the run was a dry run
  pub dry_run: bool,
  /// Wall-clock time spent in the run
  pub processing_time: Duration,
}

impl RunSummary {
  pub const fn files_rewritten(&self) -> usize {
    self.rewritten.len()
  }
}

/// Serialized form of a run.
#[derive(Debug, Serialize)]
struct JsonReport {
  generated_at: String,
  root: String,
  header: String,
  dry_run: bool,
  files_scanned: usize,
  files_skipped: usize,
  files_rewritten: usize,
  processing_time_secs: f64,
  rewritten: Vec<String>,
}

/// Writes JSON reports for a run.
pub struct ReportGenerator<'a> {
  /// Path where the report will be saved
  output_path: &'a Path,
}

impl<'a> ReportGenerator<'a> {
  pub const fn new(output_path: &'a Path) -> Self {
    Self { output_path }
  }

  /// Builds the report body for `summary`.
  pub fn render(root: &Path, header: &Path, summary: &RunSummary) -> Result<String> {
    let report = JsonReport {
      generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
      root: root.to_string_lossy().to_string(),
      header: header.to_string_lossy().to_string(),
      dry_run: summary.dry_run,
      files_scanned: summary.files_scanned,
      files_skipped: summary.files_skipped,
      files_rewritten: summary.files_rewritten(),
      processing_time_secs: summary.processing_time.as_secs_f64(),
      rewritten: summary
        .rewritten
        .iter()
        .map(|p| p.to_string_lossy().to_string())
        .collect(),
    };

    serde_json::to_string_pretty(&report).context("Failed to serialize JSON report")
  }

  /// Writes the report to the output path.
  pub fn generate(&self, root: &Path, header: &Path, summary: &RunSummary) -> Result<()> {
    let content = Self::render(root, header, summary)?;
    fs::write(self.output_path, content)
      .with_context(|| format!("Failed to write report to {}", self.output_path.display()))
  }
}
