//! # Run Command
//!
//! Validates the arguments, resolves configuration, and drives the
//! [`Rewriter`] over the requested directory.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::Args;
use tracing::{debug, info};

use crate::config::load_config;
use crate::diff::DiffManager;
use crate::error::RewriteError;
use crate::info_log;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::markers::MarkerTable;
use crate::output::{print_blank_line, print_hint, print_rewritten_files, print_start_message, print_summary};
use crate::report::ReportGenerator;
use crate::rewriter::{RewriteOptions, Rewriter};

/// Usage text printed when the positional arguments are missing.
pub const USAGE: &str = "
Usage:
put-license <path/to/dir> <license_template.txt>
<path/to/dir> - path to top-level directory containing .hpp, .cpp files and/or subdirectories (search goes recursively)
<license_template.txt> - a file containing a license info which will be put in each file

Example:
put-license ../test ../test/license_header.txt
";

/// Arguments for a rewrite run
#[derive(Args, Debug, Default)]
pub struct RunArgs {
  /// Top-level directory to search recursively for .hpp and .cpp files
  #[arg(value_name = "DIR")]
  pub root: Option<PathBuf>,

  /// File containing the license header to put into each file
  #[arg(value_name = "LICENSE_TEMPLATE")]
  pub header: Option<PathBuf>,

  /// Compute rewrites without modifying any file
  #[arg(long)]
  pub dry_run: bool,

  /// Show a diff of each change (requires --dry-run)
  #[arg(long, requires = "dry_run")]
  pub show_diff: bool,

  /// Follow symbolic links while walking the directory
  #[arg(long)]
  pub follow_symlinks: bool,

  /// Write a JSON report of the run to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Path to config file (default: .put-license.toml in DIR)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(long, value_name = "WHEN", num_args = 0..=1, default_missing_value = "always", value_enum)]
  pub colors: Option<ColorMode>,
}

impl RunArgs {
  /// Returns the root and header paths, or `None` if either is missing.
  fn positionals(&self) -> Option<(&Path, &Path)> {
    Some((self.root.as_deref()?, self.header.as_deref()?))
  }
}

/// Run the rewrite with the given arguments.
///
/// Prints [`USAGE`] to stdout and exits with status 1 if the directory or the
/// license template argument is missing.
pub fn run_rewrite(args: RunArgs) -> Result<()> {
  let Some((root, header)) = args.positionals() else {
    print!("{USAGE}");
    println!();
    process::exit(1);
  };

  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }

  let config = load_config(args.config.as_deref(), root, args.no_config)?.unwrap_or_default();

  args.colors.or(config.colors).unwrap_or_default().apply();

  let options = RewriteOptions {
    dry_run: args.dry_run,
    follow_symlinks: args.follow_symlinks || config.follow_symlinks.unwrap_or(false),
  };
  debug!("Rewrite options: {:?}", options);

  let rewriter = Rewriter::new(
    MarkerTable::default(),
    options,
    Some(DiffManager::new(args.show_diff)),
  );

  print_start_message(root, options.dry_run);
  let summary = match rewriter.run(root, header) {
    Ok(summary) => summary,
    Err(e) => {
      if let Some(hint) = abort_hint(&e, header, options.dry_run) {
        print_hint(&hint);
      }
      return Err(e.into());
    }
  };
  info!(
    "Rewrote {} files under {}",
    summary.files_rewritten(),
    root.display()
  );

  print_blank_line();
  print_rewritten_files(&summary, root);
  print_summary(&summary);

  if options.dry_run && summary.files_rewritten() > 0 {
    print_blank_line();
    print_hint("Run without --dry-run to apply these changes.");
  }

  if let Some(output_path) = &args.report_json {
    ReportGenerator::new(output_path).generate(root, header, &summary)?;
    info_log!("Generated JSON report at {}", output_path.display());
  }

  Ok(())
}

/// Hint shown when a run stops partway through the tree.
///
/// Only failures on a file inside the tree can leave earlier files
/// rewritten; an unreadable header and dry runs never write anything.
fn abort_hint(err: &RewriteError, header: &Path, dry_run: bool) -> Option<String> {
  if dry_run || err.path() == header {
    return None;
  }
  match err {
    RewriteError::UnreadableFile { .. } | RewriteError::UnwritableFile { .. } | RewriteError::MarkerNotFound { .. } => {
      Some(format!(
        "Stopped at {}; files visited before it were already rewritten.",
        err.path().display()
      ))
    }
    _ => None,
  }
}
