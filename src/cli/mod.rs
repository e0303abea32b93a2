//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing.

mod run;

use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
pub use run::{RunArgs, USAGE, run_rewrite};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

const LONG_VERSION: &str = concat!(
  env!("CARGO_PKG_VERSION"),
  " (",
  env!("GIT_HASH"),
  " ",
  env!("GIT_DATE"),
  ")"
);

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  version,
  long_version = LONG_VERSION,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Recognized files:
  .hpp  header is inserted before the first #ifndef
  .cpp  header is inserted before the first #include

Anything before the marker is discarded. Files are rewritten in place with no backup.

Examples:
  # Put the license into every .hpp and .cpp file under src/
  put-license src/ LICENSE_HEADER.txt

  # Preview the change without writing anything
  put-license --dry-run --show-diff src/ LICENSE_HEADER.txt
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub args: RunArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
