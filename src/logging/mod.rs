//! # Logging Module
//!
//! Two channels report what a rewrite run is doing:
//! - [`verbose_log!`] traces each file the rewriter opens. It writes to stderr
//!   and only when `-v` is given, so stdout stays a clean list of results.
//! - [`info_log!`] reports follow-up actions such as a written JSON report.
//!   It writes to stdout and is silenced by `-q`.
//!
//! Structured diagnostics (`-vv`, `RUST_LOG`) go through `tracing`, set up by
//! [`init_tracing`].
//!
//! ```rust
//! use put_license::logging::{ColorMode, set_verbose};
//! use put_license::{info_log, verbose_log};
//!
//! set_verbose();
//! ColorMode::Never.apply();
//!
//! verbose_log!("Processing file: {}", "include/widget.hpp");
//! info_log!("Generated JSON report at {}", "report.json");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// Writes a line to stderr when `-v` is active.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Writes a highlighted line to stdout unless `-q` is active.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Prints an [`info_log!`] line, bold blue when the terminal supports it.
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.bright_blue().bold().to_string()));
}
