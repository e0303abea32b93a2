//! # put-license
//!
//! A tool that recursively walks a directory and puts a license header into
//! each recognized source file, right before a per-extension marker:
//!
//! | extension | marker     |
//! |-----------|------------|
//! | `.hpp`    | `#ifndef`  |
//! | `.cpp`    | `#include` |
//!
//! Everything that precedes the first marker occurrence is replaced by the
//! header. Files are rewritten in place, sequentially; the first error (a
//! missing path, an I/O failure, or a file without its marker) stops the run
//! and leaves already rewritten files as they are.
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use put_license::markers::MarkerTable;
//! use put_license::rewriter::{RewriteOptions, Rewriter};
//!
//! fn main() -> anyhow::Result<()> {
//!     let rewriter = Rewriter::new(
//!         MarkerTable::default(),
//!         RewriteOptions { dry_run: true, ..RewriteOptions::default() },
//!         None, // No diff output
//!     );
//!
//!     let summary = rewriter.run(Path::new("src"), Path::new("LICENSE_HEADER.txt"))?;
//!     println!("{} files would be rewritten", summary.files_rewritten());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`rewriter`] - Directory traversal and in-place header splicing
//! * [`markers`] - The extension to marker table
//! * [`error`] - Error kinds raised by a run
//! * [`logging`] - Logging utilities for verbose output

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod logging;
pub mod markers;
pub mod output;
pub mod report;
pub mod rewriter;

pub use error::RewriteError;
pub use rewriter::run;
