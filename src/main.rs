//! # put-license
//!
//! Puts a license header into every .hpp and .cpp file under a directory.

use anyhow::Result;
use put_license::cli::{Cli, run_rewrite};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run_rewrite(cli.args)
}
