//! # copyhead
//!
//! Prepends a copyright header to every matching source file in a tree.

mod cli;
mod output;

use anyhow::Result;

use crate::cli::{Cli, run};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run(cli.run_args)
}
