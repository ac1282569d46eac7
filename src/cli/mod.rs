//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing. Every argument is optional: with none,
//! copyhead stamps the current directory using `copyright.template`.

mod run;

use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
pub use run::{RunArgs, run};

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Stamp every .cs file under the current directory using ./copyright.template
  copyhead

  # Stamp a different tree with a different template
  copyhead --template tools/header.template src/

  # Report files lacking a header without touching them
  copyhead --check --show-diff

  # Write a JSON report of what was done
  copyhead --report-json copyhead.json
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  #[command(flatten)]
  pub run_args: RunArgs,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use clap::CommandFactory;

  use super::*;
  use crate::cli::run::DEFAULT_ROOT;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_no_arguments_uses_defaults() {
    let cli = Cli::try_parse_from(["copyhead"]).unwrap();
    assert_eq!(cli.run_args.root, PathBuf::from(DEFAULT_ROOT));
    assert!(cli.run_args.template.is_none());
    assert!(!cli.run_args.check);
  }

  #[test]
  fn test_quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["copyhead", "-q", "-v"]).is_err());
  }

  #[test]
  fn test_show_diff_requires_check() {
    assert!(Cli::try_parse_from(["copyhead", "--show-diff"]).is_err());
    assert!(Cli::try_parse_from(["copyhead", "--check", "--show-diff"]).is_ok());
  }
}
