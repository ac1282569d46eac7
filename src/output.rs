//! # Output Module
//!
//! This module centralizes the end-of-run output for copyhead.
//!
//! stdout carries only the progress log (one path per considered file), so
//! it stays predictable for piping. Everything printed here goes to stderr,
//! except the bare file list in quiet check mode, which is meant for scripts.

use owo_colors::{OwoColorize, Stream};

use copyhead::logging::{is_quiet, is_verbose};
use copyhead::report::{FileReport, ProcessingSummary};

/// Symbols used in output
pub mod symbols {
  /// Success
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Missing header
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Print the files that lack a header in check mode.
///
/// Files are listed in the order they were visited.
pub fn print_missing_files(files: &[&FileReport]) {
  if files.is_empty() {
    return;
  }

  if is_quiet() {
    for file in files {
      println!("{}", file.path.display());
    }
    return;
  }

  let count = files.len();
  eprintln!(
    "{} {} {} missing copyright headers:",
    symbols::FAILURE.if_supports_color(Stream::Stderr, |s| s.red()),
    count,
    if count == 1 { "file" } else { "files" }
  );
  for file in files {
    eprintln!("  {}", file.path.display());
  }
}

/// Print the all-clear line for check mode.
pub fn print_all_files_ok() {
  if is_quiet() {
    return;
  }

  eprintln!(
    "{} All files have copyright headers",
    symbols::SUCCESS.if_supports_color(Stream::Stderr, |s| s.green())
  );
}

/// Print the run summary. Only shown in verbose mode.
pub fn print_summary(summary: &ProcessingSummary, check_only: bool) {
  if !is_verbose() {
    return;
  }

  let files_word = if summary.total_files == 1 { "file" } else { "files" };
  let outcome = if check_only {
    format!("{} missing", summary.missing)
  } else {
    format!("{} stamped", summary.stamped)
  };

  eprintln!(
    "{} {}: {}, {} already present ({}ms)",
    summary.total_files,
    files_word,
    outcome.if_supports_color(Stream::Stderr, |s| s.bold()),
    summary.already_stamped,
    summary.elapsed_ms
  );
}
