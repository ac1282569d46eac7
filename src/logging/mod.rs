//! # Logging Module
//!
//! This module provides logging utilities for copyhead, including:
//! - The per-file progress log printed to stdout
//! - Verbose logging that can be enabled/disabled
//! - Initialisation of the `tracing` subscriber used for diagnostics
//!
//! Progress lines go to stdout so the list of considered files can be piped,
//! while verbose logs and diagnostics go to stderr.
//!
//! ## Example
//!
//! ```rust
//! use copyhead::logging::{ColorMode, set_verbose};
//! use copyhead::{info_log, verbose_log};
//!
//! // Enable verbose logging
//! set_verbose();
//!
//! // Let owo-colors decide based on the terminal
//! ColorMode::Auto.apply();
//!
//! // Log a verbose message (goes to stderr)
//! verbose_log!("Loading template from: {}", "copyright.template");
//!
//! // Log a progress line (goes to stdout)
//! info_log!("{}", "./Program.cs");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_quiet, set_verbose};

/// Logs a message to stderr if verbose mode is enabled.
///
/// This macro is used for detailed logging that is only shown when verbose mode
/// is enabled via [`set_verbose`]. It uses the same format string syntax as
/// the standard [`eprintln!`] macro.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Logs a message to stdout unless quiet mode is enabled.
///
/// This is the progress log: one line per considered file. It uses the same
/// format string syntax as the standard [`println!`] macro.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Internal function to print info log messages.
///
/// Used by the [`info_log!`] macro. Lines are always plain, so the output is
/// identical on a terminal and in a pipe.
pub fn print_info_log(message: &str) {
  println!("{}", message);
}
