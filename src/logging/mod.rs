//! # Logging Module
//!
//! This module provides logging utilities for the headerstamp tool, including:
//! - Verbose logging that can be enabled/disabled
//! - Standard info logging with color support
//! - Installation of the `tracing` subscriber used for diagnostics
//!
//! Verbose logs go to stderr and info logs go to stdout so that the per-file
//! lines stay pipeable.
//!
//! ## Example
//!
//! ```rust
//! use headerstamp::logging::{ColorMode, set_verbose};
//! use headerstamp::{info_log, verbose_log};
//!
//! // Enable verbose logging
//! set_verbose();
//!
//! // Let owo-colors decide based on the terminal
//! ColorMode::Auto.apply();
//!
//! // Log a verbose message (goes to stderr)
//! verbose_log!("Resolving header for: {}", "src/App.vue");
//!
//! // Log an info message (goes to stdout)
//! info_log!("Header added to: {}", "src/App.vue");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_normal, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

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
/// This macro is used for information that should normally be displayed to
/// the user. It uses the same format string syntax as the standard
/// [`println!`] macro.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Internal function used by [`info_log!`] to print a highlighted line.
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.yellow()));
}
