//! # Output Module
//!
//! This module centralizes all user-facing output for the headerstamp tool.
//! It provides consistent formatting, colors, and symbols for terminal output.
//!
//! Everything here respects quiet mode; errors are printed by the caller.

use headerstamp::config::Config;
use headerstamp::logging::is_quiet;
use headerstamp::report::{FileAction, FileOutcome, RunSummary};
use owo_colors::{OwoColorize, Stream};

/// Symbols used in output
pub mod symbols {
  /// Header added / nothing missing
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Header missing in check mode
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Print the settings the run will use.
pub fn print_settings(config: &Config) {
  if is_quiet() {
    return;
  }

  let join = |set: &std::collections::BTreeSet<String>| set.iter().map(String::as_str).collect::<Vec<_>>().join(", ");

  println!("Author:     {}", config.author);
  println!("Company:    {}", config.company);
  println!("Year:       {}", config.year);
  println!("Extensions: {}", join(&config.extensions));
  println!("Excluding:  {}", join(&config.exclude_dirs));
}

/// Print the initial "Processing N file(s)..." or "Checking N file(s)..."
/// message.
pub fn print_start_message(file_count: usize, check_only: bool) {
  if is_quiet() {
    return;
  }

  let verb = if check_only { "Checking" } else { "Processing" };
  println!("{} {} file(s)...", verb, file_count);
}

/// Print the notice shown when the target contains no eligible files.
pub fn print_no_matching_files() {
  if !is_quiet() {
    println!("No matching files found.");
  }
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the per-file line for an outcome.
///
/// In quiet mode only files missing a header are printed, as bare paths, so
/// the output can be piped.
pub fn print_outcome(outcome: &FileOutcome) {
  let path = outcome.path.display();

  if is_quiet() {
    if outcome.action == FileAction::Missing {
      println!("{}", path);
    }
    return;
  }

  let label = format!("[{}]", outcome.action.label());
  let label = match outcome.action {
    FileAction::Added => label.if_supports_color(Stream::Stdout, |s| s.green()).to_string(),
    FileAction::Missing => label.if_supports_color(Stream::Stdout, |s| s.red()).to_string(),
    FileAction::Skipped => label.if_supports_color(Stream::Stdout, |s| s.dimmed()).to_string(),
  };

  println!("  {} {}", label, path);
}

/// Print the closing summary.
pub fn print_summary(summary: &RunSummary, check_only: bool) {
  if is_quiet() {
    return;
  }

  println!("Done. Processed {} file(s).", summary.total);

  if check_only {
    if summary.has_missing() {
      println!(
        "{} {} missing, {} with header",
        symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
        summary.missing,
        summary.skipped
      );
    } else {
      println!(
        "{} All files have headers",
        symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
      );
    }
  } else {
    println!(
      "{} {} added, {} skipped",
      symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
      summary.added,
      summary.skipped
    );
  }
}

/// Print a hint when check mode found problems.
pub fn print_hint(hint: &str) {
  if !is_quiet() {
    println!("{}", hint.if_supports_color(Stream::Stdout, |s| s.dimmed()));
  }
}
