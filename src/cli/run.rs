//! # Run Command
//!
//! This module drives a headerstamp run: it resolves the configuration and
//! template document, collects the target files and stamps (or checks) each
//! one in order.

use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use headerstamp::config::{Config, discover_env_path};
use headerstamp::info_log;
use headerstamp::logging::{init_tracing, set_quiet, set_verbose};
use headerstamp::processor::Processor;
use headerstamp::templates::load_templates;
use tracing::debug;

use super::{Cli, EXIT_FAILURE, EXIT_MISSING_HEADERS};
use crate::output::{
  print_blank_line, print_hint, print_no_matching_files, print_outcome, print_settings, print_start_message,
  print_summary,
};

/// Run headerstamp with the parsed arguments.
///
/// # Errors
///
/// Returns an error if the configuration or template document cannot be
/// loaded, or if a file cannot be read or written.
pub fn run(cli: Cli) -> Result<ExitCode> {
  // Initialize tracing subscriber for structured logging
  init_tracing(cli.quiet, cli.verbose);

  // Set output mode for the info_log! and verbose_log! macros
  if cli.verbose > 0 {
    set_verbose();
  } else if cli.quiet {
    set_quiet();
  }
  cli.colors.apply();

  if !cli.path.exists() {
    eprintln!("Error: '{}' is not a valid file or directory.", cli.path.display());
    eprintln!("Use -h for help.");
    return Ok(ExitCode::from(EXIT_FAILURE));
  }

  let current_dir = std::env::current_dir().context("Failed to determine the current directory")?;

  let env_path = discover_env_path(cli.env_file.as_deref(), &current_dir);
  let mut config = Config::load(&env_path)?;
  if let Some(year) = cli.year {
    debug!("Overriding year with {}", year);
    config = config.with_year(year);
  }

  let templates = load_templates(cli.templates.as_deref(), &current_dir)?;

  let processor = Processor::new(config, templates).check_only(cli.check);

  print_settings(processor.config());
  print_blank_line();

  let files = processor
    .collect_files(&cli.path)
    .with_context(|| format!("Failed to collect files from {}", cli.path.display()))?;

  if files.is_empty() {
    print_no_matching_files();
    return Ok(ExitCode::SUCCESS);
  }

  print_start_message(files.len(), cli.check);

  let start_time = Instant::now();
  let summary = processor.process_files(&files, print_outcome)?;
  debug!("Processed {} files in {}ms", summary.total, start_time.elapsed().as_millis());

  print_blank_line();
  print_summary(&summary, cli.check);

  if cli.check && summary.has_missing() {
    print_hint("Run without --check to add the missing headers.");
    return Ok(ExitCode::from(EXIT_MISSING_HEADERS));
  }

  info_log!("Finished in {:.2}s", start_time.elapsed().as_secs_f64());
  Ok(ExitCode::SUCCESS)
}
