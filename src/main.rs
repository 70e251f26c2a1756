//! # headerstamp
//!
//! A tool that stamps a metadata-filled comment header onto source files.

mod cli;
mod output;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, EXIT_FAILURE, run};

fn main() -> ExitCode {
  let cli = match Cli::try_parse() {
    Ok(cli) => cli,
    Err(e) => {
      // Help and version requests are not failures
      let code = if e.use_stderr() { EXIT_FAILURE } else { 0 };
      if e.print().is_err() {
        eprintln!("{e}");
      }
      return ExitCode::from(code);
    }
  };

  match run(cli) {
    Ok(code) => code,
    Err(e) => {
      eprintln!("Error: {e:#}");
      ExitCode::from(EXIT_FAILURE)
    }
  }
}
