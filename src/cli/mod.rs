//! # CLI Module
//!
//! This module contains the command-line interface implementation.
//! It uses clap for argument parsing.

mod run;

use std::path::PathBuf;

use clap::Parser;
use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use headerstamp::logging::ColorMode;
pub use run::run;

/// Exit status for usage errors and fatal failures.
pub const EXIT_FAILURE: u8 = 84;

/// Exit status when check mode finds files without a header.
pub const EXIT_MISSING_HEADERS: u8 = 1;

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Configuration (.env next to where you run headerstamp):
  HEADER_AUTHOR         Author name for the header
  HEADER_COMPANY        Company name for copyright
  HEADER_YEAR           Copyright year (default: current year)
  HEADER_EXTENSIONS     Comma-separated extensions (default: .ts,.vue)
  HEADER_EXCLUDE_DIRS   Comma-separated dirs to skip (default: node_modules,.git)

Examples:
  # Stamp every .ts and .vue file under src/
  headerstamp src/

  # Report files without a header, without modifying anything
  headerstamp --check src/

  # Use another config file and template document
  headerstamp --env-file ci.env --templates headers/company.json .
",
  help_template = "{before-help}{name} v{version}
{about-section}
{usage-heading} {usage}

{all-args}{after-help}
"
)]
pub struct Cli {
  /// A file or directory to add headers to
  pub path: PathBuf,

  /// Config file with HEADER_* settings (default: .env, or $HEADERSTAMP_ENV)
  #[arg(long, value_name = "FILE")]
  pub env_file: Option<PathBuf>,

  /// Template document (default: header.json if present, or
  /// $HEADERSTAMP_TEMPLATES, else the builtin templates)
  #[arg(long, value_name = "FILE")]
  pub templates: Option<PathBuf>,

  /// Copyright year, overriding HEADER_YEAR
  #[arg(long)]
  pub year: Option<String>,

  /// Only report files missing a header; do not modify anything
  #[arg(long)]
  pub check: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}
