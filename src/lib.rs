//! # headerstamp
//!
//! A tool that stamps a metadata-filled comment header onto the source files
//! of a project tree.
//!
//! `headerstamp` modifies source files in place and never stamps a file that
//! already has a header, even when the header was produced with a different
//! author or company. Re-running it is always safe.
//!
//! ## Features
//!
//! * Block-comment headers for scripts and HTML-wrapped headers for
//!   single-file components (`.vue`, `.svelte`, `.html`)
//! * A one-line description generated from each file's path
//! * Author, company and year taken from an env-style config file
//! * Extension filtering and excluded-directory pruning
//! * Check mode that reports files missing a header without modifying them
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use headerstamp::config::Config;
//! use headerstamp::processor::Processor;
//! use headerstamp::templates::TemplateDocument;
//!
//! fn main() -> anyhow::Result<()> {
//!   let config = Config::load(Path::new(".env"))?;
//!   let templates = TemplateDocument::load(Path::new("header.json"))?;
//!
//!   let processor = Processor::new(config, templates);
//!   let files = processor.collect_files(Path::new("src"))?;
//!
//!   let summary = processor.process_files(&files, |outcome| {
//!     println!("[{}] {}", outcome.action, outcome.path.display());
//!   })?;
//!
//!   println!("Added {} header(s)", summary.added);
//!   Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Applying headers to files and collecting target files
//! * [`templates`] - Template document loading and placeholder resolution
//! * [`description`] - Path-based description generation
//! * [`detection`] - Recognizing files that already have a header
//! * [`config`] - Run configuration
//! * [`logging`] - Logging utilities for verbose output
//!
//! [`processor`]: crate::processor
//! [`templates`]: crate::templates
//! [`description`]: crate::description
//! [`detection`]: crate::detection
//! [`config`]: crate::config
//! [`logging`]: crate::logging

pub mod config;
pub mod description;
pub mod detection;
pub mod logging;
pub mod processor;
pub mod report;
pub mod templates;
