// lessonguard/src/lib.rs
//! # Lessonguard CLI Application
//!
//! Command-line front end for `lessonguard-core`: sanitize strings and JSON
//! plan documents, scan for sensitive content, and run the planning pipeline.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

use anyhow::Result;

use crate::cli::{Cli, Commands};

/// Dispatches the parsed command line.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Clean(cmd) => commands::clean::run_clean(cmd, cli.quiet),
        Commands::Sanitize(cmd) => commands::sanitize::run_sanitize(cmd, cli.quiet),
        Commands::Scan(cmd) => commands::scan::run_scan(cmd),
        Commands::Plan(cmd) => commands::plan::run_plan(cmd, cli.quiet),
    }
}
