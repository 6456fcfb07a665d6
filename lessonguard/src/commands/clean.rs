// lessonguard/src/commands/clean.rs
//! `lessonguard clean`: sanitize a single string, file or stdin stream.

use anyhow::Result;
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io;

use lessonguard_core::ContentSanitizer;

use super::{load_config, read_input, warn_msg, write_output};
use crate::cli::CleanCommand;
use crate::ui::redaction_summary;

pub fn run_clean(cmd: &CleanCommand, quiet: bool) -> Result<()> {
    info!("Starting clean operation.");
    let sanitizer = ContentSanitizer::new(load_config(&cmd.rules)?)?;
    let input = read_input(cmd.text.as_deref(), cmd.input_file.as_deref())?;

    if input.trim().is_empty() && !quiet {
        warn_msg("Input is empty; nothing to sanitize.");
    }

    let (cleaned, summary) = sanitizer.clean_with_summary(&input);
    debug!(
        "Content sanitized. Original length: {}, Sanitized length: {}",
        input.len(),
        cleaned.len()
    );

    write_output(cmd.output.as_deref(), &cleaned)?;

    if !cmd.no_summary && !quiet {
        debug!("Displaying redaction summary.");
        let stderr_supports_color = io::stderr().is_terminal();
        redaction_summary::print_summary(&summary, &mut io::stderr(), stderr_supports_color)?;
    }

    info!("Clean operation completed.");
    Ok(())
}
