// lessonguard/src/commands/sanitize.rs
//! `lessonguard sanitize`: sanitize every string value of a JSON plan document.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io;

use lessonguard_core::{ContentSanitizer, PlanNode};

use super::{load_config, read_input, write_output};
use crate::cli::SanitizeCommand;
use crate::ui::redaction_summary;

pub fn run_sanitize(cmd: &SanitizeCommand, quiet: bool) -> Result<()> {
    info!("Starting sanitize operation.");
    let sanitizer = ContentSanitizer::new(load_config(&cmd.rules)?)?;
    let input = read_input(None, cmd.input_file.as_deref())?;

    let plan: PlanNode = serde_json::from_str(&input).context("Input is not a valid JSON document")?;
    debug!("Parsed plan document with {} top-level entries.", plan.len());

    let summary = sanitizer.analyze(&plan);
    let sanitized = sanitizer.enforce_constraints(plan);

    let rendered = if cmd.compact {
        serde_json::to_string(&sanitized)?
    } else {
        serde_json::to_string_pretty(&sanitized)?
    };
    write_output(cmd.output.as_deref(), &rendered)?;

    if !cmd.no_summary && !quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        redaction_summary::print_summary(&summary, &mut io::stderr(), stderr_supports_color)?;
    }

    info!("Sanitize operation completed.");
    Ok(())
}
