// lessonguard/src/commands/mod.rs
//! Command implementations and the input/output plumbing they share.

pub mod clean;
pub mod plan;
pub mod sanitize;
pub mod scan;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use lessonguard_core::{merge_rules, RedactionConfig};

use crate::cli::RuleArgs;
use crate::ui::output_format;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Helper for printing error messages to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Embedded defaults, merged with the user's rules file when one is given,
/// then filtered by the enable/disable lists.
pub fn load_config(rules: &RuleArgs) -> Result<RedactionConfig> {
    let defaults = RedactionConfig::load_default_rules().context("Failed to load default rules")?;
    let user = match &rules.config {
        Some(path) => Some(
            RedactionConfig::load_from_file(path)
                .with_context(|| format!("Failed to load rules from {}", path.display()))?,
        ),
        None => None,
    };

    let mut merged = merge_rules(defaults, user);
    merged.set_active_rules(&rules.enable, &rules.disable);
    debug!("Active rules: {:?}", merged.rules.iter().map(|r| r.name.as_str()).collect::<Vec<_>>());
    Ok(merged)
}

/// Reads the command's input: inline text, then a file, then stdin.
pub fn read_input(inline: Option<&str>, input_file: Option<&Path>) -> Result<String> {
    if let Some(text) = inline {
        debug!("Using input from command-line argument.");
        return Ok(text.to_string());
    }
    match input_file {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            fs::read_to_string(path).with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            info!("Reading input from stdin...");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

/// Writes `content` to `output` or stdout, ending with exactly one newline
/// unless the content already ends with one.
pub fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    let newline = if content.ends_with('\n') { "" } else { "\n" };
    match output {
        Some(path) => {
            info!("Writing sanitized content to file: {}", path.display());
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write!(file, "{}{}", content, newline)?;
        }
        None => {
            info!("Writing sanitized content to stdout.");
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write!(writer, "{}{}", content, newline)?;
            writer.flush()?;
        }
    }
    Ok(())
}
