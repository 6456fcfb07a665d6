// lessonguard/src/commands/scan.rs
//! `lessonguard scan`: report what would be redacted, without redacting.

use anyhow::{bail, Result};
use is_terminal::IsTerminal;
use log::info;
use std::io::{self, Write};

use lessonguard_core::ContentSanitizer;

use super::{load_config, read_input};
use crate::cli::ScanCommand;
use crate::ui::redaction_summary;

pub fn run_scan(cmd: &ScanCommand) -> Result<()> {
    info!("Starting scan operation.");
    let sanitizer = ContentSanitizer::new(load_config(&cmd.rules)?)?;
    let input = read_input(None, cmd.input_file.as_deref())?;

    let summary = sanitizer.analyze_text(&input);
    let total = redaction_summary::total_occurrences(&summary);

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    if cmd.json_stdout {
        writeln!(writer, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        let supports_color = stdout.is_terminal();
        redaction_summary::print_summary(&summary, &mut writer, supports_color)?;
    }
    writer.flush()?;

    if let Some(threshold) = cmd.fail_over_threshold {
        if total > threshold {
            bail!("Scan found {} sensitive item(s), exceeding the threshold of {}.", total, threshold);
        }
    }

    info!("Scan operation completed.");
    Ok(())
}
