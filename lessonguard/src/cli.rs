// lessonguard/src/cli.rs
//! This file defines the command-line interface (CLI) for the lessonguard application,
//! including all available commands and their arguments.
//! License: MIT OR APACHE 2.0

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "lessonguard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Redact personal data and censor profanity in generated lesson content",
    long_about = "Lessonguard sanitizes generated lesson plans before they are shown, rendered or stored. Profanity is masked first; names, phone numbers, email addresses, national IDs and payment card numbers are then replaced with [REDACTED]. JSON plan documents keep their exact structure: only string values change.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the lessonguard crates)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `lessonguard` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Sanitizes a string, a text file or stdin.")]
    Clean(CleanCommand),

    #[command(about = "Sanitizes a JSON plan document, preserving its structure.")]
    Sanitize(SanitizeCommand),

    #[command(about = "Counts sensitive content per category without redacting.")]
    Scan(ScanCommand),

    #[command(about = "Generates a lesson plan and prints it sanitized.")]
    Plan(PlanCommand),
}

/// Rule selection shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct RuleArgs {
    /// Path to a custom redaction configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "LESSONGUARD_RULES", help = "Path to a custom redaction configuration file (YAML).")]
    pub config: Option<PathBuf>,

    #[arg(long, short = 'e', value_delimiter = ',', help = "Enable these opt-in rule names (comma-separated).")]
    pub enable: Vec<String>,

    #[arg(long, short = 'x', value_delimiter = ',', help = "Disable these rule names (comma-separated).")]
    pub disable: Vec<String>,
}

/// Arguments for the `clean` command.
#[derive(Args, Debug)]
pub struct CleanCommand {
    /// Text to sanitize. Reads `--input-file` or stdin when omitted.
    #[arg(value_name = "TEXT", conflicts_with = "input_file")]
    pub text: Option<String>,

    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub rules: RuleArgs,

    #[arg(long = "no-redaction-summary", help = "Suppress the redaction summary.")]
    pub no_summary: bool,
}

/// Arguments for the `sanitize` command.
#[derive(Args, Debug)]
pub struct SanitizeCommand {
    #[arg(long, short = 'i', value_name = "FILE", help = "Read the JSON document from a file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub rules: RuleArgs,

    #[arg(long, help = "Emit compact JSON instead of pretty-printed JSON.")]
    pub compact: bool,

    #[arg(long = "no-redaction-summary", help = "Suppress the redaction summary.")]
    pub no_summary: bool,
}

/// Arguments for the `scan` command.
#[derive(Args, Debug)]
pub struct ScanCommand {
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    #[command(flatten)]
    pub rules: RuleArgs,

    #[arg(long = "json-stdout", help = "Print the per-category counts to stdout as JSON.")]
    pub json_stdout: bool,

    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with a non-zero code if the total number of detected items exceeds this threshold.")]
    pub fail_over_threshold: Option<usize>,
}

/// Arguments for the `plan` command.
#[derive(Args, Debug)]
pub struct PlanCommand {
    #[arg(long, value_name = "GRADE", help = "Target grade level, e.g. \"8th Grade\".")]
    pub grade: String,

    #[arg(long, value_name = "SUBJECT", help = "Subject of the lesson.")]
    pub subject: String,

    #[arg(long, value_name = "TEXT", default_value = "grade-appropriate prior knowledge", help = "Audience knowledge baseline.")]
    pub baseline: String,

    #[arg(long, value_name = "DURATION", default_value = "45 minutes", help = "Lesson duration.")]
    pub duration: String,

    #[arg(
        long,
        value_delimiter = ',',
        default_value = "age-appropriate,privacy-protecting",
        help = "Constraints for the generated content (comma-separated)."
    )]
    pub constraints: Vec<String>,

    #[arg(long, value_name = "MODEL", default_value = "gpt-4o", help = "Model name passed to the text backend.")]
    pub model: String,

    #[arg(long = "json-only", help = "Print only the sanitized plan as JSON.")]
    pub json_only: bool,

    #[arg(long, short = 'o', value_name = "FILE", help = "Also write the sanitized plan JSON to this file.")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub rules: RuleArgs,
}
