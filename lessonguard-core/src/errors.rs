//! errors.rs - Custom error types for the lessonguard-core library.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types raised by `lessonguard-core`.
///
/// Marked `#[non_exhaustive]` so new variants are not a breaking change.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GuardError {
    #[error("Failed to compile redaction rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Failed to build profanity word list: {0}")]
    WordlistError(#[from] lessonguard_wordlist::WordlistError),

    #[error("Text generation backend failed: {0}")]
    BackendError(String),

    #[error("Generated payload is not valid JSON: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Failed to render prompt template: {0}")]
    TemplateError(String),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
