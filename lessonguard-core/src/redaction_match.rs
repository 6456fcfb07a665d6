//! PII-safe debug logging helpers for redaction events.
//!
//! Original matched text is sensitive by definition, so debug logs show a
//! placeholder unless `LESSONGUARD_ALLOW_DEBUG_PII=true` is set.

use lazy_static::lazy_static;
use log::debug;

/// Environment variable that opts in to logging original matched text.
pub const ALLOW_DEBUG_PII_ENV: &str = "LESSONGUARD_ALLOW_DEBUG_PII";

lazy_static! {
    /// Read once; toggling the variable mid-process has no effect.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var(ALLOW_DEBUG_PII_ENV)
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// Describes a sensitive string without revealing it.
pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let chars = s.chars().count();
    if chars <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", chars)
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_captured_match_debug(module_path: &str, rule_name: &str, original_sensitive_content: &str) {
    debug!(
        "{} Captured match for rule '{}' (original): '{}'",
        module_path,
        rule_name,
        get_loggable_content(original_sensitive_content)
    );
}

pub fn log_redaction_action_debug(module_path: &str, rule_name: &str, occurrences: usize, replacement: &str) {
    debug!(
        "{} Redaction action: {} occurrence(s) replaced with '{}' for rule '{}'",
        module_path, occurrences, replacement, rule_name
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("abc"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_sensitive_long_string() {
        assert_eq!(redact_sensitive("123456789"), "[REDACTED: 9 chars]".to_string());
    }

    #[test]
    fn test_redact_sensitive_counts_chars_not_bytes() {
        assert_eq!(redact_sensitive("éééééééé"), "[REDACTED]".to_string());
    }
}
