// lessonguard-core/src/headless.rs
//! `headless.rs`
//! Process-wide entry points for callers that do not manage their own
//! `ContentSanitizer`, plus a one-shot helper for custom configurations.
//!
//! The global sanitizer is built from the embedded default rules on first use
//! and is read-only afterwards.

use anyhow::Result;
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::config::RedactionConfig;
use crate::plan_node::PlanNode;
use crate::sanitizer::ContentSanitizer;

static GLOBAL_SANITIZER: Lazy<ContentSanitizer> = Lazy::new(|| {
    // The embedded rules are compiled into the binary; failing here is a build defect.
    ContentSanitizer::default_rules().expect("embedded default rules must compile")
});

/// The shared default sanitizer.
pub fn global_sanitizer() -> &'static ContentSanitizer {
    &GLOBAL_SANITIZER
}

/// Censors profanity and redacts PII in `text` with the default rules.
pub fn clean_text(text: &str) -> String {
    GLOBAL_SANITIZER.clean(text)
}

/// Sanitizes every text leaf of `plan` with the default rules.
pub fn enforce_constraints(plan: &PlanNode) -> PlanNode {
    GLOBAL_SANITIZER.sanitize(plan)
}

pub fn enforce_constraints_json(plan: &Value) -> Value {
    GLOBAL_SANITIZER.sanitize_json(plan)
}

/// Sanitizes `content` with a sanitizer built from `config` for this call only.
///
/// # Arguments
///
/// * `config` - The merged RedactionConfig (defaults + optional user overrides).
/// * `content` - The string to be sanitized.
pub fn headless_sanitize_string(config: RedactionConfig, content: &str) -> Result<String> {
    let sanitizer = ContentSanitizer::new(config)?;
    Ok(sanitizer.clean(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_global_clean_text() {
        assert_eq!(clean_text("Email me at a@b.org"), "Email me at [REDACTED]");
    }

    #[test]
    fn test_global_sanitizer_is_shared() {
        assert!(std::ptr::eq(global_sanitizer(), global_sanitizer()));
    }

    #[test]
    fn test_enforce_constraints_json_keeps_null() {
        assert_eq!(enforce_constraints_json(&json!({"title": null})), json!({"title": null}));
    }

    #[test]
    fn test_headless_with_custom_rules() {
        let config: RedactionConfig = serde_yml::from_str(
            "rules:\n  - name: secret\n    pattern: 'hunter2'\n    replace_with: '[PW]'\nprofanity:\n  enabled: false\n",
        )
        .unwrap();
        let out = headless_sanitize_string(config, "pw is hunter2, damn").unwrap();
        assert_eq!(out, "pw is [PW], damn");
    }
}
