//! Defines the core `SanitizationEngine` and `ProfanityFilter` traits.
//!
//! `SanitizationEngine` is the string-level contract the structural sanitizer
//! depends on; `ProfanityFilter` is the injectable banned-term resource used
//! by the pattern matcher's first pass.
//!
//! License: MIT OR APACHE 2.0

use crate::config::{RedactionConfig, RedactionSummaryItem};
use crate::sanitizers::compiler::CompiledRules;

/// A pluggable banned-term detector.
///
/// Implementations must be read-only after construction; the pattern matcher
/// shares one instance across threads.
pub trait ProfanityFilter: Send + Sync {
    /// Returns `text` with every banned term visibly masked.
    fn censor(&self, text: &str) -> String;

    /// Number of banned terms found in `text`.
    fn count_matches(&self, text: &str) -> usize;

    fn is_profane(&self, text: &str) -> bool {
        self.count_matches(text) > 0
    }
}

/// The string-level sanitization contract.
pub trait SanitizationEngine: Send + Sync {
    /// Censors profanity and redacts every PII span in `text`. Total over all
    /// strings: never fails, always returns a string.
    fn clean(&self, text: &str) -> String;

    /// Same output as [`clean`](Self::clean) plus a per-category count of what
    /// was replaced.
    fn clean_with_summary(&self, text: &str) -> (String, Vec<RedactionSummaryItem>);

    /// Counts what `clean` would replace without keeping the output.
    fn analyze_for_stats(&self, text: &str) -> Vec<RedactionSummaryItem> {
        self.clean_with_summary(text).1
    }

    /// Returns a reference to the `CompiledRules` used by the engine.
    fn compiled_rules(&self) -> &CompiledRules;

    /// Returns a reference to the engine's configuration.
    fn get_rules(&self) -> &RedactionConfig;
}
