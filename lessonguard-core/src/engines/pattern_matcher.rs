// lessonguard-core/src/engines/pattern_matcher.rs
//! The pattern matcher: a `SanitizationEngine` that censors profanity and
//! then redacts PII with an ordered list of regular expressions.
//!
//! Each rule is a full pass-and-replace over the text produced by the previous
//! pass, so a later rule never sees spans an earlier rule already replaced.
//! The whole ordered pipeline is then repeated until the output is stable.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::{debug, log_enabled, warn, Level};
use std::fmt;
use std::sync::Arc;

use crate::config::{RedactionConfig, RedactionSummaryItem};
use crate::engine::{ProfanityFilter, SanitizationEngine};
use crate::engines::profanity::{NoProfanityFilter, WordlistFilter};
use crate::redaction_match::{log_captured_match_debug, log_redaction_action_debug};
use crate::sanitizers::compiler::{get_or_compile_rules, CompiledRules};

/// Rule name reported for the profanity pass in summaries.
pub const PROFANITY_RULE_NAME: &str = "profanity";

/// Upper bound on full pipeline passes per input.
const MAX_PASSES: usize = 8;

pub struct PatternMatcher {
    compiled_rules: Arc<CompiledRules>,
    config: RedactionConfig,
    profanity: Arc<dyn ProfanityFilter>,
}

impl fmt::Debug for PatternMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternMatcher")
            .field("rules", &self.compiled_rules.names().collect::<Vec<_>>())
            .field("profanity", &"<dyn ProfanityFilter>")
            .finish()
    }
}

impl PatternMatcher {
    /// Builds the matcher and the word-list filter described by `config`.
    pub fn new(config: RedactionConfig) -> Result<Self> {
        let settings = config.profanity_settings();
        let filter: Arc<dyn ProfanityFilter> = if settings.enabled {
            Arc::new(WordlistFilter::from_config(&settings)?)
        } else {
            debug!("Profanity pass disabled by configuration.");
            Arc::new(NoProfanityFilter)
        };
        Self::with_filter(config, filter)
    }

    /// Builds the matcher around an injected profanity filter. The
    /// `profanity` section of `config` is ignored.
    pub fn with_filter(config: RedactionConfig, profanity: Arc<dyn ProfanityFilter>) -> Result<Self> {
        let compiled_rules = get_or_compile_rules(&config)
            .context("Failed to compile redaction rules for PatternMatcher")?;

        Ok(Self {
            compiled_rules,
            config,
            profanity,
        })
    }

    /// Matcher over the embedded default configuration.
    pub fn with_default_rules() -> Result<Self> {
        Self::new(RedactionConfig::load_default_rules()?)
    }

    /// Repeats the ordered pipeline until a pass leaves the text unchanged.
    /// A replacement can expose a match to an earlier rule ("5551234567Mary
    /// Jones" only reveals the name once the phone number is gone).
    fn run(&self, text: &str, mut tally: Option<&mut Vec<RedactionSummaryItem>>) -> String {
        let mut current = self.run_pass(text, tally.as_deref_mut());
        for pass in 1..MAX_PASSES {
            let next = self.run_pass(&current, tally.as_deref_mut());
            if next == current {
                debug!("Sanitization reached a fixed point after {} pass(es).", pass);
                return current;
            }
            current = next;
        }
        warn!(
            "Sanitization did not settle after {} passes; a rule replacement may re-trigger its own pattern.",
            MAX_PASSES
        );
        current
    }

    fn run_pass(&self, text: &str, mut tally: Option<&mut Vec<RedactionSummaryItem>>) -> String {
        if let Some(items) = tally.as_deref_mut() {
            record(items, PROFANITY_RULE_NAME, self.profanity.count_matches(text));
        }

        let mut cleaned = self.profanity.censor(text);

        for rule in &self.compiled_rules.rules {
            let wants_detail = tally.is_some() || log_enabled!(Level::Debug);
            if wants_detail {
                let mut occurrences = 0usize;
                for m in rule.regex.find_iter(&cleaned) {
                    log_captured_match_debug(module_path!(), &rule.name, m.as_str());
                    occurrences += 1;
                }
                if occurrences == 0 {
                    continue;
                }
                log_redaction_action_debug(module_path!(), &rule.name, occurrences, &rule.replace_with);
                if let Some(items) = tally.as_deref_mut() {
                    record(items, &rule.name, occurrences);
                }
            }

            cleaned = rule
                .regex
                .replace_all(&cleaned, rule.replace_with.as_str())
                .into_owned();
        }

        cleaned
    }
}

/// Adds `occurrences` to the entry for `rule_name`, keeping first-seen order.
fn record(items: &mut Vec<RedactionSummaryItem>, rule_name: &str, occurrences: usize) {
    if occurrences == 0 {
        return;
    }
    match items.iter_mut().find(|item| item.rule_name == rule_name) {
        Some(item) => item.occurrences += occurrences,
        None => items.push(RedactionSummaryItem {
            rule_name: rule_name.to_string(),
            occurrences,
        }),
    }
}

impl SanitizationEngine for PatternMatcher {
    fn clean(&self, text: &str) -> String {
        self.run(text, None)
    }

    fn clean_with_summary(&self, text: &str) -> (String, Vec<RedactionSummaryItem>) {
        let mut summary = Vec::new();
        let cleaned = self.run(text, Some(&mut summary));
        (cleaned, summary)
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }

    fn get_rules(&self) -> &RedactionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RedactionRule;

    fn matcher() -> PatternMatcher {
        PatternMatcher::with_default_rules().unwrap()
    }

    fn rule(name: &str, pattern: &str, replace_with: &str) -> RedactionRule {
        RedactionRule {
            name: name.to_string(),
            pattern: Some(pattern.to_string()),
            replace_with: replace_with.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_single_capitalized_word_is_kept() {
        let out = matcher().clean("John will teach the class");
        assert_eq!(out, "John will teach the class");
    }

    #[test]
    fn test_two_capitalized_words_are_redacted() {
        let out = matcher().clean("John Smith will teach the class about Mary Johnson's research");
        assert_eq!(out, "[REDACTED] will teach the class about [REDACTED]'s research");
    }

    #[test]
    fn test_name_heuristic_is_case_sensitive() {
        let m = matcher();
        assert_eq!(m.clean("JOHN SMITH"), "JOHN SMITH");
        assert_eq!(m.clean("john smith"), "john smith");
        assert_eq!(m.clean("McDonald Farm"), "McDonald Farm");
    }

    #[test]
    fn test_phone_formats() {
        let m = matcher();
        for phone in ["(555) 123-4567", "555.123.4567", "555-123-4567", "5551234567", "+1 555 123 4567", "1-555-123-4567"] {
            let out = m.clean(&format!("call {} today", phone));
            assert_eq!(out, "call [REDACTED] today", "phone format {}", phone);
        }
    }

    #[test]
    fn test_email_with_uppercase_tld() {
        let out = matcher().clean("write to teacher@school.EDU please");
        assert_eq!(out, "write to [REDACTED] please");
    }

    #[test]
    fn test_national_id_formats() {
        let out = matcher().clean("The SSN 123-45-6789 or 123456789 should be protected");
        assert_eq!(out, "The SSN [REDACTED] or [REDACTED] should be protected");
    }

    #[test]
    fn test_payment_card_formats() {
        let out = matcher().clean("Card number 1234 5678 9012 3456 or 1234-5678-9012-3456");
        assert_eq!(out, "Card number [REDACTED] or [REDACTED]");
    }

    #[test]
    fn test_profanity_runs_before_names() {
        // "Damn Good" would be a name match if the profanity pass ran second.
        let out = matcher().clean("Damn Good");
        assert_eq!(out, "**** Good");
    }

    #[test]
    fn test_rule_order_is_load_bearing() {
        // An unseparated 16-digit run: the phone rule claims the first ten digits.
        let out = matcher().clean("id 4532123456789012 end");
        assert_eq!(out, "id [REDACTED]789012 end");

        let reordered = RedactionConfig {
            rules: vec![
                rule("payment_card", r"\b\d{4}[-\s]?\d{4}[-\s]?\d{4}[-\s]?\d{4}\b", "[CARD]"),
                rule("phone", r"(\+?1[-.\s]?)?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})", "[PHONE]"),
            ],
            profanity: None,
        };
        let reordered = PatternMatcher::with_filter(reordered, Arc::new(NoProfanityFilter)).unwrap();
        assert_eq!(reordered.clean("id 4532123456789012 end"), "id [CARD] end");
    }

    #[test]
    fn test_later_rules_see_rewritten_text() {
        let config = RedactionConfig {
            rules: vec![rule("first", "abc", "XYZ"), rule("second", "XYZ", "done")],
            profanity: None,
        };
        let m = PatternMatcher::with_filter(config, Arc::new(NoProfanityFilter)).unwrap();
        assert_eq!(m.clean("abc"), "done");
    }

    #[test]
    fn test_capture_group_replacement() {
        let config = RedactionConfig {
            rules: vec![rule("area", r"\((\d{3})\) \d{3}-\d{4}", "($1) XXX-XXXX")],
            profanity: None,
        };
        let m = PatternMatcher::with_filter(config, Arc::new(NoProfanityFilter)).unwrap();
        assert_eq!(m.clean("(555) 123-4567"), "(555) XXX-XXXX");
    }

    #[test]
    fn test_profanity_can_be_disabled() {
        let mut config = RedactionConfig::load_default_rules().unwrap();
        if let Some(p) = config.profanity.as_mut() {
            p.enabled = false;
        }
        let m = PatternMatcher::new(config).unwrap();
        assert_eq!(m.clean("damn good"), "damn good");
    }

    #[test]
    fn test_summary_counts_per_category() {
        let (out, summary) = matcher().clean_with_summary(
            "Contact John Smith at john.smith@school.edu or a@b.org for damn good resources",
        );
        assert!(!out.contains("john.smith@school.edu"));

        let count = |name: &str| summary.iter().find(|s| s.rule_name == name).map(|s| s.occurrences);
        assert_eq!(count(PROFANITY_RULE_NAME), Some(1));
        assert_eq!(count("full_name"), Some(1));
        assert_eq!(count("email"), Some(2));
        assert_eq!(count("phone"), None);
    }

    #[test]
    fn test_summary_matches_clean_output() {
        let m = matcher();
        let text = "Call (555) 123-4567, damn it";
        let (with_summary, _) = m.clean_with_summary(text);
        assert_eq!(with_summary, m.clean(text));
        assert_eq!(m.analyze_for_stats("nothing to see here"), Vec::new());
    }

    #[test]
    fn test_name_exposed_by_phone_redaction() {
        let m = matcher();
        let once = m.clean("5551234567Mary Jones");
        assert_eq!(once, "[REDACTED][REDACTED]");
        assert_eq!(m.clean(&once), once);
    }

    #[test]
    fn test_profanity_exposed_by_phone_redaction() {
        let m = matcher();
        let once = m.clean("5551234567damn");
        assert_eq!(once, "[REDACTED]****");
        assert_eq!(m.clean(&once), once);
    }

    #[test]
    fn test_summary_accumulates_over_passes() {
        let (out, summary) = matcher().clean_with_summary("5551234567Mary Jones and Ann Lee");
        assert_eq!(out, "[REDACTED][REDACTED] and [REDACTED]");
        let count = |name: &str| summary.iter().find(|s| s.rule_name == name).map(|s| s.occurrences);
        assert_eq!(count("full_name"), Some(2));
        assert_eq!(count("phone"), Some(1));
        assert_eq!(summary.iter().filter(|s| s.rule_name == "full_name").count(), 1);
    }

    #[test]
    fn test_self_retriggering_rule_is_bounded() {
        let config = RedactionConfig {
            rules: vec![rule("grow", "a", "aa")],
            profanity: None,
        };
        let m = PatternMatcher::with_filter(config, Arc::new(NoProfanityFilter)).unwrap();
        assert_eq!(m.clean("a").len(), 1 << MAX_PASSES);
    }

    #[test]
    fn test_empty_and_whitespace() {
        let m = matcher();
        assert_eq!(m.clean(""), "");
        assert_eq!(m.clean("   "), "   ");
    }
}
