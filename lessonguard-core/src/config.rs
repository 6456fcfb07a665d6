//! Configuration management for `lessonguard-core`.
//!
//! This module defines the redaction rules applied to lesson content and the
//! settings of the profanity pass. It handles YAML (de)serialization and
//! provides utilities for loading, merging, filtering and validating configs.
//!
//! Rule order is significant: rules are applied top to bottom, each one
//! rewriting the output of the previous rule.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use lessonguard_wordlist::Wordlist;
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// The placeholder substituted for every detected PII span.
pub const DEFAULT_REPLACEMENT: &str = "[REDACTED]";

/// Represents a single redaction rule (one category of sensitive content).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct RedactionRule {
    /// Unique identifier for the rule (e.g., "email").
    pub name: String,
    /// Human-readable description of what the rule targets.
    pub description: Option<String>,
    /// The regex pattern string.
    pub pattern: Option<String>,
    /// The string to replace matches with. May reference capture groups (`$1`).
    pub replace_with: String,
    /// If true, enables multiline mode for the regex engine.
    pub multiline: bool,
    /// If true, the dot character `.` in regex will match newlines.
    pub dot_matches_new_line: bool,
    /// If true, letters in the pattern match regardless of case.
    pub case_insensitive: bool,
    /// If true, the rule is disabled unless explicitly enabled.
    pub opt_in: bool,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
    /// Severity level (e.g., "high", "medium").
    pub severity: Option<String>,
    /// Metadata tags for categorization.
    pub tags: Option<Vec<String>>,
}

impl Default for RedactionRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern: None,
            replace_with: DEFAULT_REPLACEMENT.to_string(),
            multiline: false,
            dot_matches_new_line: false,
            case_insensitive: false,
            opt_in: false,
            enabled: None,
            severity: None,
            tags: None,
        }
    }
}

/// Settings for the profanity pass that runs before the PII rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct ProfanityConfig {
    /// Disabling skips the pass entirely.
    pub enabled: bool,
    /// Character repeated over each censored term.
    pub mask_char: char,
    /// Fold common character substitutions ("sh1t") before lookup.
    pub leet_variants: bool,
    /// Replaces the embedded list with the terms in this file (one per line).
    pub wordlist_file: Option<PathBuf>,
    /// Terms added on top of the base list.
    pub extra_words: Vec<String>,
    /// Terms removed from the base list.
    pub allowed_words: Vec<String>,
}

impl Default for ProfanityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            mask_char: '*',
            leet_variants: true,
            wordlist_file: None,
            extra_words: Vec::new(),
            allowed_words: Vec::new(),
        }
    }
}

impl ProfanityConfig {
    /// Rejects settings whose output the PII rules could match again.
    pub fn validate(&self) -> Result<()> {
        if self.mask_char.is_alphanumeric() {
            return Err(anyhow!(
                "Profanity `mask_char` '{}' must not be a letter or digit.",
                self.mask_char
            ));
        }
        Ok(())
    }

    /// Resolves the effective word list: base list (embedded or file), plus
    /// `extra_words`, minus `allowed_words`.
    pub fn build_wordlist(&self) -> Result<Wordlist> {
        let mut wordlist = match &self.wordlist_file {
            Some(path) => {
                info!("Loading profanity word list from: {}", path.display());
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read word list {}", path.display()))?;
                Wordlist::parse(&text)
            }
            None => Wordlist::default_list(),
        };

        wordlist
            .extend(&self.extra_words)
            .context("Invalid entry in `extra_words`")?;

        for word in &self.allowed_words {
            if !wordlist.remove(word) {
                warn!("Allowed word '{}' is not in the profanity word list.", word);
            }
        }

        debug!("Profanity word list resolved to {} terms.", wordlist.len());
        Ok(wordlist)
    }
}

/// Represents the top-level configuration structure.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct RedactionConfig {
    /// Ordered PII rules. Vector order is application order.
    #[serde(default)]
    pub rules: Vec<RedactionRule>,
    /// Profanity pass settings; `None` means defaults.
    #[serde(default)]
    pub profanity: Option<ProfanityConfig>,
}

/// Per-category count reported after a run. Matched originals are never kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionSummaryItem {
    pub rule_name: String,
    pub occurrences: usize,
}

impl RedactionConfig {
    /// Loads redaction rules from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: RedactionConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_rules(&config.rules)?;
        if let Some(profanity) = &config.profanity {
            profanity
                .validate()
                .with_context(|| format!("Invalid profanity settings in {}", path.display()))?;
        }
        info!("Loaded {} rules from file {}.", config.rules.len(), path.display());

        Ok(config)
    }

    /// Loads the default rules from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let config: RedactionConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default rules")?;

        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }

    /// The effective profanity settings.
    pub fn profanity_settings(&self) -> ProfanityConfig {
        self.profanity.clone().unwrap_or_default()
    }

    /// Filters active rules based on enable/disable lists. Order is preserved.
    pub fn set_active_rules(&mut self, enable_rules: &[String], disable_rules: &[String]) {
        let enable_set: HashSet<&str> = enable_rules.iter().map(String::as_str).collect();
        let disable_set: HashSet<&str> = disable_rules.iter().map(String::as_str).collect();

        debug!("Initial rules count before filtering: {}", self.rules.len());

        let all_rule_names: HashSet<&str> = self.rules.iter().map(|r| r.name.as_str()).collect();

        for rule_name in enable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `enable_rules` list does not exist.", rule_name);
        }

        for rule_name in disable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `disable_rules` list does not exist.", rule_name);
        }

        self.rules.retain(|rule| {
            let rule_name_str = rule.name.as_str();
            !disable_set.contains(rule_name_str) && (!rule.opt_in || enable_set.contains(rule_name_str))
        });

        debug!("Final active rules count after filtering: {}", self.rules.len());
    }
}

/// Merges user-defined rules and profanity settings with defaults.
///
/// A user rule sharing a default rule's name replaces it in place; new user
/// rules are appended after the defaults in file order.
pub fn merge_rules(
    default_config: RedactionConfig,
    user_config: Option<RedactionConfig>,
) -> RedactionConfig {
    debug!("merge_rules called. Initial default rules count: {}", default_config.rules.len());

    let mut final_rules = default_config.rules;
    let mut final_profanity = default_config.profanity;

    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging {} user rules.", user_cfg.rules.len());
        for user_rule in user_cfg.rules {
            match final_rules.iter_mut().find(|r| r.name == user_rule.name) {
                Some(existing) => {
                    debug!("Overriding rule '{}' with user definition.", user_rule.name);
                    *existing = user_rule;
                }
                None => final_rules.push(user_rule),
            }
        }

        if let Some(user_profanity) = user_cfg.profanity {
            debug!("Overriding profanity settings with user values.");
            final_profanity = Some(user_profanity);
        }
    }

    debug!("Final total rules after merge: {}", final_rules.len());

    RedactionConfig {
        rules: final_rules,
        profanity: final_profanity,
    }
}

/// Validates rule integrity (names, regex compilation, capture groups).
fn validate_rules(rules: &[RedactionRule]) -> Result<()> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();
    let capture_group_regex = Regex::new(r"\$(\d+)")?;

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.clone()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        let pattern = match &rule.pattern {
            Some(p) => p,
            None => {
                errors.push(format!("Rule '{}' is missing the `pattern` field.", rule.name));
                continue;
            }
        };

        if pattern.is_empty() {
            errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
            continue;
        }

        if pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(format!(
                "Rule '{}': pattern length ({}) exceeds maximum allowed ({}).",
                rule.name,
                pattern.len(),
                MAX_PATTERN_LENGTH
            ));
            continue;
        }

        let compiled = match Regex::new(pattern) {
            Ok(re) => re,
            Err(e) => {
                errors.push(format!("Rule '{}' has an invalid regex pattern: {}", rule.name, e));
                continue;
            }
        };

        // captures_len counts the implicit whole-match group 0.
        let group_count = compiled.captures_len() - 1;
        for cap in capture_group_regex.captures_iter(&rule.replace_with) {
            if let Some(group_num_str) = cap.get(1) {
                if let Ok(group_num) = group_num_str.as_str().parse::<usize>() {
                    if group_num > group_count {
                        errors.push(format!(
                            "Rule '{}': replacement references non-existent capture group '${}'.",
                            rule.name, group_num
                        ));
                    }
                }
            }
        }
    }

    if !errors.is_empty() {
        let full_error_message = format!("Rule validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        Ok(())
    }
}
