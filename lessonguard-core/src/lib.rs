// lessonguard-core/src/lib.rs
//! # Lessonguard Core Library
//!
//! `lessonguard-core` keeps generated lesson plans free of personal data and
//! profanity before anything downstream renders, displays or stores them.
//!
//! Two layers do the work:
//!
//! * A string-level [`SanitizationEngine`], implemented by [`PatternMatcher`]:
//!   a profanity pass first (word-list based, masking each term), then an
//!   ordered series of PII rules (names, phone numbers, email addresses,
//!   national IDs, payment cards), each replacing its matches with
//!   `[REDACTED]` on the text left by the rule before it.
//! * The structural [`ContentSanitizer`], which applies that engine to every
//!   text leaf of a [`PlanNode`] tree while keeping keys, sequence order and
//!   scalar values exactly as they were.
//!
//! ## Modules
//!
//! * `config`: `RedactionRule`, `ProfanityConfig` and `RedactionConfig`, loaded from YAML.
//! * `sanitizers`: compiles and caches the ordered rule list.
//! * `engine`: the `SanitizationEngine` and `ProfanityFilter` traits.
//! * `engines`: the `PatternMatcher` engine and word-list profanity filters.
//! * `plan_node`: the `PlanNode` tree and its JSON conversions.
//! * `sanitizer`: the structural `ContentSanitizer`.
//! * `headless`: process-wide default sanitizer and one-shot helpers.
//! * `planner`: prompt rendering, backend trait, plan parsing and validation.
//! * `redaction_match`: logging helpers that keep matched text out of logs.
//! * `errors`: the `GuardError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use lessonguard_core::{clean_text, enforce_constraints, PlanNode};
//! use serde_json::json;
//!
//! let cleaned = clean_text("Call Mary Johnson at (555) 123-4567");
//! // "Call Mary" already has the two-capitalized-words shape.
//! assert_eq!(cleaned, "[REDACTED] Johnson at [REDACTED]");
//!
//! let plan = PlanNode::from(json!({"title": "Intro", "items": [1, "mail a@b.org"]}));
//! let safe = enforce_constraints(&plan);
//! assert_eq!(serde_json::Value::from(safe), json!({"title": "Intro", "items": [1, "mail [REDACTED]"]}));
//! ```
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod plan_node;
pub mod planner;
pub mod redaction_match;
pub mod sanitizer;
pub mod sanitizers;

/// Re-exports the public configuration types and functions for managing redaction rules.
pub use config::{
    merge_rules,
    ProfanityConfig,
    RedactionConfig,
    RedactionRule,
    RedactionSummaryItem,
    DEFAULT_REPLACEMENT,
    MAX_PATTERN_LENGTH,
};

pub use errors::GuardError;

pub use engine::{ProfanityFilter, SanitizationEngine};
pub use engines::pattern_matcher::{PatternMatcher, PROFANITY_RULE_NAME};
pub use engines::profanity::{NoProfanityFilter, WordlistFilter};

pub use plan_node::{PlanNode, Scalar};
pub use sanitizer::ContentSanitizer;

/// Re-exports the process-wide entry points.
pub use headless::{
    clean_text,
    enforce_constraints,
    enforce_constraints_json,
    global_sanitizer,
    headless_sanitize_string,
};

pub use planner::{
    extract_json_payload,
    generate_prompt,
    parse_plan,
    validate_plan,
    GenerationParams,
    LessonPlanner,
    OfflineBackend,
    PlanRequest,
    TextBackend,
};

pub use redaction_match::redact_sensitive;

// Advanced usage: direct access to the compiled rule set.
pub use sanitizers::compiler::{compile_rules, CompiledRule, CompiledRules};
