// lessonguard-core/src/sanitizer.rs
//! The structural sanitizer: applies a `SanitizationEngine` to every text
//! leaf of a plan tree.
//!
//! Mapping keys, sequence lengths, element order and scalar leaves are never
//! changed; only text values are rewritten. The traversal holds no state of
//! its own, so one `ContentSanitizer` can be shared across threads.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::config::{RedactionConfig, RedactionSummaryItem};
use crate::engine::SanitizationEngine;
use crate::engines::pattern_matcher::PatternMatcher;
use crate::plan_node::PlanNode;

#[derive(Clone)]
pub struct ContentSanitizer {
    engine: Arc<dyn SanitizationEngine>,
}

impl fmt::Debug for ContentSanitizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentSanitizer")
            .field("rules", &self.engine.compiled_rules().names().collect::<Vec<_>>())
            .finish()
    }
}

impl ContentSanitizer {
    /// Builds a sanitizer backed by a `PatternMatcher` over `config`.
    pub fn new(config: RedactionConfig) -> Result<Self> {
        let engine = PatternMatcher::new(config)?;
        Ok(Self::with_engine(Arc::new(engine)))
    }

    pub fn with_engine(engine: Arc<dyn SanitizationEngine>) -> Self {
        Self { engine }
    }

    /// Sanitizer over the embedded default rules.
    pub fn default_rules() -> Result<Self> {
        Self::new(RedactionConfig::load_default_rules()?)
    }

    pub fn engine(&self) -> &dyn SanitizationEngine {
        self.engine.as_ref()
    }

    pub fn clean(&self, text: &str) -> String {
        self.engine.clean(text)
    }

    pub fn clean_with_summary(&self, text: &str) -> (String, Vec<RedactionSummaryItem>) {
        self.engine.clean_with_summary(text)
    }

    /// Returns a sanitized copy of `node`. The input is left as it was.
    pub fn sanitize(&self, node: &PlanNode) -> PlanNode {
        match node {
            PlanNode::Mapping(entries) => PlanNode::Mapping(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), self.sanitize(value)))
                    .collect(),
            ),
            PlanNode::Sequence(items) => PlanNode::Sequence(items.iter().map(|item| self.sanitize(item)).collect()),
            PlanNode::Text(text) => PlanNode::Text(self.clean(text)),
            PlanNode::Scalar(scalar) => PlanNode::Scalar(scalar.clone()),
        }
    }

    /// Sanitizes an owned tree, rewriting text leaves in place.
    pub fn enforce_constraints(&self, mut node: PlanNode) -> PlanNode {
        self.sanitize_in_place(&mut node);
        node
    }

    fn sanitize_in_place(&self, node: &mut PlanNode) {
        match node {
            PlanNode::Mapping(entries) => entries.iter_mut().for_each(|(_, value)| self.sanitize_in_place(value)),
            PlanNode::Sequence(items) => items.iter_mut().for_each(|item| self.sanitize_in_place(item)),
            PlanNode::Text(text) => *text = self.clean(text),
            PlanNode::Scalar(_) => {}
        }
    }

    /// Sanitizes a JSON document directly; same rules as [`sanitize`](Self::sanitize).
    pub fn sanitize_json(&self, value: &Value) -> Value {
        match value {
            Value::Object(map) => Value::Object(
                map.iter()
                    .map(|(key, v)| (key.clone(), self.sanitize_json(v)))
                    .collect(),
            ),
            Value::Array(items) => Value::Array(items.iter().map(|v| self.sanitize_json(v)).collect()),
            Value::String(text) => Value::String(self.clean(text)),
            other => other.clone(),
        }
    }

    /// Per-category counts for one string, without rewriting.
    pub fn analyze_text(&self, text: &str) -> Vec<RedactionSummaryItem> {
        self.engine.analyze_for_stats(text)
    }

    /// Per-category counts over every text leaf of `node`, without rewriting.
    pub fn analyze(&self, node: &PlanNode) -> Vec<RedactionSummaryItem> {
        let mut totals: Vec<RedactionSummaryItem> = Vec::new();
        for leaf in node.text_leaves() {
            for item in self.analyze_text(leaf) {
                match totals.iter_mut().find(|t| t.rule_name == item.rule_name) {
                    Some(total) => total.occurrences += item.occurrences,
                    None => totals.push(item),
                }
            }
        }
        totals
    }
}
