// lessonguard-core/src/plan_node.rs
//! `PlanNode`: the closed recursive value a parsed lesson plan is made of.
//!
//! Mapping keys keep their document order. Conversions to and from
//! `serde_json::Value` are lossless in both directions, and (de)serialization
//! goes through that conversion.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A non-string, non-container leaf. Passed through sanitization untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    /// Keeps the integer/float distinction of the source document.
    Number(Number),
}

/// One node of a plan tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum PlanNode {
    /// Ordered (key, value) pairs with unique keys.
    Mapping(Vec<(String, PlanNode)>),
    Sequence(Vec<PlanNode>),
    Text(String),
    Scalar(Scalar),
}

impl PlanNode {
    /// Builds a mapping from `pairs`. A repeated key replaces the earlier
    /// value in the earlier key's position.
    pub fn mapping<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, PlanNode)>,
        K: Into<String>,
    {
        let mut entries: Vec<(String, PlanNode)> = Vec::new();
        for (key, value) in pairs {
            let key = key.into();
            match entries.iter_mut().find(|(existing, _)| *existing == key) {
                Some(slot) => slot.1 = value,
                None => entries.push((key, value)),
            }
        }
        PlanNode::Mapping(entries)
    }

    pub fn sequence<I: IntoIterator<Item = PlanNode>>(items: I) -> Self {
        PlanNode::Sequence(items.into_iter().collect())
    }

    pub fn text<S: Into<String>>(s: S) -> Self {
        PlanNode::Text(s.into())
    }

    pub fn null() -> Self {
        PlanNode::Scalar(Scalar::Null)
    }

    /// Value stored under `key`, if this node is a mapping holding it.
    pub fn get(&self, key: &str) -> Option<&PlanNode> {
        match self {
            PlanNode::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PlanNode::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[PlanNode]> {
        match self {
            PlanNode::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&[(String, PlanNode)]> {
        match self {
            PlanNode::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Child count for containers; zero for leaves.
    pub fn len(&self) -> usize {
        match self {
            PlanNode::Mapping(entries) => entries.len(),
            PlanNode::Sequence(items) => items.len(),
            PlanNode::Text(_) | PlanNode::Scalar(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// JSON-style name of this node's shape, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            PlanNode::Mapping(_) => "object",
            PlanNode::Sequence(_) => "array",
            PlanNode::Text(_) => "string",
            PlanNode::Scalar(Scalar::Null) => "null",
            PlanNode::Scalar(Scalar::Bool(_)) => "boolean",
            PlanNode::Scalar(Scalar::Number(_)) => "number",
        }
    }

    /// Every text leaf in document order (mapping keys are not included).
    pub fn text_leaves(&self) -> impl Iterator<Item = &str> {
        let mut out = Vec::new();
        collect_text(self, &mut out);
        out.into_iter()
    }
}

fn collect_text<'a>(node: &'a PlanNode, out: &mut Vec<&'a str>) {
    match node {
        PlanNode::Mapping(entries) => entries.iter().for_each(|(_, v)| collect_text(v, out)),
        PlanNode::Sequence(items) => items.iter().for_each(|v| collect_text(v, out)),
        PlanNode::Text(s) => out.push(s),
        PlanNode::Scalar(_) => {}
    }
}

impl From<Value> for PlanNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => PlanNode::Scalar(Scalar::Null),
            Value::Bool(b) => PlanNode::Scalar(Scalar::Bool(b)),
            Value::Number(n) => PlanNode::Scalar(Scalar::Number(n)),
            Value::String(s) => PlanNode::Text(s),
            Value::Array(items) => PlanNode::Sequence(items.into_iter().map(PlanNode::from).collect()),
            // Map keys are already unique.
            Value::Object(map) => PlanNode::Mapping(map.into_iter().map(|(k, v)| (k, PlanNode::from(v))).collect()),
        }
    }
}

impl From<PlanNode> for Value {
    fn from(node: PlanNode) -> Self {
        match node {
            PlanNode::Scalar(Scalar::Null) => Value::Null,
            PlanNode::Scalar(Scalar::Bool(b)) => Value::Bool(b),
            PlanNode::Scalar(Scalar::Number(n)) => Value::Number(n),
            PlanNode::Text(s) => Value::String(s),
            PlanNode::Sequence(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            PlanNode::Mapping(entries) => {
                let mut map = Map::with_capacity(entries.len());
                for (k, v) in entries {
                    map.insert(k, Value::from(v));
                }
                Value::Object(map)
            }
        }
    }
}

impl From<&str> for PlanNode {
    fn from(s: &str) -> Self {
        PlanNode::Text(s.to_string())
    }
}

impl From<String> for PlanNode {
    fn from(s: String) -> Self {
        PlanNode::Text(s)
    }
}

impl From<bool> for PlanNode {
    fn from(b: bool) -> Self {
        PlanNode::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for PlanNode {
    fn from(n: i64) -> Self {
        PlanNode::Scalar(Scalar::Number(n.into()))
    }
}

impl From<f64> for PlanNode {
    /// Non-finite floats have no JSON form and become null.
    fn from(n: f64) -> Self {
        match Number::from_f64(n) {
            Some(n) => PlanNode::Scalar(Scalar::Number(n)),
            None => PlanNode::null(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_round_trip_keeps_key_order_and_number_kinds() {
        let value = json!({"zeta": 1, "alpha": [1.5, true, null, "x"], "mid": {"b": 2, "a": 3}});
        let node = PlanNode::from(value.clone());

        let keys: Vec<&str> = node.as_mapping().unwrap().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(Value::from(node), value);
    }

    #[test]
    fn test_integer_and_float_stay_distinct() {
        let node = PlanNode::from(json!([1, 1.0]));
        let items = node.as_sequence().unwrap();
        assert_ne!(items[0], items[1]);
        assert_eq!(serde_json::to_string(&node).unwrap(), "[1,1.0]");
    }

    #[test]
    fn test_mapping_deduplicates_keys_in_place() {
        let node = PlanNode::mapping([
            ("a", PlanNode::from(1i64)),
            ("b", PlanNode::from(2i64)),
            ("a", PlanNode::from(3i64)),
        ]);
        assert_eq!(node.len(), 2);
        assert_eq!(node.get("a"), Some(&PlanNode::from(3i64)));
        assert_eq!(node.as_mapping().unwrap()[0].0, "a");
    }

    #[test]
    fn test_serde_goes_through_json_value() {
        let node: PlanNode = serde_json::from_str(r#"{"title": "T", "n": null}"#).unwrap();
        assert_eq!(node.get("title").and_then(PlanNode::as_text), Some("T"));
        assert_eq!(node.get("n"), Some(&PlanNode::null()));
        assert_eq!(serde_json::to_string(&node).unwrap(), r#"{"title":"T","n":null}"#);
    }

    #[test]
    fn test_text_leaves_in_document_order() {
        let node = PlanNode::from(json!({"k": "one", "list": ["two", 3, {"inner": "four"}]}));
        let leaves: Vec<&str> = node.text_leaves().collect();
        assert_eq!(leaves, vec!["one", "two", "four"]);
    }

    #[test]
    fn test_kind_and_len() {
        assert_eq!(PlanNode::from(f64::NAN), PlanNode::null());
        assert_eq!(PlanNode::from("x").kind(), "string");
        assert_eq!(PlanNode::from(false).kind(), "boolean");
        assert!(PlanNode::text("leaf").is_empty());
        assert_eq!(PlanNode::sequence([PlanNode::null(), PlanNode::null()]).len(), 2);
    }
}
