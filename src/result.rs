//! A single matched document from an engine reply.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::util::coerce_f32;

static NULL: Value = Value::Null;

/// One hit returned by the search engine.
///
/// Wraps one raw hit record from the reply's hit list. The record is
/// kept as-is; accessors read the conventional entries (`_id`,
/// `_index`, `_type`, `_score`, `_source`) and degrade to `None` or a
/// default when an entry is absent, since engines omit entries
/// depending on the query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The raw hit record.
    hit: Value,
}

impl SearchResult {
    /// Create a result from one raw hit record.
    pub fn new(hit: Value) -> Self {
        SearchResult { hit }
    }

    /// The document id of this hit.
    pub fn id(&self) -> Option<&str> {
        self.hit.get("_id").and_then(Value::as_str)
    }

    /// The index this hit was matched in.
    pub fn index(&self) -> Option<&str> {
        self.hit.get("_index").and_then(Value::as_str)
    }

    /// The document type of this hit.
    pub fn doc_type(&self) -> Option<&str> {
        self.hit.get("_type").and_then(Value::as_str)
    }

    /// The relevance score of this hit, 0.0 when not scored.
    pub fn score(&self) -> f32 {
        self.hit.get("_score").map(coerce_f32).unwrap_or(0.0)
    }

    /// The stored document body, JSON null when the reply carries none.
    pub fn source(&self) -> &Value {
        self.hit.get("_source").unwrap_or(&NULL)
    }

    /// Get a field value from the document body.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.source().get(name)
    }

    /// Check if the document body has a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The whole raw hit record.
    pub fn data(&self) -> &Value {
        &self.hit
    }
}
