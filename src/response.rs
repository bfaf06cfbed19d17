//! Raw reply handling for search engine calls.
//!
//! A [`Response`] owns the decoded JSON body of one engine reply and
//! hands out read-only views of it. The transport layer produces it,
//! either from an already-decoded [`Value`] or from the raw body text;
//! result handling downstream never mutates it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::util::coerce_u64;

/// A decoded reply from the search engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// The decoded reply body.
    data: Value,
}

impl Response {
    /// Wrap an already-decoded reply body.
    pub fn new(data: Value) -> Self {
        Response { data }
    }

    /// Decode a reply from raw JSON text.
    pub fn from_json(body: &str) -> Result<Self> {
        let data = serde_json::from_str(body)?;
        Ok(Response { data })
    }

    /// Get the raw reply body.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Check whether the engine reported a fault in this reply.
    pub fn has_error(&self) -> bool {
        self.data.get("error").is_some()
    }

    /// Get the raw fault reported by the engine, if any.
    pub fn error(&self) -> Option<&Value> {
        self.data.get("error")
    }

    /// Engine-side processing time in milliseconds, 0 when not reported.
    pub fn took(&self) -> u64 {
        self.data.get("took").map(coerce_u64).unwrap_or(0)
    }
}
