//! Result set over one search engine reply.
//!
//! A [`ResultSet`] is built once per search call, directly from the
//! reply the transport layer fetched. It extracts the hit list and the
//! summary metadata at construction and freezes them; afterwards it is
//! read-only except for the traversal cursor.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::{QuiverError, Result};
use crate::response::Response;
use crate::result::SearchResult;
use crate::util::{coerce_f32, coerce_u64};

/// The set of hits returned for one search call.
///
/// Holds the hits of the current page in engine order (relevance order
/// unless the query sorted otherwise), the raw total-hit count and max
/// score as reported by the engine, and a cursor for sequential
/// traversal. The cursor is single-consumer; independent traversals
/// should use [`ResultSet::iter`] or separate instances.
#[derive(Debug, Clone)]
pub struct ResultSet {
    /// Hits of the current page, in engine order.
    results: Vec<SearchResult>,
    /// Cursor position for sequential traversal.
    position: usize,
    /// The reply this set was built from, shared with the caller.
    response: Arc<Response>,
    /// Raw `hits.total` value, coerced on read.
    total_hits: Value,
    /// Raw `hits.max_score` value, coerced on read.
    max_score: Value,
}

impl ResultSet {
    /// Build a result set from an engine reply.
    ///
    /// Reads `hits.total` and `hits.max_score` and wraps every entry of
    /// `hits.hits` in order. An absent hit list means an empty page; an
    /// absent `hits` section or total/max-score entry means the reply
    /// does not match the engine contract and construction fails with
    /// [`QuiverError::MalformedResponse`].
    pub fn new(response: Arc<Response>) -> Result<Self> {
        let data = response.data();
        let hits = data
            .get("hits")
            .ok_or_else(|| QuiverError::malformed("reply has no hits section"))?;
        let total_hits = hits
            .get("total")
            .cloned()
            .ok_or_else(|| QuiverError::malformed("hits section has no total"))?;
        let max_score = hits
            .get("max_score")
            .cloned()
            .ok_or_else(|| QuiverError::malformed("hits section has no max_score"))?;

        let results = match hits.get("hits").and_then(Value::as_array) {
            Some(raw_hits) => raw_hits.iter().cloned().map(SearchResult::new).collect(),
            None => Vec::new(),
        };

        Ok(ResultSet {
            results,
            position: 0,
            response,
            total_hits,
            max_score,
        })
    }

    /// All hits of the current page, in engine order.
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Check whether the reply carries facet data.
    ///
    /// Presence only; an empty or oddly shaped facet value still counts.
    pub fn has_facets(&self) -> bool {
        self.response.data().get("facets").is_some()
    }

    /// The raw facet data, or an empty object when the reply has none.
    pub fn facets(&self) -> Value {
        self.response
            .data()
            .get("facets")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()))
    }

    /// Total number of matching documents across all pages.
    pub fn total_hits(&self) -> u64 {
        coerce_u64(&self.total_hits)
    }

    /// The highest relevance score among the returned hits.
    pub fn max_score(&self) -> f32 {
        coerce_f32(&self.max_score)
    }

    /// The reply this set was built from.
    pub fn response(&self) -> Arc<Response> {
        Arc::clone(&self.response)
    }

    /// Number of hits on the current page (not the total match count).
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check if the current page is empty.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The hit at the cursor, or `None` once the cursor is past the end.
    pub fn current(&self) -> Option<&SearchResult> {
        self.results.get(self.position)
    }

    /// Advance the cursor and return the hit it now points at.
    pub fn next(&mut self) -> Option<&SearchResult> {
        self.position += 1;
        self.current()
    }

    /// The cursor position.
    pub fn key(&self) -> usize {
        self.position
    }

    /// Check if the cursor points at an existing hit.
    pub fn valid(&self) -> bool {
        self.position < self.results.len()
    }

    /// Reset the cursor to the first hit.
    ///
    /// Callable at any time, including after exhaustion, to traverse
    /// the set again.
    pub fn rewind(&mut self) {
        self.position = 0;
    }

    /// Iterate over the page without touching the traversal cursor.
    pub fn iter(&self) -> std::slice::Iter<'_, SearchResult> {
        self.results.iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a SearchResult;
    type IntoIter = std::slice::Iter<'a, SearchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
