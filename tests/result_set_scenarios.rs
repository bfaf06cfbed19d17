//! Integration scenarios for result set handling over engine replies.

use std::sync::Arc;

use quiver::prelude::*;
use serde_json::json;

#[test]
fn test_full_traversal_of_string_typed_reply() -> Result<()> {
    // Engines sometimes report numeric metadata as strings.
    let response = Arc::new(Response::new(json!({
        "hits": {
            "total": "3",
            "max_score": "0.9",
            "hits": [
                {"_id": "h1", "_score": "0.9", "_source": {"title": "alpha"}},
                {"_id": "h2", "_score": "0.7", "_source": {"title": "beta"}},
                {"_id": "h3", "_score": "0.2", "_source": {"title": "gamma"}}
            ]
        }
    })));

    let mut set = ResultSet::new(response)?;

    assert_eq!(set.len(), 3);
    assert_eq!(set.total_hits(), 3);
    assert_eq!(set.max_score(), 0.9);

    // The cursor walks positions 0, 1, 2 and then goes invalid.
    let mut keys = Vec::new();
    while set.valid() {
        keys.push(set.key());
        let _ = set.next();
    }
    assert_eq!(keys, vec![0, 1, 2]);
    assert!(set.current().is_none(), "exhausted cursor yields no hit");

    // Rewinding restores the first hit.
    set.rewind();
    assert!(set.valid());
    assert_eq!(set.current().unwrap().id(), Some("h1"));
    assert_eq!(set.current().unwrap().get("title"), Some(&json!("alpha")));

    Ok(())
}

#[test]
fn test_empty_page_with_nonzero_total() -> Result<()> {
    // A deep pagination request can return a page with no hits even
    // though the query matched documents.
    let response = Arc::new(Response::new(json!({
        "took": 4,
        "hits": {"total": 250, "max_score": null}
    })));

    let set = ResultSet::new(Arc::clone(&response))?;

    assert!(set.is_empty());
    assert_eq!(set.total_hits(), 250);
    assert_eq!(set.max_score(), 0.0);
    assert!(!set.valid());
    assert_eq!(set.response().took(), 4);

    Ok(())
}

#[test]
fn test_reply_decoded_from_json_text() -> Result<()> {
    let body = r#"{
        "took": 11,
        "hits": {
            "total": 2,
            "max_score": 1.0,
            "hits": [
                {"_index": "books", "_type": "book", "_id": "1", "_score": 1.0,
                 "_source": {"title": "Rust Programming", "year": 2024}},
                {"_index": "books", "_type": "book", "_id": "2", "_score": 0.4,
                 "_source": {"title": "Search Engines", "year": 2019}}
            ]
        },
        "facets": {
            "year": {"_type": "terms", "terms": [{"term": 2024, "count": 1}]}
        }
    }"#;

    let response = Arc::new(Response::from_json(body)?);
    let set = ResultSet::new(response)?;

    assert_eq!(set.len(), 2);
    assert!(set.has_facets());
    assert_eq!(set.facets()["year"]["_type"], json!("terms"));

    let years: Vec<_> = set
        .iter()
        .map(|hit| hit.get("year").cloned().unwrap())
        .collect();
    assert_eq!(years, vec![json!(2024), json!(2019)]);

    let best = set.results().first().unwrap();
    assert_eq!(best.index(), Some("books"));
    assert_eq!(best.doc_type(), Some("book"));
    assert_eq!(best.score(), 1.0);

    Ok(())
}

#[test]
fn test_malformed_reply_is_rejected() {
    // An engine fault reply carries no hits section at all.
    let response = Arc::new(Response::new(json!({
        "error": "SearchPhaseExecutionException[Failed to execute phase [query]]",
        "status": 500
    })));

    assert!(response.has_error());

    let result = ResultSet::new(response);
    match result {
        Err(QuiverError::MalformedResponse(msg)) => {
            assert!(msg.contains("hits"), "fault should name the missing section")
        }
        other => panic!("expected a malformed-response fault, got {other:?}"),
    }
}

#[test]
fn test_repeated_traversal_matches_for_loop() -> Result<()> {
    let response = Arc::new(Response::new(json!({
        "hits": {
            "total": 2,
            "max_score": 0.6,
            "hits": [
                {"_id": "x", "_score": 0.6},
                {"_id": "y", "_score": 0.1}
            ]
        }
    })));

    let mut set = ResultSet::new(response)?;

    let mut cursor_order = Vec::new();
    while let Some(hit) = set.current() {
        cursor_order.push(hit.id().unwrap().to_string());
        let _ = set.next();
    }

    let loop_order: Vec<_> = (&set)
        .into_iter()
        .filter_map(|hit| hit.id().map(str::to_string))
        .collect();
    assert_eq!(cursor_order, loop_order);

    // A second cursor pass after rewind sees the same hits again.
    set.rewind();
    let mut second_pass = Vec::new();
    while let Some(hit) = set.current() {
        second_pass.push(hit.id().unwrap().to_string());
        let _ = set.next();
    }
    assert_eq!(cursor_order, second_pass);

    Ok(())
}
