//! End-to-end over the bundled Best Picture dataset.

use cinedex::{load_documents, EngineConfig, QueryRequest, Schema, SearchEngine};
use std::path::PathBuf;

fn dataset() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/best_picture.json")
}

fn engine() -> SearchEngine {
    let records = load_documents(&dataset(), false).unwrap();
    SearchEngine::with_documents(records, Schema::movies(), EngineConfig::default()).unwrap()
}

fn titles(hits: &[cinedex::SearchHit]) -> Vec<String> {
    hits.iter().map(|h| h.document.title()).collect()
}

#[test]
fn test_dataset_loads() {
    let engine = engine();
    assert_eq!(engine.stats().stats.documents, 8);
    assert_eq!(engine.documents(0, 3).len(), 3);
    assert_eq!(engine.documents(6, 10).len(), 2);
}

#[test]
fn test_search_across_fields() {
    let engine = engine();
    // Michael Keaton stars in two winners
    let hits = engine.search_exact("stars", "keaton", None).unwrap();
    assert_eq!(titles(&hits).len(), 2);

    // Only two titles end in "light"; equal scores fall back to id order
    let hits = engine.search_wildcard("*", "*light", None).unwrap();
    let top: Vec<String> = titles(&hits).into_iter().take(2).collect();
    assert_eq!(top, vec!["Moonlight", "Spotlight"]);
}

#[test]
fn test_typo_tolerance() {
    let engine = engine();
    let hits = engine.search_fuzzy("name", "gladitor", 2, None).unwrap();
    assert_eq!(titles(&hits), vec!["Gladiator"]);

    let hits = engine.search_fuzzy("directors", "inarritu", 0, None).unwrap();
    assert_eq!(titles(&hits).len(), 1);
}

#[test]
fn test_oscar_year_lookup() {
    let engine = engine();
    let hits = engine.search_exact("oscar", "2017", None).unwrap();
    assert_eq!(titles(&hits), vec!["Moonlight"]);
}

#[test]
fn test_genre_facets() {
    let engine = engine();
    let genres = engine.facets("genre", 3).unwrap();
    assert_eq!(genres[0], ("Drama".to_string(), 8));
    assert_eq!(genres[1], ("Comedy".to_string(), 3));
}

#[test]
fn test_suggest_from_name() {
    let engine = engine();
    let terms = engine.suggest_terms("name", "g", Some(5)).unwrap();
    assert_eq!(terms, vec!["gladiator", "green"]);

    let request = QueryRequest::suggest("name", "moon");
    let hits = engine.execute(&request).unwrap();
    assert_eq!(titles(&hits), vec!["Moonlight"]);
}
