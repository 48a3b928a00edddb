//! Same input, same output: builds and queries.

use crate::common::{ids, movie_records, movie_snapshot};
use cinedex::{EngineConfig, QueryRequest, Schema, SearchEngine, Snapshot};

#[test]
fn test_build_is_deterministic() {
    let a = movie_snapshot();
    let b = movie_snapshot();
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_eq!(a.index(), b.index());
}

#[test]
fn test_build_ignores_record_order() {
    let forward = movie_snapshot();
    let mut records = movie_records();
    records.reverse();
    let reversed = Snapshot::build(records, Schema::movies()).unwrap();
    assert_eq!(forward.fingerprint(), reversed.fingerprint());
    assert_eq!(forward.index(), reversed.index());
}

#[test]
fn test_repeated_queries_agree() {
    let engine =
        SearchEngine::with_documents(movie_records(), Schema::movies(), EngineConfig::default())
            .unwrap();
    let requests = [
        QueryRequest::exact("*", "drama"),
        QueryRequest::fuzzy("*", "famly"),
        QueryRequest::wildcard("*", "*o*"),
        QueryRequest::suggest("*", "s"),
    ];
    for request in &requests {
        let first = engine.execute(request).unwrap();
        for _ in 0..5 {
            let again = engine.execute(request).unwrap();
            assert_eq!(ids(&first), ids(&again), "{:?}", request);
            let scores: Vec<f64> = again.iter().map(|h| h.score).collect();
            let expected: Vec<f64> = first.iter().map(|h| h.score).collect();
            assert_eq!(scores, expected);
        }
    }
}

#[test]
fn test_rebuild_with_same_input_keeps_fingerprint() {
    let engine =
        SearchEngine::with_documents(movie_records(), Schema::movies(), EngineConfig::default())
            .unwrap();
    let first = engine.stats();
    let second = engine.rebuild(movie_records()).unwrap();
    assert_eq!(first.fingerprint, second.fingerprint);
    assert_eq!(second.generation, first.generation + 1);
}
