//! Rebuild-and-swap: readers keep their snapshot, failures publish nothing.

use crate::common::{ids, movie_records, scenario_engine};
use cinedex::{DocumentRecord, IndexBuildError, SearchError};
use std::sync::Arc;
use std::thread;

#[test]
fn test_held_snapshot_survives_rebuild() {
    let engine = scenario_engine();
    let held = engine.snapshot();

    let mut records = movie_records();
    records.retain(|r| r.id != Some(1));
    engine.rebuild(records).unwrap();

    // The engine no longer has Parasite
    assert!(engine.search_exact("name", "parasite", None).unwrap().is_empty());

    // The held snapshot still answers from the old documents
    assert_eq!(held.store().len(), 2);
    assert_eq!(held.index().lookup_exact("name", "parasite").len(), 1);
}

#[test]
fn test_rejected_rebuilds_publish_nothing() {
    let engine = scenario_engine();
    let before = engine.stats();

    let duplicate = vec![
        DocumentRecord::new(1).with_field("name", "A"),
        DocumentRecord::new(1).with_field("name", "B"),
    ];
    assert!(matches!(
        engine.rebuild(duplicate),
        Err(SearchError::IndexBuild(IndexBuildError::DuplicateId { .. }))
    ));

    let negative = vec![DocumentRecord::new(-4).with_field("name", "A")];
    assert!(matches!(
        engine.rebuild(negative),
        Err(SearchError::IndexBuild(IndexBuildError::InvalidId { .. }))
    ));

    assert_eq!(engine.stats(), before);
}

#[test]
fn test_concurrent_readers_during_rebuilds() {
    let engine = Arc::new(scenario_engine());

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for _ in 0..200 {
                    let snapshot = engine.snapshot();
                    // Whatever snapshot we got, its index and store agree
                    for posting in snapshot.index().lookup_exact("name", "parasite") {
                        assert!(snapshot.store().contains(posting.doc_id));
                    }
                    let hits = engine.search_wildcard("name", "*", None).unwrap();
                    assert!(!hits.is_empty());
                }
            })
        })
        .collect();

    for round in 0..20 {
        let records = if round % 2 == 0 {
            movie_records()
        } else {
            crate::common::scenario_records()
        };
        engine.rebuild(records).unwrap();
    }

    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(engine.stats().generation, 21);
    assert_eq!(ids(&engine.search_exact("name", "parasite", None).unwrap()), vec![1]);
}
