//! Inverted index property tests.
//!
//! - Every term of every document is in the index and points back to it
//! - Posting lists are sorted by doc id, doc_freq matches their length
//! - Building twice gives the same index

use crate::common::name_records;
use crate::oracles::{corpus_strategy, oracle_vocabulary};
use cinedex::config::FieldConfig;
use cinedex::{tokenize, DocId, Schema, Snapshot};
use proptest::prelude::*;

fn build(corpus: &[String]) -> Snapshot {
    let names: Vec<&str> = corpus.iter().map(String::as_str).collect();
    Snapshot::build(name_records(&names), Schema::new(vec![FieldConfig::text("name")])).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: every token of every document has a posting for that document.
    #[test]
    fn prop_index_complete(corpus in corpus_strategy()) {
        let snap = build(&corpus);
        let field = FieldConfig::text("name");
        for (i, text) in corpus.iter().enumerate() {
            let id = DocId(i as u64 + 1);
            for term in tokenize(text, &field) {
                let postings = snap.index().lookup_exact("name", &term);
                prop_assert!(
                    postings.iter().any(|p| p.doc_id == id),
                    "term '{}' of doc {} missing", term, id
                );
            }
        }
    }

    /// Property: the vocabulary is exactly the set of corpus words.
    #[test]
    fn prop_vocabulary_matches_corpus(corpus in corpus_strategy()) {
        let snap = build(&corpus);
        let vocabulary: Vec<String> = snap.index().vocabulary("name").map(str::to_string).collect();
        prop_assert_eq!(vocabulary, oracle_vocabulary(&corpus));
    }

    /// Property: posting lists are sorted, non-empty and doc_freq is their length.
    #[test]
    fn prop_postings_well_formed(corpus in corpus_strategy()) {
        let snap = build(&corpus);
        let field = snap.index().field("name").unwrap();
        for (term, list) in field.iter() {
            prop_assert!(!list.postings.is_empty(), "empty list for '{}'", term);
            prop_assert_eq!(list.doc_freq, list.postings.len());
            for pair in list.postings.windows(2) {
                prop_assert!(pair[0].doc_id < pair[1].doc_id);
            }
            for posting in &list.postings {
                prop_assert!(snap.store().contains(posting.doc_id));
                prop_assert!(posting.term_frequency >= 1);
            }
        }
    }

    /// Property: building twice from the same input gives equal indexes.
    #[test]
    fn prop_build_deterministic(corpus in corpus_strategy()) {
        let a = build(&corpus);
        let b = build(&corpus);
        prop_assert_eq!(a.fingerprint(), b.fingerprint());
        prop_assert_eq!(a.index(), b.index());
    }
}
