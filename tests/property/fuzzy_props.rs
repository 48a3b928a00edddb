//! Edit-distance property tests, differential against `strsim`.

use crate::common::name_records;
use crate::oracles::{corpus_strategy, oracle_levenshtein, word_strategy};
use cinedex::config::FieldConfig;
use cinedex::{bounded_levenshtein, fuzzy_candidates, Schema, Snapshot};
use proptest::prelude::*;

fn build(corpus: &[String]) -> Snapshot {
    let names: Vec<&str> = corpus.iter().map(String::as_str).collect();
    Snapshot::build(name_records(&names), Schema::new(vec![FieldConfig::text("name")])).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: bounded distance agrees with the oracle wherever it answers.
    #[test]
    fn prop_bounded_matches_oracle(a in word_strategy(), b in word_strategy(), max in 0usize..5) {
        let expected = oracle_levenshtein(&a, &b);
        match bounded_levenshtein(&a, &b, max) {
            Some(d) => prop_assert_eq!(d, expected),
            None => prop_assert!(expected > max, "{} vs {}: oracle {} <= max {}", a, b, expected, max),
        }
    }

    /// Property: distance is symmetric.
    #[test]
    fn prop_symmetric(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(bounded_levenshtein(&a, &b, 10), bounded_levenshtein(&b, &a, 10));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: candidates are exactly the vocabulary terms within the bound.
    #[test]
    fn prop_candidates_complete_and_sound(
        corpus in corpus_strategy(),
        query in word_strategy(),
        max in 0i32..4,
    ) {
        let snap = build(&corpus);
        let candidates = fuzzy_candidates(snap.index(), &query, "name", max).unwrap();

        let mut expected: Vec<(String, usize)> = snap
            .index()
            .vocabulary("name")
            .map(|t| (t.to_string(), oracle_levenshtein(&query, t)))
            .filter(|(_, d)| *d <= max as usize)
            .collect();
        expected.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

        prop_assert_eq!(candidates, expected);
    }

    /// Property: distance 0 returns the term iff it is in the vocabulary.
    #[test]
    fn prop_distance_zero_is_exact(corpus in corpus_strategy(), query in word_strategy()) {
        let snap = build(&corpus);
        let candidates = fuzzy_candidates(snap.index(), &query, "name", 0).unwrap();
        let present = snap.index().vocabulary("name").any(|t| t == query);
        if present {
            prop_assert_eq!(candidates, vec![(query.clone(), 0)]);
        } else {
            prop_assert!(candidates.is_empty());
        }
    }

    /// Property: any negative bound is rejected.
    #[test]
    fn prop_negative_rejected(corpus in corpus_strategy(), query in word_strategy(), max in -100i32..0) {
        let snap = build(&corpus);
        prop_assert!(fuzzy_candidates(snap.index(), &query, "name", max).is_err());
    }
}
