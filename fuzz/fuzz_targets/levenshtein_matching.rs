// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bounded Levenshtein.
//!
//! Checks the early exits never change an answer: whatever the bound, a
//! returned distance equals the unbounded one, and `None` means the unbounded
//! distance really is over the bound.

#![no_main]

use arbitrary::Arbitrary;
use cinedex::bounded_levenshtein;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    target: String,
    max: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let query: String = input.query.chars().take(40).collect();
    let target: String = input.target.chars().take(40).collect();
    let max = usize::from(input.max % 6);

    let unbounded = bounded_levenshtein(&query, &target, usize::MAX)
        .expect("unbounded distance always exists");

    match bounded_levenshtein(&query, &target, max) {
        Some(d) => assert_eq!(d, unbounded, "query='{}' target='{}'", query, target),
        None => assert!(unbounded > max, "query='{}' target='{}'", query, target),
    }

    // Length difference is a lower bound
    let len_diff = query.chars().count().abs_diff(target.chars().count());
    assert!(len_diff <= unbounded);

    // Symmetric, and zero only for equal strings
    assert_eq!(bounded_levenshtein(&target, &query, usize::MAX), Some(unbounded));
    assert_eq!(unbounded == 0, query == target);
});
