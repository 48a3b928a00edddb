// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for wildcard matching.
//!
//! The backtracking matcher must never panic, must agree with itself on the
//! literal prefix, and must treat wildcard-free patterns as plain equality.

#![no_main]

use arbitrary::Arbitrary;
use cinedex::{normalize, WildcardPattern};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct PatternInput {
    pattern: String,
    term: String,
}

fuzz_target!(|input: PatternInput| {
    let pattern_text: String = input.pattern.chars().take(30).collect();
    let term: String = normalize(&input.term.chars().take(60).collect::<String>());

    let pattern = WildcardPattern::new(&pattern_text);
    let matched = pattern.matches(&term);

    // Every match starts with the literal prefix
    if matched {
        assert!(
            term.starts_with(pattern.literal_prefix()),
            "pattern='{}' term='{}'",
            pattern.as_str(),
            term
        );
    }

    if !pattern.has_wildcards() {
        assert_eq!(matched, pattern.as_str() == term);
    }

    // A lone star matches anything
    assert!(WildcardPattern::new("*").matches(&term));
});
