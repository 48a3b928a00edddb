// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Glob-style wildcard matching against the vocabulary.
//!
//! - `*` matches any run of characters, including none
//! - `?` matches exactly one character
//!
//! Matching is anchored at both ends: `para*` matches "parasite" but
//! `arasit` does not. Only a leading or trailing `*` lifts an anchor.
//!
//! The matcher is the greedy star-backtracking walk: remember the last `*`
//! seen and where in the term it started matching; on a mismatch, let that
//! star swallow one more character and retry. Linear in practice, O(n·m) worst
//! case, no recursion.

use crate::index::InvertedIndex;
use crate::tokenizer::normalize_pattern;
use std::collections::BTreeSet;

/// A normalized, pre-split wildcard pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardPattern {
    source: String,
    chars: Vec<char>,
    literal_prefix: String,
}

impl WildcardPattern {
    /// Normalize (case, diacritics) and prepare a pattern.
    pub fn new(pattern: &str) -> Self {
        let source = normalize_pattern(pattern);
        let chars: Vec<char> = source.chars().collect();
        let literal_prefix = chars
            .iter()
            .take_while(|c| !is_wildcard(**c))
            .collect();
        Self {
            source,
            chars,
            literal_prefix,
        }
    }

    /// The normalized pattern text.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Does the pattern contain `*` or `?`?
    pub fn has_wildcards(&self) -> bool {
        self.chars.iter().any(|c| is_wildcard(*c))
    }

    /// Everything before the first wildcard. Every match starts with it.
    pub fn literal_prefix(&self) -> &str {
        &self.literal_prefix
    }

    /// Does the whole term match the whole pattern?
    pub fn matches(&self, term: &str) -> bool {
        let pattern = &self.chars;
        let text: Vec<char> = term.chars().collect();

        let (mut p, mut t) = (0usize, 0usize);
        // (pattern index after the star, text index the star resumes from)
        let mut star: Option<(usize, usize)> = None;

        while t < text.len() {
            match pattern.get(p) {
                Some('*') => {
                    star = Some((p + 1, t));
                    p += 1;
                }
                Some('?') => {
                    p += 1;
                    t += 1;
                }
                Some(&c) if c == text[t] => {
                    p += 1;
                    t += 1;
                }
                _ => match star {
                    Some((sp, st)) => {
                        p = sp;
                        t = st + 1;
                        star = Some((sp, st + 1));
                    }
                    None => return false,
                },
            }
        }

        // Only trailing stars may remain
        pattern[p..].iter().all(|c| *c == '*')
    }
}

#[inline]
fn is_wildcard(c: char) -> bool {
    c == '*' || c == '?'
}

/// Vocabulary terms of `field` matching `pattern`.
///
/// Case-insensitive. A pattern without wildcards is an exact term lookup.
/// Only terms sharing the pattern's literal prefix are tested.
pub fn wildcard_candidates(index: &InvertedIndex, pattern: &str, field: &str) -> BTreeSet<String> {
    let pattern = WildcardPattern::new(pattern);
    let Some(field_index) = index.field(field) else {
        return BTreeSet::new();
    };

    if !pattern.has_wildcards() {
        return field_index
            .get(pattern.as_str())
            .map(|_| pattern.as_str().to_string())
            .into_iter()
            .collect();
    }

    field_index
        .with_prefix(pattern.literal_prefix())
        .map(|(term, _)| term)
        .filter(|term| pattern.matches(term))
        .map(str::to_string)
        .collect()
}
