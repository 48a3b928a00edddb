// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix completion for suggestions.

use crate::error::{Result, SearchError};
use crate::index::InvertedIndex;
use crate::tokenizer::normalize_pattern;

/// Default number of suggestions.
pub const DEFAULT_SUGGEST_LIMIT: usize = 10;

/// Vocabulary terms of `field` starting with `prefix`, most common first.
///
/// Ordered by document frequency descending, then term ascending, and
/// truncated to `limit`. `limit == 0` is rejected.
pub fn prefix_candidates(
    index: &InvertedIndex,
    prefix: &str,
    field: &str,
    limit: usize,
) -> Result<Vec<String>> {
    if limit == 0 {
        return Err(SearchError::invalid_parameter("limit", "must be > 0"));
    }
    Ok(ranked_completions(index, prefix, field, limit)
        .into_iter()
        .map(|(term, _)| term)
        .collect())
}

/// Completions with their document frequencies.
pub(crate) fn ranked_completions(
    index: &InvertedIndex,
    prefix: &str,
    field: &str,
    limit: usize,
) -> Vec<(String, usize)> {
    let prefix = normalize_pattern(prefix);
    let Some(field_index) = index.field(field) else {
        return Vec::new();
    };

    let mut completions: Vec<(String, usize)> = field_index
        .with_prefix(&prefix)
        .map(|(term, list)| (term.to_string(), list.doc_freq))
        .collect();

    completions.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    completions.truncate(limit);
    completions
}
