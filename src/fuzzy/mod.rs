// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! A query term expands to every vocabulary term within `max_distance` edits.
//! The vocabulary of a movie catalogue is a few thousand terms, so a bounded
//! DP against each is fast enough; the early exits in `levenshtein` reject
//! most terms after a row or two.

mod levenshtein;

pub use levenshtein::{bounded_levenshtein, levenshtein_within};

use crate::error::{Result, SearchError};
use crate::index::InvertedIndex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Default max edit distance for fuzzy queries.
pub const DEFAULT_MAX_DISTANCE: u32 = 2;

/// A vocabulary term close to the query term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyCandidate {
    pub term: String,
    pub distance: usize,
    pub doc_freq: usize,
}

/// Candidate order: distance ascending, then term ascending, then doc frequency descending.
fn compare_candidates(a: &FuzzyCandidate, b: &FuzzyCandidate) -> Ordering {
    a.distance
        .cmp(&b.distance)
        .then_with(|| a.term.cmp(&b.term))
        .then_with(|| b.doc_freq.cmp(&a.doc_freq))
}

/// Check a caller-supplied max distance.
pub fn validate_max_distance(max_distance: i32) -> Result<usize> {
    usize::try_from(max_distance).map_err(|_| {
        SearchError::invalid_parameter(
            "max_distance",
            format!("must be >= 0, got {}", max_distance),
        )
    })
}

/// Vocabulary terms of `field` within `max_distance` edits of `query_term`.
///
/// `query_term` must already be normalized (see [`crate::tokenizer`]).
/// Ordered by distance, ties by term, then by descending document frequency.
/// With `max_distance == 0` this is the term itself if it is in the
/// vocabulary, and nothing otherwise.
pub fn fuzzy_candidates(
    index: &InvertedIndex,
    query_term: &str,
    field: &str,
    max_distance: i32,
) -> Result<Vec<(String, usize)>> {
    let max = validate_max_distance(max_distance)?;
    Ok(expand_term(index, query_term, field, max, 0)
        .into_iter()
        .map(|c| (c.term, c.distance))
        .collect())
}

/// Candidate search with the optional exact-prefix requirement.
///
/// With `prefix_length > 0`, only terms sharing the query's first
/// `prefix_length` characters are considered, which lets the scan start at
/// the prefix in the ordered vocabulary instead of at the beginning.
pub(crate) fn expand_term(
    index: &InvertedIndex,
    query_term: &str,
    field: &str,
    max: usize,
    prefix_length: usize,
) -> Vec<FuzzyCandidate> {
    let Some(field_index) = index.field(field) else {
        return Vec::new();
    };

    let prefix: String = query_term.chars().take(prefix_length).collect();
    let mut candidates: Vec<FuzzyCandidate> = field_index
        .with_prefix(&prefix)
        .filter_map(|(term, list)| {
            bounded_levenshtein(query_term, term, max).map(|distance| FuzzyCandidate {
                term: term.to_string(),
                distance,
                doc_freq: list.doc_freq,
            })
        })
        .collect();

    candidates.sort_by(compare_candidates);
    candidates
}

/// How many edits a fuzzy query tolerates.
///
/// `Auto` scales with the query term's length: 0 edits for 1-2 characters,
/// 1 for 3-5, 2 beyond that. Short terms with generous budgets match
/// almost anything, which is what `Auto` avoids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fuzziness {
    Auto,
    Fixed(i32),
}

impl Default for Fuzziness {
    fn default() -> Self {
        Fuzziness::Fixed(DEFAULT_MAX_DISTANCE as i32)
    }
}

impl Fuzziness {
    /// Max distance to use for one query term.
    pub fn resolve(self, term: &str) -> Result<usize> {
        match self {
            Fuzziness::Fixed(n) => validate_max_distance(n),
            Fuzziness::Auto => Ok(match term.chars().count() {
                0..=2 => 0,
                3..=5 => 1,
                _ => 2,
            }),
        }
    }
}

impl FromStr for Fuzziness {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Fuzziness::Auto);
        }
        s.parse::<i32>().map(Fuzziness::Fixed).map_err(|_| {
            SearchError::invalid_parameter(
                "fuzziness",
                format!("expected AUTO or an integer, got '{}'", s),
            )
        })
    }
}

impl fmt::Display for Fuzziness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fuzziness::Auto => f.write_str("AUTO"),
            Fuzziness::Fixed(n) => write!(f, "{}", n),
        }
    }
}
