// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scored and Ranked stages.
//!
//! # Scoring
//!
//! ```text
//! score(doc) = Σ  tf(field, term, doc) × weight(field) × boost / (1 + distance)
//!            (field, term) ∈ candidates
//! ```
//!
//! Distance is 0 outside fuzzy and advanced modes and boost is 1 except for
//! advanced exact hits, so exact, wildcard and suggest scores are plain
//! weighted term frequencies. A fuzzy hit at distance 1 counts half as much
//! as an exact one.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. Ranking is total: score descending, then doc id ascending. Two runs over
//!    the same snapshot return the same order.
//! 2. Scores are finite and > 0 for every ranked document.

use super::expand::ExpandedQuery;
use crate::error::{Result, SearchError};
use crate::index::{DocumentStore, InvertedIndex};
use crate::types::{DocId, MatchedTerm, SearchHit};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::error;

/// A document with its accumulated score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredDoc {
    pub doc_id: DocId,
    pub score: f64,
    pub matched: Vec<MatchedTerm>,
}

/// Every document touched by at least one candidate, unordered.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredQuery {
    limit: usize,
    scored: Vec<ScoredDoc>,
}

/// Scored documents in final order, truncated to the limit.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedQuery {
    ranked: Vec<ScoredDoc>,
}

/// Result order: score descending, ties by doc id ascending.
pub fn compare_scored(a: &ScoredDoc, b: &ScoredDoc) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.doc_id.cmp(&b.doc_id))
}

impl ScoredQuery {
    pub(super) fn accumulate(expanded: ExpandedQuery, index: &InvertedIndex) -> Self {
        let mut by_doc: BTreeMap<DocId, ScoredDoc> = BTreeMap::new();

        for candidate in &expanded.candidates {
            let factor = candidate.weight * candidate.boost / (1.0 + candidate.distance as f64);
            for posting in index.lookup_exact(&candidate.field, &candidate.term) {
                let entry = by_doc.entry(posting.doc_id).or_insert_with(|| ScoredDoc {
                    doc_id: posting.doc_id,
                    score: 0.0,
                    matched: Vec::new(),
                });
                entry.score += f64::from(posting.term_frequency) * factor;
                entry.matched.push(MatchedTerm {
                    field: candidate.field.clone(),
                    term: candidate.term.clone(),
                    distance: candidate.distance,
                });
            }
        }

        Self {
            limit: expanded.limit,
            scored: by_doc.into_values().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.scored.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scored.is_empty()
    }

    /// Sort into result order and keep the top `limit`.
    pub fn rank(self) -> RankedQuery {
        let mut ranked = self.scored;
        ranked.sort_by(compare_scored);
        ranked.truncate(self.limit);
        RankedQuery { ranked }
    }
}

impl RankedQuery {
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn docs(&self) -> &[ScoredDoc] {
        &self.ranked
    }

    /// Attach the stored documents.
    ///
    /// A posting whose document isn't in the store means the index and store
    /// came from different builds. That is reported, never papered over.
    pub fn materialize(self, store: &DocumentStore) -> Result<Vec<SearchHit>> {
        self.ranked
            .into_iter()
            .map(|doc| match store.get(doc.doc_id) {
                Ok(document) => Ok(SearchHit {
                    document: document.clone(),
                    score: doc.score,
                    matched: doc.matched,
                }),
                Err(_) => {
                    let (field, term) = doc
                        .matched
                        .first()
                        .map(|m| (m.field.clone(), m.term.clone()))
                        .unwrap_or_default();
                    error!(doc_id = %doc.doc_id, field = %field, term = %term, "posting references a document missing from the store");
                    Err(SearchError::InternalInconsistency {
                        doc_id: doc.doc_id,
                        field,
                        term,
                    })
                }
            })
            .collect()
    }
}
