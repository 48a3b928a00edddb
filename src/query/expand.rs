// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Expanded stage: turn query terms into the vocabulary terms to score.

use super::parse::{ParsedQuery, ADVANCED_PREFIX_LENGTH};
use super::score::ScoredQuery;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::fuzzy::expand_term;
use crate::index::Snapshot;
use crate::pattern::{ranked_completions, wildcard_candidates};
use crate::types::QueryMode;
use std::collections::BTreeMap;

/// One (field, term) to look up, and how far it is from what was asked.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub field: String,
    pub term: String,
    /// Edit distance of the strongest match that produced this term.
    pub distance: usize,
    /// Multiplier of that match: the exact boost for advanced exact hits, else 1.
    pub boost: f64,
    /// The field's scoring weight.
    pub weight: f64,
}

/// How much one match contributes per occurrence, before the field weight.
fn strength(distance: usize, boost: f64) -> f64 {
    boost / (1.0 + distance as f64)
}

/// The candidate set, in (field, term) order with no duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedQuery {
    pub(super) mode: QueryMode,
    pub(super) limit: usize,
    pub(super) candidates: Vec<Candidate>,
}

impl ParsedQuery {
    /// Expand every target according to the query mode.
    ///
    /// Terms that aren't in the vocabulary are kept for exact queries; their
    /// posting lists are simply empty.
    ///
    /// A term reached more than once keeps its strongest match, which for
    /// equal boosts is the smallest distance.
    pub fn expand(self, snapshot: &Snapshot, config: &EngineConfig) -> Result<ExpandedQuery> {
        let index = snapshot.index();
        // (field, term) -> (distance, boost, weight)
        let mut merged: BTreeMap<(String, String), (usize, f64, f64)> = BTreeMap::new();
        let mut add = |field: &str, term: String, distance: usize, boost: f64, weight: f64| {
            let entry = merged
                .entry((field.to_string(), term))
                .or_insert((distance, boost, weight));
            let (new, old) = (strength(distance, boost), strength(entry.0, entry.1));
            if new > old || (new == old && distance < entry.0) {
                *entry = (distance, boost, weight);
            }
        };

        for target in &self.targets {
            let field = target.field.name.as_str();
            let weight = target.field.weight;

            match self.mode {
                QueryMode::Exact => {
                    for term in &target.terms {
                        add(field, term.clone(), 0, 1.0, weight);
                    }
                }
                QueryMode::Fuzzy => {
                    for term in &target.terms {
                        let max = self.fuzziness.resolve(term)?;
                        let mut found = expand_term(index, term, field, max, config.prefix_length);
                        found.truncate(config.max_expansions);
                        for candidate in found {
                            add(field, candidate.term, candidate.distance, 1.0, weight);
                        }
                    }
                }
                QueryMode::Wildcard => {
                    for term in wildcard_candidates(index, &self.pattern, field) {
                        add(field, term, 0, 1.0, weight);
                    }
                }
                QueryMode::Suggest => {
                    if self.pattern.is_empty() {
                        continue;
                    }
                    for (term, _) in ranked_completions(index, &self.pattern, field, self.limit) {
                        add(field, term, 0, 1.0, weight);
                    }
                }
                QueryMode::Advanced => {
                    let prefix_length = config.prefix_length.max(ADVANCED_PREFIX_LENGTH);
                    for term in &target.terms {
                        add(field, term.clone(), 0, self.boost_exact, weight);

                        let max = self.fuzziness.resolve(term)?;
                        let mut found = expand_term(index, term, field, max, prefix_length);
                        found.truncate(config.max_expansions);
                        for candidate in found {
                            add(field, candidate.term, candidate.distance, 1.0, weight);
                        }
                    }
                    if let Some(last) = &target.last_term {
                        for (term, _) in ranked_completions(index, last, field, config.max_expansions) {
                            add(field, term, 0, 1.0, weight);
                        }
                    }
                }
            }
        }

        let candidates = merged
            .into_iter()
            .map(|((field, term), (distance, boost, weight))| Candidate {
                field,
                term,
                distance,
                boost,
                weight,
            })
            .collect();

        Ok(ExpandedQuery {
            mode: self.mode,
            limit: self.limit,
            candidates,
        })
    }
}

impl ExpandedQuery {
    pub fn mode(&self) -> QueryMode {
        self.mode
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Accumulate per-document scores over the candidates' postings.
    pub fn score(self, snapshot: &Snapshot) -> ScoredQuery {
        ScoredQuery::accumulate(self, snapshot.index())
    }
}
