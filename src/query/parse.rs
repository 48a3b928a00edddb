// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parsed stage: validate the request against the snapshot's schema.

use super::QueryRequest;
use crate::config::{EngineConfig, FieldConfig, ALL_FIELDS};
use crate::error::{QueryError, Result, SearchError};
use crate::fuzzy::{validate_max_distance, Fuzziness};
use crate::index::Snapshot;
use crate::tokenizer::{normalize_pattern, tokenize};
use crate::types::QueryMode;

/// Exact-hit multiplier for advanced queries that don't set one.
pub const DEFAULT_BOOST_EXACT: f64 = 2.0;

/// Leading characters an advanced query's fuzzy candidates share with the query term.
pub const ADVANCED_PREFIX_LENGTH: usize = 1;

/// One field a query runs against, with its query terms.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub field: FieldConfig,
    /// Query text tokenized the way this field was indexed, sorted and deduplicated.
    /// Empty for wildcard and suggest queries, which use the pattern instead.
    pub terms: Vec<String>,
    /// The last term in query order; advanced queries complete it as a prefix.
    pub last_term: Option<String>,
}

/// A validated query: known mode, known fields, resolved limit.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    pub(super) mode: QueryMode,
    pub(super) targets: Vec<Target>,
    /// Normalized pattern for wildcard and suggest queries.
    pub(super) pattern: String,
    pub(super) fuzziness: Fuzziness,
    /// 1.0 outside advanced mode.
    pub(super) boost_exact: f64,
    pub(super) limit: usize,
}

impl ParsedQuery {
    /// Validate `request` and tokenize its text for each target field.
    pub fn parse(request: &QueryRequest, snapshot: &Snapshot, config: &EngineConfig) -> Result<Self> {
        let targets = resolve_fields(&request.field, snapshot)?;

        let fuzziness = match (request.fuzziness, request.mode) {
            (Some(fuzziness), _) => fuzziness,
            (None, QueryMode::Advanced) => Fuzziness::Auto,
            (None, QueryMode::Fuzzy) => Fuzziness::Fixed(config.max_distance()?),
            (None, _) => Fuzziness::default(),
        };
        if let (QueryMode::Fuzzy | QueryMode::Advanced, Fuzziness::Fixed(n)) = (request.mode, fuzziness) {
            validate_max_distance(n)?;
        }

        let boost_exact = match request.mode {
            QueryMode::Advanced => validate_boost(request.boost_exact.unwrap_or(DEFAULT_BOOST_EXACT))?,
            _ => 1.0,
        };

        let limit = request.limit.unwrap_or(match request.mode {
            QueryMode::Suggest => config.default_suggest_limit,
            _ => config.default_result_limit,
        });

        let (targets, pattern) = match request.mode {
            QueryMode::Exact | QueryMode::Fuzzy | QueryMode::Advanced => {
                let targets = targets
                    .into_iter()
                    .map(|field| {
                        let mut terms = tokenize(&request.text, &field);
                        let last_term = terms.last().cloned();
                        terms.sort();
                        terms.dedup();
                        Target {
                            field,
                            terms,
                            last_term,
                        }
                    })
                    .collect();
                (targets, String::new())
            }
            QueryMode::Wildcard => {
                let pattern = normalize_pattern(&request.text);
                if pattern.is_empty() {
                    return Err(QueryError::EmptyPattern.into());
                }
                (without_terms(targets), pattern)
            }
            QueryMode::Suggest => (without_terms(targets), normalize_pattern(&request.text)),
        };

        Ok(Self {
            mode: request.mode,
            targets,
            pattern,
            fuzziness,
            boost_exact,
            limit,
        })
    }

    pub fn mode(&self) -> QueryMode {
        self.mode
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

fn without_terms(fields: Vec<FieldConfig>) -> Vec<Target> {
    fields
        .into_iter()
        .map(|field| Target {
            field,
            terms: Vec::new(),
            last_term: None,
        })
        .collect()
}

fn validate_boost(boost: f64) -> Result<f64> {
    if boost.is_finite() && boost > 0.0 {
        Ok(boost)
    } else {
        Err(SearchError::invalid_parameter(
            "boost_exact",
            format!("must be finite and > 0, got {}", boost),
        ))
    }
}

/// Field names are identifiers: letters, digits, `_`, `-`, `.`.
fn is_well_formed_field(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

fn resolve_fields(name: &str, snapshot: &Snapshot) -> Result<Vec<FieldConfig>> {
    if name == ALL_FIELDS {
        return Ok(snapshot.schema().fields.clone());
    }
    if !is_well_formed_field(name) {
        return Err(QueryError::MalformedField(name.to_string()).into());
    }
    snapshot
        .schema()
        .field(name)
        .map(|field| vec![field.clone()])
        .ok_or_else(|| QueryError::UnknownField(name.to_string()).into())
}
