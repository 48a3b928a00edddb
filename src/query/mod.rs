// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query evaluation: where the rubber meets the road.
//!
//! Every query walks the same stages:
//!
//! ```text
//! Parsed ──▶ Expanded ──▶ Scored ──▶ Ranked ──▶ Done
//!   │
//!   └──▶ Failed (QueryError / InvalidParameter)
//! ```
//!
//! Each stage is its own type and can only be produced from the one before
//! it, so a query can't be scored before it has been expanded. Parsing is the
//! only stage that rejects input; after that an empty candidate set simply
//! flows through to an empty result.
//!
//! All stages borrow the snapshot read-only. Dropping a stage value abandons
//! the query with nothing to undo.

mod expand;
mod parse;
mod score;

pub use expand::{Candidate, ExpandedQuery};
pub use parse::{ParsedQuery, Target, ADVANCED_PREFIX_LENGTH, DEFAULT_BOOST_EXACT};
pub use score::{compare_scored, RankedQuery, ScoredDoc, ScoredQuery};

use crate::config::EngineConfig;
use crate::error::{QueryError, Result};
use crate::fuzzy::Fuzziness;
use crate::index::Snapshot;
use crate::types::{QueryMode, SearchHit};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

impl FromStr for QueryMode {
    type Err = QueryError;

    fn from_str(s: &str) -> std::result::Result<Self, QueryError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(QueryMode::Exact),
            "fuzzy" => Ok(QueryMode::Fuzzy),
            "wildcard" => Ok(QueryMode::Wildcard),
            "suggest" => Ok(QueryMode::Suggest),
            "advanced" => Ok(QueryMode::Advanced),
            _ => Err(QueryError::UnknownMode(s.to_string())),
        }
    }
}

/// Where a query is in its lifecycle. Used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStage {
    Parsed,
    Expanded,
    Scored,
    Ranked,
    Done,
    Failed,
}

impl fmt::Display for QueryStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QueryStage::Parsed => "parsed",
            QueryStage::Expanded => "expanded",
            QueryStage::Scored => "scored",
            QueryStage::Ranked => "ranked",
            QueryStage::Done => "done",
            QueryStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// A query as the caller phrases it.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub mode: QueryMode,
    /// Field name, or `*` for every indexed field.
    pub field: String,
    /// Query text, wildcard pattern or suggestion prefix depending on mode.
    pub text: String,
    /// Only used by fuzzy and advanced queries; engine default when `None`.
    pub fuzziness: Option<Fuzziness>,
    /// Multiplier for exact term hits in advanced queries; [`DEFAULT_BOOST_EXACT`] when `None`.
    pub boost_exact: Option<f64>,
    /// Engine default when `None`.
    pub limit: Option<usize>,
}

impl QueryRequest {
    pub fn new(mode: QueryMode, field: &str, text: &str) -> Self {
        Self {
            mode,
            field: field.to_string(),
            text: text.to_string(),
            fuzziness: None,
            boost_exact: None,
            limit: None,
        }
    }

    /// Build a request from an untyped mode name, e.g. a query-string parameter.
    pub fn parse_mode(mode: &str, field: &str, text: &str) -> Result<Self> {
        let mode = mode.parse::<QueryMode>()?;
        Ok(Self::new(mode, field, text))
    }

    pub fn exact(field: &str, text: &str) -> Self {
        Self::new(QueryMode::Exact, field, text)
    }

    pub fn fuzzy(field: &str, text: &str) -> Self {
        Self::new(QueryMode::Fuzzy, field, text)
    }

    pub fn wildcard(field: &str, pattern: &str) -> Self {
        Self::new(QueryMode::Wildcard, field, pattern)
    }

    pub fn suggest(field: &str, prefix: &str) -> Self {
        Self::new(QueryMode::Suggest, field, prefix)
    }

    /// Exact, fuzzy and prefix matching combined; the strongest match per term counts.
    pub fn advanced(field: &str, text: &str) -> Self {
        Self::new(QueryMode::Advanced, field, text)
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_fuzziness(mut self, fuzziness: Fuzziness) -> Self {
        self.fuzziness = Some(fuzziness);
        self
    }

    pub fn with_boost_exact(mut self, boost: f64) -> Self {
        self.boost_exact = Some(boost);
        self
    }
}

/// Run a query against one snapshot, start to finish.
pub fn execute(
    snapshot: &Snapshot,
    config: &EngineConfig,
    request: &QueryRequest,
) -> Result<Vec<SearchHit>> {
    let parsed = match ParsedQuery::parse(request, snapshot, config) {
        Ok(parsed) => parsed,
        Err(e) => {
            debug!(stage = %QueryStage::Failed, mode = %request.mode, field = %request.field, error = %e, "query rejected");
            return Err(e);
        }
    };
    debug!(stage = %QueryStage::Parsed, mode = %parsed.mode(), targets = parsed.targets().len(), limit = parsed.limit());

    if parsed.limit() == 0 {
        debug!(stage = %QueryStage::Done, hits = 0, "zero limit");
        return Ok(Vec::new());
    }

    let expanded = parsed.expand(snapshot, config)?;
    debug!(stage = %QueryStage::Expanded, candidates = expanded.candidates().len());
    if expanded.is_empty() {
        debug!(stage = %QueryStage::Done, hits = 0, "no candidate terms");
        return Ok(Vec::new());
    }

    let scored = expanded.score(snapshot);
    debug!(stage = %QueryStage::Scored, documents = scored.len());

    let ranked = scored.rank();
    debug!(stage = %QueryStage::Ranked, kept = ranked.len());

    let hits = ranked.materialize(snapshot.store())?;
    debug!(stage = %QueryStage::Done, hits = hits.len());
    Ok(hits)
}
