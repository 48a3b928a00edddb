// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine facade.
//!
//! Owns the published snapshot and the engine defaults. Every query takes the
//! current snapshot once on entry and runs entirely against it; a concurrent
//! [`SearchEngine::rebuild`] only affects queries that start after it publishes.
//!
//! ```text
//!   records ──▶ Snapshot::build ──▶ SnapshotCell::publish
//!                                          │
//!   query ──▶ SnapshotCell::load ──▶ query::execute ──▶ Vec<SearchHit>
//! ```

use crate::config::{EngineConfig, Schema};
use crate::error::{QueryError, Result, SearchError};
use crate::fuzzy::Fuzziness;
use crate::index::{Snapshot, SnapshotCell, SnapshotInfo};
use crate::pattern::ranked_completions;
use crate::query::{self, ParsedQuery, QueryRequest};
use crate::types::{DocId, Document, DocumentRecord, SearchHit};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// In-memory search over one document set at a time.
#[derive(Debug)]
pub struct SearchEngine {
    cell: SnapshotCell,
    schema: Schema,
    config: EngineConfig,
}

impl SearchEngine {
    /// An engine with no documents.
    pub fn new(schema: Schema, config: EngineConfig) -> Self {
        Self {
            cell: SnapshotCell::new(Snapshot::empty(schema.clone())),
            schema,
            config,
        }
    }

    /// An engine with `records` already indexed.
    pub fn with_documents(
        records: Vec<DocumentRecord>,
        schema: Schema,
        config: EngineConfig,
    ) -> Result<Self> {
        let engine = Self::new(schema, config);
        engine.rebuild(records)?;
        Ok(engine)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build a new snapshot from `records` and publish it.
    ///
    /// On failure nothing is published and queries keep seeing the previous
    /// snapshot.
    pub fn rebuild(&self, records: Vec<DocumentRecord>) -> Result<SnapshotInfo> {
        let count = records.len();
        let snapshot = match Snapshot::build(records, self.schema.clone()) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(records = count, error = %e, "rebuild rejected, keeping current snapshot");
                return Err(e.into());
            }
        };

        let (previous, next) = self.cell.publish(snapshot);
        let published = next.info();
        info!(
            generation = published.generation,
            fingerprint = %published.fingerprint,
            documents = published.stats.documents,
            previous_generation = previous.generation(),
            "snapshot published"
        );
        Ok(published)
    }

    /// The currently published snapshot.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.cell.load()
    }

    /// Run any query.
    pub fn execute(&self, request: &QueryRequest) -> Result<Vec<SearchHit>> {
        let snapshot = self.cell.load();
        query::execute(&snapshot, &self.config, request)
    }

    /// Documents containing the query's terms in `field`.
    pub fn search_exact(&self, field: &str, text: &str, limit: Option<usize>) -> Result<Vec<SearchHit>> {
        let mut request = QueryRequest::exact(field, text);
        request.limit = limit;
        self.execute(&request)
    }

    /// Documents containing terms within `max_distance` edits of the query's terms.
    pub fn search_fuzzy(
        &self,
        field: &str,
        text: &str,
        max_distance: i32,
        limit: Option<usize>,
    ) -> Result<Vec<SearchHit>> {
        let mut request =
            QueryRequest::fuzzy(field, text).with_fuzziness(Fuzziness::Fixed(max_distance));
        request.limit = limit;
        self.execute(&request)
    }

    /// Exact, fuzzy and prefix matching in one query.
    ///
    /// Each query term matches exactly with its score multiplied by
    /// `boost_exact`, and fuzzily within `fuzziness` with the first character
    /// pinned. The last query term also matches as a prefix. A vocabulary term
    /// reached several ways counts once, through its strongest match.
    pub fn search_advanced(
        &self,
        field: &str,
        text: &str,
        fuzziness: Fuzziness,
        boost_exact: f64,
        limit: Option<usize>,
    ) -> Result<Vec<SearchHit>> {
        let mut request = QueryRequest::advanced(field, text)
            .with_fuzziness(fuzziness)
            .with_boost_exact(boost_exact);
        request.limit = limit;
        self.execute(&request)
    }

    /// Documents containing terms that match a `*`/`?` pattern.
    pub fn search_wildcard(
        &self,
        field: &str,
        pattern: &str,
        limit: Option<usize>,
    ) -> Result<Vec<SearchHit>> {
        let mut request = QueryRequest::wildcard(field, pattern);
        request.limit = limit;
        self.execute(&request)
    }

    /// Documents containing the most common completions of `prefix`.
    pub fn suggest(&self, field: &str, prefix: &str, limit: Option<usize>) -> Result<Vec<SearchHit>> {
        let mut request = QueryRequest::suggest(field, prefix);
        request.limit = limit;
        self.execute(&request)
    }

    /// The completions themselves, most common first.
    ///
    /// Across several fields a term's count is its largest per-field document
    /// frequency.
    pub fn suggest_terms(&self, field: &str, prefix: &str, limit: Option<usize>) -> Result<Vec<String>> {
        let snapshot = self.cell.load();
        let mut request = QueryRequest::suggest(field, prefix);
        request.limit = limit;
        let parsed = ParsedQuery::parse(&request, &snapshot, &self.config)?;
        if parsed.limit() == 0 || parsed.pattern().is_empty() {
            return Ok(Vec::new());
        }

        let mut merged: BTreeMap<String, usize> = BTreeMap::new();
        for target in parsed.targets() {
            for (term, df) in
                ranked_completions(snapshot.index(), parsed.pattern(), &target.field.name, parsed.limit())
            {
                let entry = merged.entry(term).or_insert(0);
                *entry = (*entry).max(df);
            }
        }

        let mut terms: Vec<(String, usize)> = merged.into_iter().collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        terms.truncate(parsed.limit());
        Ok(terms.into_iter().map(|(term, _)| term).collect())
    }

    /// One page of documents in id order.
    pub fn documents(&self, offset: usize, limit: usize) -> Vec<Arc<Document>> {
        self.cell.load().store().page(offset, limit)
    }

    pub fn document(&self, id: DocId) -> Result<Arc<Document>> {
        self.cell.load().store().get(id).cloned()
    }

    /// Distinct values of a declared field with document counts.
    pub fn facets(&self, field: &str, size: usize) -> Result<Vec<(String, usize)>> {
        if size == 0 {
            return Err(SearchError::invalid_parameter("size", "must be > 0"));
        }
        if self.schema.field(field).is_none() {
            return Err(QueryError::UnknownField(field.to_string()).into());
        }
        Ok(self.cell.load().store().value_counts(field, size))
    }

    /// Counts and fingerprint of the published snapshot.
    pub fn stats(&self) -> SnapshotInfo {
        self.cell.load().info()
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(Schema::default(), EngineConfig::default())
    }
}
