// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Immutable snapshots and the cell they are published through.
//!
//! A snapshot is built completely off to the side, then published with a
//! single pointer swap. Queries clone the `Arc` once on entry and never touch
//! the cell again, so a rebuild never tears a query in half: the old snapshot
//! stays alive until its last reader drops it.

use crate::config::Schema;
use crate::error::IndexBuildError;
use crate::index::inverted::{IndexStats, InvertedIndex};
use crate::index::store::DocumentStore;
use crate::types::DocumentRecord;
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

/// A fully built index together with the documents it points into.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    generation: u64,
    schema: Schema,
    store: DocumentStore,
    index: InvertedIndex,
    fingerprint: u32,
}

impl Snapshot {
    /// Validate records and build the index.
    ///
    /// Nothing is published here; the caller decides what to do with the result.
    pub fn build(records: Vec<DocumentRecord>, schema: Schema) -> Result<Self, IndexBuildError> {
        schema.validate()?;
        let store = DocumentStore::from_records(records, &schema)?;
        let index = InvertedIndex::build(&store, &schema);
        debug_assert!(index.check_well_formed(&store));
        let fingerprint = index.fingerprint();
        Ok(Self {
            generation: 0,
            schema,
            store,
            index,
            fingerprint,
        })
    }

    /// A snapshot with no documents.
    pub fn empty(schema: Schema) -> Self {
        let store = DocumentStore::default();
        let index = InvertedIndex::build(&store, &schema);
        let fingerprint = index.fingerprint();
        Self {
            generation: 0,
            schema,
            store,
            index,
            fingerprint,
        }
    }

    pub(crate) fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    /// Position in the engine's publish sequence (0 for the initial snapshot).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// CRC32 of the index content; equal for equal inputs.
    pub fn fingerprint(&self) -> u32 {
        self.fingerprint
    }

    /// Summary for logs and the CLI.
    pub fn info(&self) -> SnapshotInfo {
        SnapshotInfo {
            generation: self.generation,
            fingerprint: format!("{:08x}", self.fingerprint),
            stats: self.index.stats(),
        }
    }
}

/// What got published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotInfo {
    pub generation: u64,
    pub fingerprint: String,
    pub stats: IndexStats,
}

/// Holder for the currently published snapshot.
///
/// The lock only guards the pointer: readers hold it for one `Arc::clone`,
/// the publisher for one assignment.
#[derive(Debug)]
pub struct SnapshotCell {
    current: RwLock<Arc<Snapshot>>,
}

impl SnapshotCell {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// The snapshot queries should run against right now.
    pub fn load(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current.read())
    }

    /// Replace the published snapshot, returning the one it replaced.
    ///
    /// The new snapshot's generation is one past the old one's.
    pub fn publish(&self, snapshot: Snapshot) -> (Arc<Snapshot>, Arc<Snapshot>) {
        let mut guard = self.current.write();
        let next = Arc::new(snapshot.with_generation(guard.generation + 1));
        let previous = std::mem::replace(&mut *guard, Arc::clone(&next));
        (previous, next)
    }
}
