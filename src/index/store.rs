// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document store: id → original record.
//!
//! Also the place where raw records get validated. A record that makes it in
//! here has a non-negative, unique id and every required field.

use crate::config::Schema;
use crate::error::{IndexBuildError, Result, SearchError};
use crate::types::{DocId, Document, DocumentRecord};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Immutable id → document map, iterated in id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentStore {
    docs: BTreeMap<DocId, Arc<Document>>,
}

impl DocumentStore {
    /// Validate raw records and take ownership of them.
    ///
    /// Fails on the first record without an id, with a negative id, with an id
    /// already seen, or missing a field the schema marks required.
    pub fn from_records(
        records: Vec<DocumentRecord>,
        schema: &Schema,
    ) -> std::result::Result<Self, IndexBuildError> {
        let required: Vec<&str> = schema
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
            .collect();

        let mut docs = BTreeMap::new();
        for (position, record) in records.into_iter().enumerate() {
            let raw = record.id.ok_or(IndexBuildError::MissingId { position })?;
            let id = u64::try_from(raw)
                .map(DocId)
                .map_err(|_| IndexBuildError::InvalidId { position, id: raw })?;

            if let Some(missing) = required.iter().find(|f| !record.fields.contains_key(**f)) {
                return Err(IndexBuildError::MissingField {
                    id,
                    field: (*missing).to_string(),
                });
            }

            let doc = Document {
                id,
                fields: record.fields,
            };
            if docs.insert(id, Arc::new(doc)).is_some() {
                return Err(IndexBuildError::DuplicateId { id });
            }
        }

        Ok(Self { docs })
    }

    /// Fetch a document. `NotFound` if absent.
    pub fn get(&self, id: DocId) -> Result<&Arc<Document>> {
        self.docs.get(&id).ok_or(SearchError::NotFound(id))
    }

    pub fn contains(&self, id: DocId) -> bool {
        self.docs.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// All documents in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Document>> {
        self.docs.values()
    }

    /// One page of documents in id order.
    pub fn page(&self, offset: usize, limit: usize) -> Vec<Arc<Document>> {
        self.docs.values().skip(offset).take(limit).cloned().collect()
    }

    /// Distinct raw values of a field with the number of documents holding each.
    ///
    /// List values count per element. Sorted by count descending, then value
    /// ascending, truncated to `size`.
    pub fn value_counts(&self, field: &str, size: usize) -> Vec<(String, usize)> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for doc in self.docs.values() {
            let Some(value) = doc.field(field) else {
                continue;
            };
            let mut values = value.texts();
            values.sort();
            values.dedup();
            for v in values {
                let v = v.trim().to_string();
                if !v.is_empty() {
                    *counts.entry(v).or_insert(0) += 1;
                }
            }
        }
        let mut counts: Vec<(String, usize)> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts.truncate(size);
        counts
    }
}
