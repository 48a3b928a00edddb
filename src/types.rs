// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search index.
//!
//! These types define how documents, postings and results fit together. The
//! relationships that matter:
//!
//! - **Posting**: `doc_id` must exist in the store of the snapshot that owns
//!   the posting. Postings are never shared between snapshots.
//! - **PostingList**: sorted by `doc_id`, one entry per document,
//!   `doc_freq == postings.len()`, never empty.
//! - **Document**: immutable once built. Results hand out `Arc<Document>` so a
//!   caller can keep a hit alive after the snapshot has been replaced.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Type-safe document identifier.
///
/// Prevents accidentally passing a term frequency or a position where a
/// document ID is expected. Ordered, so posting lists sort by it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct DocId(pub u64);

impl DocId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for DocId {
    fn from(id: u64) -> Self {
        DocId(id)
    }
}

impl From<DocId> for u64 {
    fn from(id: DocId) -> Self {
        id.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// A single field value of a document.
///
/// Movie records carry free text (summary), integers (release year) and lists
/// (stars, directors). Serialized untagged so the JSON looks like the source data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// The pieces of text this value contributes to the index, in order.
    ///
    /// Lists contribute each element separately so list boundaries act as
    /// token boundaries.
    pub fn texts(&self) -> Vec<String> {
        match self {
            FieldValue::Integer(n) => vec![n.to_string()],
            FieldValue::Text(s) => vec![s.clone()],
            FieldValue::List(items) => items.clone(),
        }
    }

    /// Render for display: lists are comma-joined.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Integer(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items.join(", "),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

/// A raw record as it comes out of a loader, before validation.
///
/// The id is optional here on purpose: building the index is where a record
/// without an id gets rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: Option<i64>,
    pub fields: BTreeMap<String, FieldValue>,
}

impl DocumentRecord {
    /// Create a record with an id and no fields.
    pub fn new(id: i64) -> Self {
        Self {
            id: Some(id),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter.
    pub fn with_field(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }
}

/// An immutable, validated document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub fields: BTreeMap<String, FieldValue>,
}

impl Document {
    /// Look up a field value by name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// The display title: the `name` field if present, otherwise the id.
    pub fn title(&self) -> String {
        self.field("name")
            .map(FieldValue::display)
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

// =============================================================================
// INDEX TYPES
// =============================================================================

/// One document's occurrences of a term within one field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub field: String,
    pub term_frequency: u32,
}

/// All postings for a (field, term) pair, sorted by document id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingList {
    pub postings: Vec<Posting>,
    /// Number of distinct documents containing the term.
    pub doc_freq: usize,
}

// =============================================================================
// QUERY / RESULT TYPES
// =============================================================================

/// How query text is matched against the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    Exact,
    Fuzzy,
    Wildcard,
    Suggest,
    /// Exact terms boosted, fuzzy terms, and completions of the last term.
    Advanced,
}

impl QueryMode {
    /// Convert to lowercase string representation.
    ///
    /// Matches the serde `rename_all = "lowercase"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryMode::Exact => "exact",
            QueryMode::Fuzzy => "fuzzy",
            QueryMode::Wildcard => "wildcard",
            QueryMode::Suggest => "suggest",
            QueryMode::Advanced => "advanced",
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A term that contributed to a hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedTerm {
    pub field: String,
    pub term: String,
    /// Edit distance from the query term (0 unless expanded by fuzzy matching).
    pub distance: usize,
}

/// One ranked result.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub document: Arc<Document>,
    pub score: f64,
    /// Terms that contributed to the score, in (field, term) order.
    pub matched: Vec<MatchedTerm>,
}

impl SearchHit {
    /// Shortcut for the hit's document id.
    pub fn id(&self) -> DocId {
        self.document.id
    }
}
