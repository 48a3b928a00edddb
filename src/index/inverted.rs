// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction and lookup.
//!
//! One ordered vocabulary per field, each term owning a posting list. The
//! vocabulary is a `BTreeMap` rather than a hash map: fuzzy and wildcard
//! matching walk it, prefix suggestions range-scan it, and both need a stable
//! iteration order for results to be reproducible.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTING_LIST_SORTED**: each posting list is sorted by doc_id, one posting per doc
//! 2. **DOC_FREQ_CORRECT**: doc_freq equals the number of postings
//! 3. **NON_EMPTY**: every term has at least one posting
//! 4. **POSTING_RESOLVES**: every posting's doc_id exists in the snapshot's store

use crate::config::Schema;
use crate::index::store::DocumentStore;
use crate::tokenizer::tokenize;
use crate::types::{DocId, Document, Posting, PostingList};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use std::sync::Arc;

/// Vocabulary and posting lists for a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldIndex {
    terms: BTreeMap<String, PostingList>,
}

impl FieldIndex {
    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Posting list for a term, if present.
    pub fn get(&self, term: &str) -> Option<&PostingList> {
        self.terms.get(term)
    }

    /// All terms with their posting lists, in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PostingList)> {
        self.terms.iter().map(|(t, l)| (t.as_str(), l))
    }

    /// Terms starting with `prefix`, in lexicographic order.
    ///
    /// Range scan from the prefix itself; stops at the first term that no
    /// longer shares it. An empty prefix yields the whole vocabulary.
    pub fn with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a PostingList)> + 'a {
        self.terms
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(t, _)| t.starts_with(prefix))
            .map(|(t, l)| (t.as_str(), l))
    }

    fn total_postings(&self) -> usize {
        self.terms.values().map(|l| l.postings.len()).sum()
    }
}

/// Per-field inverted index over one document set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    fields: BTreeMap<String, FieldIndex>,
    total_docs: usize,
}

/// Term frequencies of one document: (field, term) → count.
type DocTerms = HashMap<(String, String), u32>;

/// Map step: tokenize every declared field of one document.
fn tokenize_document(doc: &Document, schema: &Schema) -> DocTerms {
    let mut counts: DocTerms = HashMap::new();
    for field in &schema.fields {
        let Some(value) = doc.field(&field.name) else {
            continue;
        };
        for text in value.texts() {
            for term in tokenize(&text, field) {
                *counts.entry((field.name.clone(), term)).or_insert(0) += 1;
            }
        }
    }
    counts
}

impl InvertedIndex {
    /// Build the index for every document in the store.
    ///
    /// Every declared field gets an entry, even if no document populates it,
    /// so lookups against a declared-but-empty field return nothing rather
    /// than looking like an unknown field.
    ///
    /// Deterministic: the same store and schema always produce an equal index.
    pub fn build(store: &DocumentStore, schema: &Schema) -> Self {
        let docs: Vec<&Arc<Document>> = store.iter().collect();

        // MAP PHASE: tokenize documents (in parallel when available)
        #[cfg(feature = "parallel")]
        let per_doc: Vec<(DocId, DocTerms)> = docs
            .par_iter()
            .map(|doc| (doc.id, tokenize_document(doc, schema)))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let per_doc: Vec<(DocId, DocTerms)> = docs
            .iter()
            .map(|doc| (doc.id, tokenize_document(doc, schema)))
            .collect();

        // REDUCE PHASE: merge per-document counts into posting lists
        let mut fields: BTreeMap<String, BTreeMap<String, Vec<Posting>>> = schema
            .fields
            .iter()
            .map(|f| (f.name.clone(), BTreeMap::new()))
            .collect();

        for (doc_id, counts) in per_doc {
            for ((field, term), term_frequency) in counts {
                fields
                    .entry(field.clone())
                    .or_default()
                    .entry(term)
                    .or_default()
                    .push(Posting {
                        doc_id,
                        field,
                        term_frequency,
                    });
            }
        }

        // INVARIANT: POSTING_LIST_SORTED
        let fields = fields
            .into_iter()
            .map(|(name, terms)| {
                let terms = terms
                    .into_iter()
                    .map(|(term, mut postings)| {
                        postings.sort_by_key(|p| p.doc_id);
                        let doc_freq = postings.len();
                        (term, PostingList { postings, doc_freq })
                    })
                    .collect();
                (name, FieldIndex { terms })
            })
            .collect();

        InvertedIndex {
            fields,
            total_docs: store.len(),
        }
    }

    /// Number of documents indexed.
    pub fn total_docs(&self) -> usize {
        self.total_docs
    }

    /// Is this field part of the index?
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Index for one field.
    pub fn field(&self, field: &str) -> Option<&FieldIndex> {
        self.fields.get(field)
    }

    /// Postings for an already-normalized term. Empty if the term (or the field) is absent.
    pub fn lookup_exact(&self, field: &str, term: &str) -> &[Posting] {
        self.fields
            .get(field)
            .and_then(|f| f.get(term))
            .map(|l| l.postings.as_slice())
            .unwrap_or(&[])
    }

    /// Number of documents containing the term in this field.
    pub fn doc_freq(&self, field: &str, term: &str) -> usize {
        self.fields
            .get(field)
            .and_then(|f| f.get(term))
            .map_or(0, |l| l.doc_freq)
    }

    /// All distinct terms of a field, in lexicographic order.
    pub fn vocabulary(&self, field: &str) -> impl Iterator<Item = &str> {
        self.fields
            .get(field)
            .into_iter()
            .flat_map(|f| f.terms.keys().map(String::as_str))
    }

    /// Counts for health/inspection output.
    pub fn stats(&self) -> IndexStats {
        let fields: Vec<FieldStats> = self
            .fields
            .iter()
            .map(|(name, f)| FieldStats {
                name: name.clone(),
                terms: f.len(),
                postings: f.total_postings(),
            })
            .collect();
        IndexStats {
            documents: self.total_docs,
            total_terms: fields.iter().map(|f| f.terms).sum(),
            total_postings: fields.iter().map(|f| f.postings).sum(),
            fields,
        }
    }

    /// CRC32 over the canonical content (fields, terms, postings in order).
    ///
    /// Two indexes with equal content have equal fingerprints; used to confirm
    /// a rebuild from the same input reproduced the same index.
    pub fn fingerprint(&self) -> u32 {
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&(self.total_docs as u64).to_le_bytes());
        for (name, field) in &self.fields {
            hasher.update(name.as_bytes());
            hasher.update(&[0]);
            for (term, list) in &field.terms {
                hasher.update(term.as_bytes());
                hasher.update(&[0]);
                for p in &list.postings {
                    hasher.update(&p.doc_id.get().to_le_bytes());
                    hasher.update(&p.term_frequency.to_le_bytes());
                }
            }
        }
        hasher.finalize()
    }

    /// Check the invariants listed at the top of this module.
    ///
    /// O(postings); the build runs it under `debug_assert!`.
    pub fn check_well_formed(&self, store: &DocumentStore) -> bool {
        if self.total_docs != store.len() {
            return false;
        }
        for (name, field) in &self.fields {
            for list in field.terms.values() {
                if list.postings.is_empty() || list.doc_freq != list.postings.len() {
                    return false;
                }
                for w in list.postings.windows(2) {
                    if w[0].doc_id >= w[1].doc_id {
                        return false;
                    }
                }
                for p in &list.postings {
                    if &p.field != name || p.term_frequency == 0 || !store.contains(p.doc_id) {
                        return false;
                    }
                }
            }
        }
        true
    }
}

/// Per-field counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldStats {
    pub name: String,
    pub terms: usize,
    pub postings: usize,
}

/// Whole-index counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub documents: usize,
    pub total_terms: usize,
    pub total_postings: usize,
    pub fields: Vec<FieldStats>,
}
