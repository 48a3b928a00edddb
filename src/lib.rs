// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory inverted-index search over movie records.
//!
//! Exact terms, fuzzy terms (edit distance), `*`/`?` wildcards and prefix
//! suggestions, plus an advanced mode that blends boosted exact, fuzzy and
//! prefix matches. Every query runs against an immutable snapshot;
//! rebuilding publishes a new one without disturbing queries in flight.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐    ┌──────────────┐    ┌──────────────────────────────┐
//! │  load.rs   │───▶│  tokenizer   │───▶│ index::{store, inverted}     │
//! │ (JSON →    │    │ (normalize,  │    │ (id → Document,              │
//! │  records)  │    │  tokenize)   │    │  field → term → postings)    │
//! └────────────┘    └──────────────┘    └──────────────┬───────────────┘
//!                                                      │ Snapshot::build
//!                                                      ▼
//! ┌────────────┐    ┌──────────────┐    ┌──────────────────────────────┐
//! │ engine.rs  │───▶│    query     │───▶│ fuzzy / pattern              │
//! │ (publish,  │    │ (parse →     │    │ (bounded Levenshtein,        │
//! │  facade)   │    │  rank → hits)│    │  wildcards, prefixes)        │
//! └────────────┘    └──────────────┘    └──────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use cinedex::{EngineConfig, SearchEngine, Schema, DocumentRecord};
//!
//! let records = vec![
//!     DocumentRecord::new(1).with_field("name", "Parasite"),
//!     DocumentRecord::new(2).with_field("name", "Paradise Road"),
//! ];
//! let engine = SearchEngine::with_documents(records, Schema::movies(), EngineConfig::default())?;
//!
//! let hits = engine.search_fuzzy("name", "parasit", 2, None)?;
//! assert_eq!(hits[0].document.title(), "Parasite");
//! # Ok::<(), cinedex::SearchError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod load;
pub mod pattern;
pub mod query;
pub mod tokenizer;
pub mod types;

#[doc(hidden)]
pub mod testing;

pub use config::{CinedexConfig, EngineConfig, FieldConfig, FieldKind, Schema, ALL_FIELDS};
pub use engine::SearchEngine;
pub use error::{IndexBuildError, QueryError, Result, SearchError};
pub use fuzzy::{bounded_levenshtein, fuzzy_candidates, levenshtein_within, Fuzziness};
pub use index::{DocumentStore, InvertedIndex, Snapshot, SnapshotInfo};
pub use load::{load_config, load_documents};
pub use pattern::{prefix_candidates, wildcard_candidates, WildcardPattern};
pub use query::{QueryRequest, QueryStage, DEFAULT_BOOST_EXACT};
pub use tokenizer::{normalize, tokenize};
pub use types::{
    DocId, Document, DocumentRecord, FieldValue, MatchedTerm, Posting, PostingList, QueryMode,
    SearchHit,
};
