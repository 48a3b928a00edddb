// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy.
//!
//! Every failure comes back as a value. Nothing here is fatal to the engine:
//! a rejected build leaves the previous snapshot published, and a rejected
//! query leaves the engine ready for the next one.
//!
//! | Variant                 | Raised by             | Caller action              |
//! |-------------------------|-----------------------|----------------------------|
//! | `IndexBuild`            | snapshot build        | fix input, rebuild         |
//! | `InvalidParameter`      | matchers, engine ops  | fix parameter              |
//! | `Query`                 | query parsing         | fix query                  |
//! | `NotFound`              | document store        | -                          |
//! | `InternalInconsistency` | result materializing  | bug: index/store mismatch  |
//! | `Load` / `Json` / `Io`  | loader                | fix file                   |

use crate::types::DocId;
use std::path::PathBuf;
use thiserror::Error;

/// Why a snapshot build was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndexBuildError {
    #[error("record at position {position} has no id")]
    MissingId { position: usize },

    #[error("record at position {position} has invalid id {id} (ids must be non-negative)")]
    InvalidId { position: usize, id: i64 },

    #[error("duplicate document id {id}")]
    DuplicateId { id: DocId },

    #[error("document {id} is missing required field '{field}'")]
    MissingField { id: DocId, field: String },

    #[error("schema declares no indexed fields")]
    EmptySchema,

    #[error("schema declares field '{field}' more than once")]
    DuplicateField { field: String },

    #[error("field '{field}' has weight {weight} (weights must be finite and > 0)")]
    InvalidWeight { field: String, weight: f64 },
}

/// Why a query failed to parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("unknown query mode '{0}' (expected exact, fuzzy, wildcard, suggest or advanced)")]
    UnknownMode(String),

    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("malformed field name '{0}'")]
    MalformedField(String),

    #[error("wildcard pattern is empty")]
    EmptyPattern,
}

/// Main error type for cinedex operations.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("index build failed: {0}")]
    IndexBuild(#[from] IndexBuildError),

    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("query error: {0}")]
    Query(#[from] QueryError),

    #[error("document not found: {0}")]
    NotFound(DocId),

    #[error("internal inconsistency: posting for document {doc_id} (term '{term}' in field '{field}') has no stored document")]
    InternalInconsistency {
        doc_id: DocId,
        field: String,
        term: String,
    },

    #[error("failed to load {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for cinedex operations.
pub type Result<T> = std::result::Result<T, SearchError>;

impl SearchError {
    /// Shorthand for building an `InvalidParameter`.
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        SearchError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Does this error indicate a bug (index and store out of step) rather than bad input?
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            SearchError::NotFound(_) | SearchError::InternalInconsistency { .. }
        )
    }
}
