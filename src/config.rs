// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Configuration: the declared field set and the engine defaults.
//!
//! The field set is fixed per deployment and handed to the build. There is no
//! schema inference: a field that is not declared is stored with its document
//! but never indexed, and a query naming it fails to parse.

use crate::error::{IndexBuildError, SearchError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Field name that targets every indexed field at once.
pub const ALL_FIELDS: &str = "*";

/// How a field's value is turned into terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Whitespace-split, boundary punctuation stripped.
    Text,
    /// The whole normalized value is one term.
    Keyword,
    /// The decimal rendering is one term.
    Integer,
}

/// One declared field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub name: String,
    #[serde(default = "default_kind")]
    pub kind: FieldKind,
    /// Multiplier applied to every term frequency in this field.
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Reject documents that lack this field.
    #[serde(default)]
    pub required: bool,
}

fn default_kind() -> FieldKind {
    FieldKind::Text
}

fn default_weight() -> f64 {
    1.0
}

impl FieldConfig {
    pub fn new(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            weight: 1.0,
            required: false,
        }
    }

    pub fn text(name: &str) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn keyword(name: &str) -> Self {
        Self::new(name, FieldKind::Keyword)
    }

    pub fn integer(name: &str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    /// Set the scoring weight.
    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// The declared field set, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub fields: Vec<FieldConfig>,
}

impl Default for Schema {
    fn default() -> Self {
        Self::movies()
    }
}

impl Schema {
    pub fn new(fields: Vec<FieldConfig>) -> Self {
        Self { fields }
    }

    /// Field set for the Oscar Best Picture dataset.
    ///
    /// Titles weigh double, matching how the service ranked name hits above
    /// genre/people/summary hits.
    pub fn movies() -> Self {
        Self::new(vec![
            FieldConfig::text("name").weight(2.0).required(),
            FieldConfig::text("genre"),
            FieldConfig::text("directors"),
            FieldConfig::text("stars"),
            FieldConfig::text("summary"),
            FieldConfig::keyword("rating"),
            FieldConfig::integer("oscar"),
            FieldConfig::integer("released_year"),
        ])
    }

    /// Look up a declared field.
    pub fn field(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of all declared fields, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Check the schema itself is usable.
    pub fn validate(&self) -> Result<(), IndexBuildError> {
        if self.fields.is_empty() {
            return Err(IndexBuildError::EmptySchema);
        }
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(IndexBuildError::DuplicateField {
                    field: field.name.clone(),
                });
            }
            // Every ranked score must stay finite and > 0
            if !field.weight.is_finite() || field.weight <= 0.0 {
                return Err(IndexBuildError::InvalidWeight {
                    field: field.name.clone(),
                    weight: field.weight,
                });
            }
        }
        Ok(())
    }
}

/// Query defaults and expansion limits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Max edit distance when a fuzzy query doesn't say.
    pub default_max_distance: u32,
    /// Result limit when a search doesn't say.
    pub default_result_limit: usize,
    /// Suggestion limit when a suggest query doesn't say.
    pub default_suggest_limit: usize,
    /// Cap on fuzzy candidates kept per query term (after ordering).
    pub max_expansions: usize,
    /// Leading characters a fuzzy candidate must share with the query term.
    pub prefix_length: usize,
}

impl EngineConfig {
    /// Default fuzzy bound as the signed value fuzzy queries take.
    ///
    /// Fails when the configured value doesn't fit, instead of wrapping.
    pub fn max_distance(&self) -> Result<i32, SearchError> {
        i32::try_from(self.default_max_distance).map_err(|_| {
            SearchError::invalid_parameter(
                "default_max_distance",
                format!("must be <= {}, got {}", i32::MAX, self.default_max_distance),
            )
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_max_distance: 2,
            default_result_limit: 20,
            default_suggest_limit: 10,
            max_expansions: 50,
            prefix_length: 0,
        }
    }
}

/// On-disk configuration file: `{ "schema": {...}, "engine": {...} }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CinedexConfig {
    pub schema: Schema,
    pub engine: EngineConfig,
}
