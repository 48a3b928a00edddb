// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! JSON loading for document records and configuration.
//!
//! Records are a JSON array of flat objects:
//!
//! ```json
//! [
//!   { "id": 1, "name": "Parasite", "released_year": 2019,
//!     "genre": ["Comedy", "Drama", "Thriller"] }
//! ]
//! ```
//!
//! | JSON value              | Field value                 |
//! |-------------------------|-----------------------------|
//! | integer                 | `Integer`                   |
//! | string, float, bool     | `Text`                      |
//! | array of scalars        | `List` (each rendered)      |
//! | null, object            | dropped                     |
//!
//! The `id` key becomes the record id. Validation (missing, negative or
//! duplicate ids) happens at build time, not here.

use crate::config::CinedexConfig;
use crate::error::{Result, SearchError};
use crate::types::{DocumentRecord, FieldValue};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Key holding the document id.
pub const ID_KEY: &str = "id";

/// Read a JSON array of records from `path`.
///
/// With `auto_id`, records without an `id` get their 1-based position.
pub fn load_documents(path: &Path, auto_id: bool) -> Result<Vec<DocumentRecord>> {
    let content = fs::read_to_string(path).map_err(|e| load_error(path, e))?;
    let value: Value =
        serde_json::from_str(&content).map_err(|e| load_error(path, format!("invalid JSON: {}", e)))?;
    let records = records_from_json(value, auto_id).map_err(|e| match e {
        SearchError::InvalidParameter { reason, .. } => load_error(path, reason),
        other => other,
    })?;
    debug!(path = %path.display(), records = records.len(), "loaded documents");
    Ok(records)
}

/// Convert an already-parsed JSON array into records.
pub fn records_from_json(value: Value, auto_id: bool) -> Result<Vec<DocumentRecord>> {
    let Value::Array(items) = value else {
        return Err(SearchError::invalid_parameter(
            "documents",
            "expected a JSON array of objects",
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(position, item)| match item {
            Value::Object(object) => {
                let mut record = record_from_object(position, object)?;
                if auto_id && record.id.is_none() {
                    record.id = Some(position as i64 + 1);
                }
                Ok(record)
            }
            _ => Err(SearchError::invalid_parameter(
                "documents",
                format!("record at position {} is not an object", position),
            )),
        })
        .collect()
}

fn record_from_object(position: usize, object: Map<String, Value>) -> Result<DocumentRecord> {
    let mut record = DocumentRecord::default();
    for (key, value) in object {
        if key == ID_KEY {
            record.id = match value {
                Value::Null => None,
                Value::Number(n) => Some(n.as_i64().ok_or_else(|| {
                    SearchError::invalid_parameter(
                        "documents",
                        format!("record at position {} has non-integer id {}", position, n),
                    )
                })?),
                other => {
                    return Err(SearchError::invalid_parameter(
                        "documents",
                        format!("record at position {} has non-integer id {}", position, other),
                    ))
                }
            };
            continue;
        }
        if let Some(field) = field_value(value) {
            record.fields.insert(key, field);
        }
    }
    Ok(record)
}

fn field_value(value: Value) -> Option<FieldValue> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::Number(n) => Some(match n.as_i64() {
            Some(i) => FieldValue::Integer(i),
            None => FieldValue::Text(n.to_string()),
        }),
        Value::String(s) => Some(FieldValue::Text(s)),
        Value::Bool(b) => Some(FieldValue::Text(b.to_string())),
        Value::Array(items) => Some(FieldValue::List(
            items.into_iter().filter_map(scalar_text).collect(),
        )),
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Read a `{ "schema": ..., "engine": ... }` file. Missing sections take defaults.
pub fn load_config(path: &Path) -> Result<CinedexConfig> {
    let content = fs::read_to_string(path).map_err(|e| load_error(path, e))?;
    let config: CinedexConfig =
        serde_json::from_str(&content).map_err(|e| load_error(path, format!("invalid config: {}", e)))?;
    config.schema.validate()?;
    config.engine.max_distance()?;
    Ok(config)
}

fn load_error(path: &Path, reason: impl ToString) -> SearchError {
    SearchError::Load {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
