// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization and tokenization.
//!
//! The same functions run at index time and at query time. If they ever
//! diverge, exact lookups silently stop matching, so there is exactly one
//! tokenizer and both sides call it.
//!
//! # Algorithm (Text fields)
//!
//! 1. Normalize: NFD-decompose and drop combining marks (with the
//!    `unicode-normalization` feature), then lowercase
//! 2. Split on whitespace
//! 3. Strip non-alphanumeric characters from both ends of each piece
//! 4. Drop pieces that end up empty
//!
//! Inner punctuation survives: "spider-man" stays one term, "(1994)" becomes "1994".

use crate::config::{FieldConfig, FieldKind};

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Normalize a string for search: strip diacritics and lowercase.
///
/// - "Amélie" → "amelie"
/// - "Ōkami" → "okami"
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Lightweight normalization without unicode-normalization.
/// Just lowercases. Assumes input is ASCII or pre-normalized.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Word boundary detection for stripping.
#[inline]
fn is_boundary_char(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Tokenize a field value into terms, according to the field's kind.
pub fn tokenize(text: &str, field: &FieldConfig) -> Vec<String> {
    match field.kind {
        FieldKind::Text => tokenize_text(text),
        FieldKind::Keyword => tokenize_keyword(text),
        FieldKind::Integer => tokenize_integer(text),
    }
}

/// Whitespace split with boundary punctuation stripped.
pub fn tokenize_text(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(|piece| piece.trim_matches(is_boundary_char))
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

/// The whole value as one term, whitespace collapsed.
fn tokenize_keyword(text: &str) -> Vec<String> {
    let collapsed = normalize(text)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if collapsed.is_empty() {
        Vec::new()
    } else {
        vec![collapsed]
    }
}

/// Canonical decimal rendering; anything that isn't an integer yields no term.
fn tokenize_integer(text: &str) -> Vec<String> {
    match text.trim().parse::<i64>() {
        Ok(n) => vec![n.to_string()],
        Err(_) => Vec::new(),
    }
}

/// Normalize a wildcard pattern or suggestion prefix.
///
/// Same case/diacritic folding as terms, but `*` and `?` are kept and nothing is
/// split, so a pattern can be matched against a vocabulary of normalized terms.
pub fn normalize_pattern(pattern: &str) -> String {
    normalize(pattern.trim())
}
