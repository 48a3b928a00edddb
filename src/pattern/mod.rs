// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pattern matching over the vocabulary: wildcards and prefixes.
//!
//! Both walk the ordered vocabulary starting at a literal prefix, so a
//! pattern like `para*` only ever looks at the "para…" slice of the terms.

mod glob;
mod prefix;

pub use glob::{wildcard_candidates, WildcardPattern};
pub use prefix::{prefix_candidates, DEFAULT_SUGGEST_LIMIT};

pub(crate) use prefix::ranked_completions;
