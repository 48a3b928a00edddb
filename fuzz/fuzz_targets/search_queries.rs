// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for whole queries.
//!
//! Arbitrary text, modes, fields and limits against a fixed catalogue. Queries
//! may be rejected, but never panic, never exceed the limit, and always come
//! back ranked.

#![no_main]

use arbitrary::Arbitrary;
use cinedex::testing::movie_records;
use cinedex::{EngineConfig, Fuzziness, QueryMode, QueryRequest, Schema, SearchEngine, SearchError};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

#[derive(Debug, Arbitrary)]
struct QueryInput {
    text: String,
    mode: u8,
    field: u8,
    fuzziness: i8,
    limit: u8,
}

const FIELDS: &[&str] = &["*", "name", "genre", "summary", "rating", "oscar", "bogus", "", "a b"];

fn engine() -> &'static SearchEngine {
    static ENGINE: OnceLock<SearchEngine> = OnceLock::new();
    ENGINE.get_or_init(|| {
        SearchEngine::with_documents(movie_records(), Schema::movies(), EngineConfig::default())
            .expect("fixture builds")
    })
}

fuzz_target!(|input: QueryInput| {
    let text: String = input.text.chars().take(40).collect();
    let mode = match input.mode % 5 {
        0 => QueryMode::Exact,
        1 => QueryMode::Fuzzy,
        2 => QueryMode::Wildcard,
        3 => QueryMode::Suggest,
        _ => QueryMode::Advanced,
    };
    let field = FIELDS[usize::from(input.field) % FIELDS.len()];
    let limit = usize::from(input.limit % 16);

    let request = QueryRequest::new(mode, field, &text)
        .with_fuzziness(Fuzziness::Fixed(i32::from(input.fuzziness % 4)))
        .with_limit(limit);

    match engine().execute(&request) {
        Ok(hits) => {
            assert!(hits.len() <= limit);
            for pair in hits.windows(2) {
                assert!(
                    pair[0].score > pair[1].score
                        || (pair[0].score == pair[1].score && pair[0].id() < pair[1].id())
                );
            }
        }
        Err(SearchError::Query(_)) | Err(SearchError::InvalidParameter { .. }) => {}
        Err(e) => panic!("unexpected error for {:?}: {}", request, e),
    }
});
