// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::config::{FieldConfig, Schema};
use crate::index::Snapshot;
use crate::types::DocumentRecord;

fn list(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Schema for the two-document scenario: a text `name` and an integer `year`.
pub fn scenario_schema() -> Schema {
    Schema::new(vec![FieldConfig::text("name"), FieldConfig::integer("year")])
}

/// Parasite (2019) and Paradise (1988).
pub fn scenario_records() -> Vec<DocumentRecord> {
    vec![
        DocumentRecord::new(1)
            .with_field("name", "Parasite")
            .with_field("year", 2019_i64),
        DocumentRecord::new(2)
            .with_field("name", "Paradise")
            .with_field("year", 1988_i64),
    ]
}

/// The scenario, built.
pub fn scenario_snapshot() -> Snapshot {
    Snapshot::build(scenario_records(), scenario_schema())
        .unwrap_or_else(|e| panic!("scenario fixture failed to build: {}", e))
}

/// A record in the shape of the Best Picture dataset.
pub fn make_movie(id: i64, name: &str, released_year: i64, oscar: i64, genre: &[&str]) -> DocumentRecord {
    DocumentRecord::new(id)
        .with_field("name", name)
        .with_field("released_year", released_year)
        .with_field("oscar", oscar)
        .with_field("genre", list(genre))
}

/// Five Best Picture winners, for use with [`Schema::movies`].
pub fn movie_records() -> Vec<DocumentRecord> {
    vec![
        make_movie(1, "Parasite", 2019, 2020, &["Comedy", "Drama", "Thriller"])
            .with_field("directors", list(&["Bong Joon Ho"]))
            .with_field("stars", list(&["Song Kang-ho", "Lee Sun-kyun", "Cho Yeo-jeong"]))
            .with_field("rating", "R")
            .with_field(
                "summary",
                "Greed and class discrimination threaten the newly formed symbiotic relationship between the wealthy Park family and the destitute Kim clan.",
            ),
        make_movie(2, "Green Book", 2018, 2019, &["Biography", "Comedy", "Drama"])
            .with_field("directors", list(&["Peter Farrelly"]))
            .with_field("stars", list(&["Viggo Mortensen", "Mahershala Ali"]))
            .with_field("rating", "PG-13")
            .with_field(
                "summary",
                "A working-class Italian-American bouncer becomes the driver for an African-American classical pianist on a tour of venues through the 1960s American South.",
            ),
        make_movie(3, "The Shape of Water", 2017, 2018, &["Adventure", "Drama", "Fantasy"])
            .with_field("directors", list(&["Guillermo del Toro"]))
            .with_field("stars", list(&["Sally Hawkins", "Octavia Spencer"]))
            .with_field("rating", "R")
            .with_field(
                "summary",
                "At a top secret research facility in the 1960s, a lonely janitor forms a unique relationship with an amphibious creature.",
            ),
        make_movie(4, "Gladiator", 2000, 2001, &["Action", "Adventure"])
            .with_field("directors", list(&["Ridley Scott"]))
            .with_field("stars", list(&["Russell Crowe", "Joaquin Phoenix"]))
            .with_field("rating", "R")
            .with_field(
                "summary",
                "A former Roman General sets out to exact vengeance against the corrupt emperor who murdered his family and sent him into slavery.",
            ),
        make_movie(5, "Rocky", 1976, 1977, &["Sport"])
            .with_field("directors", list(&["John G. Avildsen"]))
            .with_field("stars", list(&["Sylvester Stallone", "Talia Shire"]))
            .with_field("rating", "PG")
            .with_field(
                "summary",
                "A small-time Philadelphia boxer gets a supremely rare chance to fight the world heavyweight champion.",
            ),
    ]
}

/// The five winners, built against the movie schema.
pub fn movie_snapshot() -> Snapshot {
    Snapshot::build(movie_records(), Schema::movies())
        .unwrap_or_else(|e| panic!("movie fixture failed to build: {}", e))
}
