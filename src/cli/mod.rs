// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the cinedex command-line interface.
//!
//! Every subcommand loads a JSON file of movie records, builds a snapshot in
//! memory, and answers one request against it. There is no on-disk index.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cinedex",
    about = "In-memory movie search: exact, fuzzy, wildcard, suggest and advanced",
    version
)]
pub struct Cli {
    /// JSON config file with `schema` and `engine` sections
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Number records without an `id` by position, starting at 1
    #[arg(long, global = true)]
    pub auto_id: bool,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search documents
    Search {
        /// JSON array of movie records
        data: PathBuf,

        /// Query text, wildcard pattern or prefix depending on mode
        query: String,

        /// exact, fuzzy, wildcard, suggest or advanced
        #[arg(short, long, default_value = "exact")]
        mode: String,

        /// Field to search, `*` for all indexed fields
        #[arg(short, long, default_value = "*")]
        field: String,

        /// Max edits for fuzzy and advanced modes: AUTO or a number
        ///
        /// AUTO allows 0 edits for 1-2 characters, 1 for 3-5, 2 beyond.
        #[arg(long)]
        fuzziness: Option<String>,

        /// Multiplier for exact term hits in advanced mode (default 2.0)
        #[arg(long)]
        boost_exact: Option<f64>,

        /// Maximum number of results (engine default when omitted)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Complete a prefix to indexed terms
    Suggest {
        /// JSON array of movie records
        data: PathBuf,

        /// Prefix to complete
        prefix: String,

        #[arg(short, long, default_value = "name")]
        field: String,

        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show index statistics
    Stats {
        /// JSON array of movie records
        data: PathBuf,
    },

    /// Count distinct values of a field
    Facets {
        /// JSON array of movie records
        data: PathBuf,

        /// Field to aggregate, e.g. genre
        field: String,

        /// Number of values to show
        #[arg(short, long, default_value = "10")]
        size: usize,
    },

    /// List documents in id order
    List {
        /// JSON array of movie records
        data: PathBuf,

        #[arg(long, default_value = "0")]
        offset: usize,

        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}
