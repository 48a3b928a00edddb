// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use cinedex::{
    load_config, load_documents, CinedexConfig, Fuzziness, QueryRequest, Result, SearchEngine,
};

mod cli;
use cli::{display, Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => CinedexConfig::default(),
    };

    match cli.command {
        Commands::Search {
            data,
            query,
            mode,
            field,
            fuzziness,
            boost_exact,
            limit,
        } => {
            let engine = open(&data, cli.auto_id, config)?;
            let mut request = QueryRequest::parse_mode(&mode, &field, &query)?;
            request.limit = limit;
            request.fuzziness = fuzziness.map(|f| f.parse::<Fuzziness>()).transpose()?;
            request.boost_exact = boost_exact;

            let hits = engine.execute(&request)?;
            if cli.json {
                print_json(&hits)?;
            } else {
                display::print_hits(&query, request.mode, &hits);
            }
        }
        Commands::Suggest {
            data,
            prefix,
            field,
            limit,
        } => {
            let engine = open(&data, cli.auto_id, config)?;
            let terms = engine.suggest_terms(&field, &prefix, limit)?;
            if cli.json {
                print_json(&terms)?;
            } else {
                display::print_terms(&prefix, &terms);
            }
        }
        Commands::Stats { data } => {
            let engine = open(&data, cli.auto_id, config)?;
            let info = engine.stats();
            if cli.json {
                print_json(&info)?;
            } else {
                display::print_stats(&info);
            }
        }
        Commands::Facets { data, field, size } => {
            let engine = open(&data, cli.auto_id, config)?;
            let counts = engine.facets(&field, size)?;
            if cli.json {
                print_json(&counts)?;
            } else {
                display::print_facets(&field, &counts);
            }
        }
        Commands::List {
            data,
            offset,
            limit,
        } => {
            let engine = open(&data, cli.auto_id, config)?;
            let docs = engine.documents(offset, limit);
            if cli.json {
                print_json(&docs)?;
            } else {
                display::print_documents(&docs);
            }
        }
    }
    Ok(())
}

fn open(data: &Path, auto_id: bool, config: CinedexConfig) -> Result<SearchEngine> {
    let records = load_documents(data, auto_id)?;
    SearchEngine::with_documents(records, config.schema, config.engine)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
