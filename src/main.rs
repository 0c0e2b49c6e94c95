// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use tagrank::{IndexConfig, ScoredResult, SearchEngine};

mod cli;
use cli::catalog::load_catalog;
use cli::display::{entity_panel, result_line, use_colors};
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            catalog,
            query,
            no_tags,
            limit,
            all,
            json,
        } => run_search(&catalog, &query, no_tags, limit, all, json),
        Commands::Inspect {
            catalog,
            id,
            no_tags,
        } => run_inspect(&catalog, &id, no_tags),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Load the catalog and build an engine, honoring `--no-tags`.
fn open_engine(path: &Path, no_tags: bool) -> Result<SearchEngine> {
    let catalog = load_catalog(path)?;
    let config = IndexConfig {
        include_tags_attribute: catalog.config.include_tags_attribute && !no_tags,
    };
    SearchEngine::new(catalog.entities, config)
        .with_context(|| format!("Failed to index catalog {}", path.display()))
}

fn run_search(
    path: &Path,
    query: &str,
    no_tags: bool,
    limit: Option<usize>,
    all: bool,
    json: bool,
) -> Result<()> {
    let engine = open_engine(path, no_tags)?;

    let results: Vec<ScoredResult> = engine
        .search(query)
        .into_iter()
        .filter(|result| all || result.score > 0)
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let color = use_colors();
    for result in &results {
        let entity = engine.lookup(&result.id)?;
        println!("{}", result_line(entity, result.score, color));
    }
    if results.is_empty() {
        eprintln!("No matches for '{}'", query);
    }
    Ok(())
}

fn run_inspect(path: &Path, id: &str, no_tags: bool) -> Result<()> {
    let engine = open_engine(path, no_tags)?;
    let entity = engine.lookup(id)?;
    let tokens = engine
        .index()
        .token_set(id)
        .context("Indexed entity has no token set")?;

    for line in entity_panel(entity, tokens, use_colors()) {
        println!("{}", line);
    }
    Ok(())
}
