// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the tagrank command-line interface.
//!
//! Two subcommands: `search` to rank a catalog against a query, and `inspect`
//! to show the weighted tokens extracted for one entity.

pub mod catalog;
pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tagrank",
    about = "Rank catalog entities by weighted token matches",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank every entity in a catalog against a query
    Search {
        /// Path to the catalog JSON file
        catalog: PathBuf,

        /// Search query
        query: String,

        /// Do not index the tags attribute
        #[arg(long)]
        no_tags: bool,

        /// Maximum number of results to print
        #[arg(short, long)]
        limit: Option<usize>,

        /// Include entities that scored zero
        #[arg(long)]
        all: bool,

        /// Print results as JSON instead of `title - score` lines
        #[arg(long)]
        json: bool,
    },

    /// Show an entity and its weighted token set
    Inspect {
        /// Path to the catalog JSON file
        catalog: PathBuf,

        /// Entity id
        id: String,

        /// Do not index the tags attribute
        #[arg(long)]
        no_tags: bool,
    },
}
