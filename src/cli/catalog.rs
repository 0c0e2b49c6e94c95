// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading an entity catalog from JSON.
//!
//! Accepts either a bare array of entities or an object with an `entities` array
//! and an optional `config` block.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tagrank::{Entity, IndexConfig};

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<Entity>),
    Wrapped {
        entities: Vec<Entity>,
        #[serde(default)]
        config: IndexConfig,
    },
}

/// Entities plus the configuration the catalog file asks for.
#[derive(Debug)]
pub struct Catalog {
    pub entities: Vec<Entity>,
    pub config: IndexConfig,
}

pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let file: CatalogFile = serde_json::from_str(json).context("Invalid catalog JSON")?;
    Ok(match file {
        CatalogFile::Bare(entities) => Catalog {
            entities,
            config: IndexConfig::default(),
        },
        CatalogFile::Wrapped { entities, config } => Catalog { entities, config },
    })
}

pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let catalog = parse_catalog(&content)
        .with_context(|| format!("Failed to parse catalog {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        entities = catalog.entities.len(),
        "loaded catalog"
    );
    Ok(catalog)
}
