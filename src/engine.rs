// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A search session: catalog, configuration and the index built from them.
//!
//! The engine keeps its own copy of the catalog so that flipping a configuration
//! option can rebuild without the caller supplying entities again.

use crate::error::IndexError;
use crate::index::Index;
use crate::search::search;
use crate::types::{Entity, IndexConfig, Score, ScoredResult};

/// A ranked hit joined with its entity, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub entity: &'a Entity,
    pub score: Score,
}

#[derive(Debug, Clone)]
pub struct SearchEngine {
    catalog: Vec<Entity>,
    index: Index,
}

impl SearchEngine {
    pub fn new(catalog: Vec<Entity>, config: IndexConfig) -> Result<Self, IndexError> {
        let index = Index::build(catalog.iter().cloned(), config)?;
        Ok(Self { catalog, index })
    }

    /// Every entity, ranked against `query`.
    pub fn search(&self, query: &str) -> Vec<ScoredResult> {
        search(&self.index, query)
    }

    /// Ranked entities with a positive score.
    pub fn matches(&self, query: &str) -> Vec<Match<'_>> {
        self.search(query)
            .into_iter()
            .filter(|result| result.score > 0)
            .filter_map(|result| {
                let entity = self.index.lookup(&result.id).ok()?;
                Some(Match {
                    entity,
                    score: result.score,
                })
            })
            .collect()
    }

    /// Switch tag indexing on or off and rebuild.
    ///
    /// Always rebuilds, even if the flag already had this value.
    pub fn set_include_tags(&mut self, include: bool) -> Result<(), IndexError> {
        self.set_config(IndexConfig {
            include_tags_attribute: include,
        })
    }

    /// Replace the configuration and rebuild. On error nothing changes.
    pub fn set_config(&mut self, config: IndexConfig) -> Result<(), IndexError> {
        self.index.rebuild(self.catalog.iter().cloned(), config)
    }

    /// Replace the catalog and rebuild. On error the old catalog and index stay.
    pub fn replace_catalog(&mut self, catalog: Vec<Entity>) -> Result<(), IndexError> {
        let config = *self.index.config();
        self.index.rebuild(catalog.iter().cloned(), config)?;
        self.catalog = catalog;
        Ok(())
    }

    pub fn lookup(&self, id: &str) -> Result<&Entity, IndexError> {
        self.index.lookup(id)
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    /// The configuration the current index was built with.
    pub fn config(&self) -> &IndexConfig {
        self.index.config()
    }

    pub fn catalog(&self) -> &[Entity] {
        &self.catalog
    }
}
