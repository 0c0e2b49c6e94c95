// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The token index: one weighted token set per entity, plus the entity itself.
//!
//! An `Index` is an immutable snapshot. Configuration changes produce a whole new
//! index; `rebuild` swaps it in only once the new one is complete, so a failed
//! rebuild leaves the previous snapshot in place.

use std::collections::btree_map::{self, BTreeMap};

use crate::error::IndexError;
use crate::extract::extract;
use crate::types::{Entity, IndexConfig, TokenSet};

/// An entity together with its extracted tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedEntity {
    pub entity: Entity,
    pub tokens: TokenSet,
}

/// Token sets and entity records keyed by entity id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    entries: BTreeMap<String, IndexedEntity>,
    config: IndexConfig,
}

impl Index {
    /// Extract and store every entity.
    ///
    /// Fails on the first repeated id. Nothing is returned in that case, so a caller
    /// can never observe a partially built index.
    pub fn build<I>(entities: I, config: IndexConfig) -> Result<Self, IndexError>
    where
        I: IntoIterator<Item = Entity>,
    {
        let mut entries = BTreeMap::new();
        let mut token_count = 0usize;

        for entity in entities {
            match entries.entry(entity.id.clone()) {
                btree_map::Entry::Occupied(_) => {
                    tracing::warn!(id = %entity.id, "duplicate entity id, aborting index build");
                    return Err(IndexError::DuplicateEntity { id: entity.id });
                }
                btree_map::Entry::Vacant(slot) => {
                    let tokens = extract(&entity, &config);
                    token_count += tokens.len();
                    slot.insert(IndexedEntity { entity, tokens });
                }
            }
        }

        tracing::debug!(
            entities = entries.len(),
            tokens = token_count,
            include_tags = config.include_tags_attribute,
            "built token index"
        );

        Ok(Self { entries, config })
    }

    /// Replace this index with a fresh build of `entities` under `config`.
    ///
    /// On error `self` is unchanged.
    pub fn rebuild<I>(&mut self, entities: I, config: IndexConfig) -> Result<(), IndexError>
    where
        I: IntoIterator<Item = Entity>,
    {
        let fresh = Self::build(entities, config)?;
        tracing::debug!(
            previous = self.entries.len(),
            current = fresh.entries.len(),
            "rebuilt token index"
        );
        *self = fresh;
        Ok(())
    }

    /// The entity stored under `id`.
    pub fn lookup(&self, id: &str) -> Result<&Entity, IndexError> {
        self.entries
            .get(id)
            .map(|entry| &entry.entity)
            .ok_or_else(|| IndexError::NotFound { id: id.to_string() })
    }

    /// The token set stored under `id`, if any.
    pub fn token_set(&self, id: &str) -> Option<&TokenSet> {
        self.entries.get(id).map(|entry| &entry.tokens)
    }

    /// Configuration this index was built with.
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexedEntity)> + '_ {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }
}
