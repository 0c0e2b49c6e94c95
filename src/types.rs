// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the token index.
//!
//! Entities come from an external catalog and never change while indexed. Each one is
//! reduced to a `TokenSet`: every distinct token it mentions, weighted by the most
//! significant attribute it appeared in.
//!
//! # Invariants
//!
//! - **TokenSet**: one entry per token; a token keeps the weight of the first attribute
//!   it was seen in (title → name → tags → description). Later attributes never
//!   overwrite or add to it.
//!
//! - **Attribute weights**: strictly decreasing in precedence order and always positive.
//!   `contracts` checks this at compile time.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

// =============================================================================
// ATTRIBUTES AND WEIGHTS
// =============================================================================

/// Integer importance of a token, fixed by the attribute it came from.
pub type Weight = u32;

/// Accumulated relevance of an entity for one query.
///
/// Wider than [`Weight`] and summed with saturation: a long query repeating a word
/// that many tokens contain can exceed `u32::MAX`.
pub type Score = u64;

/// Weight of tokens taken from an entity's title.
pub const TITLE_WEIGHT: Weight = 12;

/// Weight of tokens taken from an entity's name.
pub const NAME_WEIGHT: Weight = 6;

/// Weight of tokens taken from an entity's tags.
pub const TAGS_WEIGHT: Weight = 4;

/// Weight of tokens taken from an entity's description.
pub const DESCRIPTION_WEIGHT: Weight = 2;

/// Which entity attribute a token was extracted from.
///
/// Declaration order is precedence order: `Title < Name < Tags < Description`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Title,
    Name,
    Tags,
    Description,
}

impl Attribute {
    /// All attributes in the order the extractor visits them.
    pub const PRECEDENCE: [Attribute; 4] = [
        Attribute::Title,
        Attribute::Name,
        Attribute::Tags,
        Attribute::Description,
    ];

    /// Fixed weight for tokens from this attribute.
    pub const fn weight(self) -> Weight {
        match self {
            Attribute::Title => TITLE_WEIGHT,
            Attribute::Name => NAME_WEIGHT,
            Attribute::Tags => TAGS_WEIGHT,
            Attribute::Description => DESCRIPTION_WEIGHT,
        }
    }
}

// =============================================================================
// ENTITIES
// =============================================================================

/// A catalog record. The engine only reads it.
///
/// Missing text attributes deserialize as empty strings, which contribute no tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub description: String,
}

impl Entity {
    /// Raw text of one attribute.
    pub fn attribute(&self, attribute: Attribute) -> &str {
        match attribute {
            Attribute::Title => &self.title,
            Attribute::Name => &self.name,
            Attribute::Tags => &self.tags,
            Attribute::Description => &self.description,
        }
    }
}

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Options that change what gets indexed. Changing any of them requires a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexConfig {
    /// Index the tags attribute. When false, tags are skipped entirely.
    pub include_tags_attribute: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            include_tags_attribute: true,
        }
    }
}

impl IndexConfig {
    /// Whether the extractor should visit this attribute at all.
    pub fn includes(&self, attribute: Attribute) -> bool {
        attribute != Attribute::Tags || self.include_tags_attribute
    }
}

// =============================================================================
// TOKEN SETS
// =============================================================================

/// Per-entity mapping from token to weight.
///
/// Backed by a `BTreeMap` so iteration (and therefore scoring and equality) is
/// independent of insertion history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSet {
    entries: BTreeMap<String, Weight>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `token` with `weight` unless it is already present.
    ///
    /// Returns `true` if the token was new. An existing entry is left untouched.
    pub fn insert_first(&mut self, token: String, weight: Weight) -> bool {
        match self.entries.entry(token) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(weight);
                true
            }
            btree_map::Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, token: &str) -> Option<Weight> {
        self.entries.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in lexicographic token order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Weight)> + '_ {
        self.entries.iter().map(|(token, weight)| (token.as_str(), *weight))
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// One entity's score for one query. Produced fresh per query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredResult {
    pub id: String,
    pub score: Score,
}

impl ScoredResult {
    pub fn new(id: impl Into<String>, score: Score) -> Self {
        Self {
            id: id.into(),
            score,
        }
    }
}
