// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning one entity into a weighted token set.
//!
//! Attributes are visited in precedence order, so the first attribute to mention a
//! token decides its weight. A token in both the title and the description is worth
//! the title's 12, not 14 and not 2.

use crate::tokenize::tokenize;
use crate::types::{Attribute, Entity, IndexConfig, TokenSet};

/// Build the token set for `entity` under `config`.
///
/// Tags are skipped entirely when `config.include_tags_attribute` is false. A `?`
/// in front of a tag is punctuation like any other, so `?internal` indexes `internal`.
pub fn extract(entity: &Entity, config: &IndexConfig) -> TokenSet {
    let mut tokens = TokenSet::new();

    for attribute in Attribute::PRECEDENCE {
        if !config.includes(attribute) {
            continue;
        }

        let weight = attribute.weight();
        for token in tokenize(entity.attribute(attribute)) {
            tokens.insert_first(token, weight);
        }
    }

    crate::contracts::check_token_set_well_formed(&tokens);
    tokens
}
