// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index and ranking invariants.
//!
//! These are debug-mode assertions:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Early failure detection** while tests run
//!
//! | Contract Function              | Invariant                                            |
//! |--------------------------------|------------------------------------------------------|
//! | `check_token_set_well_formed`  | tokens normalized, alphanumeric, known weights       |
//! | `check_ranked_order`           | score descending, then id ascending                  |

use crate::scoring::ranking::compare_results;
use crate::tokenize::normalize;
use crate::types::{
    Attribute, ScoredResult, TokenSet, DESCRIPTION_WEIGHT, NAME_WEIGHT, TAGS_WEIGHT, TITLE_WEIGHT,
};
use std::cmp::Ordering;

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

/// Attribute weights are positive and strictly decreasing in precedence order.
/// If this fails, the crate won't build.
const _: () = {
    assert!(TITLE_WEIGHT > NAME_WEIGHT);
    assert!(NAME_WEIGHT > TAGS_WEIGHT);
    assert!(TAGS_WEIGHT > DESCRIPTION_WEIGHT);
    assert!(DESCRIPTION_WEIGHT > 0);
};

// ============================================================================
// RUNTIME CONTRACTS (debug builds only)
// ============================================================================

/// Every token is non-empty, already normalized and made of letters and digits
/// only, and every weight belongs to some attribute.
#[inline]
pub fn check_token_set_well_formed(tokens: &TokenSet) {
    if cfg!(debug_assertions) {
        for (token, weight) in tokens.iter() {
            debug_assert!(!token.is_empty(), "empty token in token set");
            debug_assert!(
                normalize(token) == token,
                "token '{}' is not normalized",
                token
            );
            debug_assert!(
                token.chars().all(char::is_alphanumeric),
                "token '{}' contains a separator",
                token
            );
            debug_assert!(
                Attribute::PRECEDENCE.iter().any(|a| a.weight() == weight),
                "token '{}' has weight {} not assigned to any attribute",
                token,
                weight
            );
        }
    }
}

/// No adjacent pair of results is out of ranking order.
#[inline]
pub fn check_ranked_order(results: &[ScoredResult]) {
    if cfg!(debug_assertions) {
        for (i, pair) in results.windows(2).enumerate() {
            debug_assert!(
                compare_results(&pair[0], &pair[1]) != Ordering::Greater,
                "ranked results out of order at position {}: {:?} then {:?}",
                i,
                pair[0],
                pair[1]
            );
        }
    }
}
