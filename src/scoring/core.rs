// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a score.
//!
//! A token earns its full weight when it equals the needle and half its weight
//! (rounded down) when it merely contains it. The needle is first the whole
//! normalized query, then each query word in turn, and the contributions add up:
//!
//! ```text
//! query "pod", token "pod" (12):    12 (whole query) + 12 (word "pod")     = 24
//! query "pod", token "mk1pod" (6):   3 (whole query) +  3 (word "pod")     =  6
//! query "fuel tank", token "fuel" (4): 0 (whole query) + 4 (word "fuel") + 0 = 4
//! ```
//!
//! At the whole-query level exact and contains are exclusive; every word then adds
//! its own exact-or-contains contribution on top. A single-word query is therefore
//! counted twice. That doubling is intentional and locked in by tests.
//!
//! A word repeated in the query counts once per occurrence. Repeats are grouped at
//! parse time and multiplied in, and all arithmetic saturates at [`Score::MAX`].

use crate::tokenize::{normalize, tokenize};
use crate::types::{Score, TokenSet, Weight};
use std::collections::BTreeMap;

/// One distinct query word and how many times it occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryWord {
    pub text: String,
    pub count: u64,
}

/// A query normalized once and reused for every entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// The whole query, lowercased and trimmed.
    pub full: String,
    /// Distinct tokens of `full`, in lexicographic order.
    pub words: Vec<QueryWord>,
}

impl Query {
    pub fn parse(query: &str) -> Self {
        let full = normalize(query);
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for word in tokenize(&full) {
            *counts.entry(word).or_default() += 1;
        }
        let words = counts
            .into_iter()
            .map(|(text, count)| QueryWord { text, count })
            .collect();
        Self { full, words }
    }

    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }

    /// Total number of words, repeats included.
    pub fn word_count(&self) -> u64 {
        self.words
            .iter()
            .fold(0, |total, word| total.saturating_add(word.count))
    }
}

/// Contribution of one token against one needle.
///
/// Empty needles never match: every string contains `""`, and counting that would
/// make an empty query score every token.
#[inline]
pub fn match_contribution(token: &str, needle: &str, weight: Weight) -> Score {
    if needle.is_empty() {
        0
    } else if token == needle {
        Score::from(weight)
    } else if token.contains(needle) {
        Score::from(weight / 2)
    } else {
        0
    }
}

/// Contribution of one token against a parsed query.
pub fn token_score(token: &str, weight: Weight, query: &Query) -> Score {
    let whole = match_contribution(token, &query.full, weight);
    query.words.iter().fold(whole, |total, word| {
        let per_word = match_contribution(token, &word.text, weight);
        total.saturating_add(per_word.saturating_mul(word.count))
    })
}

/// Sum of `token_score` over every entry in `tokens`.
pub fn score_token_set(tokens: &TokenSet, query: &Query) -> Score {
    if query.is_empty() {
        return 0;
    }
    tokens.iter().fold(0, |total: Score, (token, weight)| {
        total.saturating_add(token_score(token, weight, query))
    })
}
