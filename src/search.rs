// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query evaluation over a built index.
//!
//! `score_all` visits every entity and returns a result for each one, zero scores
//! included. Filtering out non-matches is left to whoever displays results.

use crate::index::Index;
use crate::scoring::ranking::rank;
use crate::scoring::{score_token_set, Query};
use crate::types::ScoredResult;

/// Score every entity in `index` against `query`, in index (id) order.
pub fn score_all(index: &Index, query: &str) -> Vec<ScoredResult> {
    let query = Query::parse(query);
    tracing::trace!(query = %query.full, words = query.word_count(), "scoring query");

    index
        .iter()
        .map(|(id, entry)| {
            let score = score_token_set(&entry.tokens, &query);
            ScoredResult::new(id, score)
        })
        .collect()
}

/// Score and rank in one step.
pub fn search(index: &Index, query: &str) -> Vec<ScoredResult> {
    rank(score_all(index, query))
}
