// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored results get sorted.
//!
//! Higher score first. Equal scores fall back to the entity id, ascending, so the
//! order never depends on how the index happened to iterate.

use crate::types::ScoredResult;
use std::cmp::Ordering;

/// Compare two scored results for ranking.
///
/// Sort order:
/// 1. **Score** - descending (higher wins)
/// 2. **Id** - ascending, lexicographic
pub fn compare_results(a: &ScoredResult, b: &ScoredResult) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.id.cmp(&b.id))
}

/// Sort results into ranking order.
pub fn rank(mut results: Vec<ScoredResult>) -> Vec<ScoredResult> {
    results.sort_by(compare_results);
    crate::contracts::check_ranked_order(&results);
    results
}
