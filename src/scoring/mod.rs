// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers and their order.
//!
//! Scores are plain integer sums of attribute weights, so two results compare
//! exactly. Ranking sorts by score and breaks ties on the entity id.

mod core;
pub mod ranking;

pub use core::*;
