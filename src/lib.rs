// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory weighted token index with deterministic ranking.
//!
//! Every entity in a catalog is reduced to a set of tokens, each weighted by the
//! attribute it first appeared in (title 12, name 6, tags 4, description 2). A query
//! is scored against every entity by exact and substring token matches, and the
//! results are sorted by score with the entity id as tiebreaker.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ tokenize.rs │────▶│  extract.rs  │────▶│  index.rs   │────▶│  search.rs  │
//! │ (tokenize,  │     │  (extract,   │     │ (Index,     │     │ (score_all, │
//! │  normalize) │     │   TokenSet)  │     │  lookup)    │     │  search)    │
//! └─────────────┘     └──────────────┘     └─────────────┘     └─────────────┘
//!                                                                     │
//!                                                                     ▼
//!                                          ┌──────────────────────────────────┐
//!                                          │ scoring/ (match_contribution,    │
//!                                          │           rank, compare_results) │
//!                                          └──────────────────────────────────┘
//! ```
//!
//! `engine.rs` ties catalog, configuration and index together for callers that
//! toggle options at runtime.
//!
//! # Usage
//!
//! ```
//! use tagrank::{Entity, Index, IndexConfig, search};
//!
//! let pod = Entity {
//!     id: "p1".into(),
//!     title: "Mk1 Pod".into(),
//!     name: "mk1Pod".into(),
//!     tags: "?internal command crew".into(),
//!     description: "A small pod.".into(),
//! };
//! let index = Index::build(vec![pod], IndexConfig::default()).unwrap();
//!
//! let results = search(&index, "pod");
//! assert_eq!(results[0].id, "p1");
//! assert_eq!(results[0].score, 30);
//! ```

// Module declarations
pub mod contracts;
mod engine;
mod error;
mod extract;
mod index;
mod scoring;
mod search;
pub mod testing;
mod tokenize;
mod types;

// Re-exports for public API
pub use engine::{Match, SearchEngine};
pub use error::IndexError;
pub use extract::extract;
pub use index::{Index, IndexedEntity};
pub use scoring::ranking::{compare_results, rank};
pub use scoring::{match_contribution, score_token_set, token_score, Query, QueryWord};
pub use search::{score_all, search};
pub use tokenize::{normalize, tokenize};
pub use types::{
    Attribute, Entity, IndexConfig, Score, ScoredResult, TokenSet, Weight, DESCRIPTION_WEIGHT,
    NAME_WEIGHT, TAGS_WEIGHT, TITLE_WEIGHT,
};
