// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for index construction and lookup.
//!
//! Tokenizing, extracting, scoring and ranking are total. Only building an index
//! (duplicate ids) and resolving an id back to its entity can fail.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Two catalog entries share an identifier. Aborts the build.
    #[error("duplicate entity id '{id}' in catalog")]
    DuplicateEntity { id: String },
    /// No entity with this identifier is indexed.
    #[error("entity '{id}' not found in index")]
    NotFound { id: String },
}
