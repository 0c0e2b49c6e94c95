// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Splitting free text into normalized tokens.
//!
//! A token is a maximal run of letters and digits in the lowercased text. Everything
//! else (whitespace, punctuation, symbols, combining marks) separates tokens.
//!
//! Lowercasing comes first. Some characters lowercase to more than one char, and not
//! all of those are alphanumeric: `İ` becomes `i` followed by U+0307, a combining
//! dot. Splitting after lowercasing means that mark acts as a separator, so every
//! token is made of letters and digits only and tokenizing a token gives it back.

/// Lowercase and trim a whole string.
///
/// This is the normalization applied to a query before it is compared against tokens.
/// Unlike `tokenize`, it keeps inner separators: `" Mk1 Pod "` becomes `"mk1 pod"`.
pub fn normalize(value: &str) -> String {
    value.to_lowercase().trim().to_string()
}

#[inline]
fn is_separator(c: char) -> bool {
    !c.is_alphanumeric()
}

/// Split `text` into normalized tokens.
///
/// The returned iterator owns its tokens and holds no other state, so calling
/// `tokenize` again on the same input yields the same sequence.
///
/// ```
/// use tagrank::tokenize;
///
/// let tokens: Vec<String> = tokenize("Mk1 Command-Pod (crew: 1)").collect();
/// assert_eq!(tokens, ["mk1", "command", "pod", "crew", "1"]);
/// ```
pub fn tokenize(text: &str) -> impl Iterator<Item = String> {
    text.to_lowercase()
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>()
        .into_iter()
}
