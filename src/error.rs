// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for the fuzzy mapper.
//!
//! The trie and the distance functions have no failure states: a missing word
//! is `false`, a missing prefix is zero. The only things that can go wrong are
//! arguments a caller got wrong, and those fail fast here instead of quietly
//! falling back to a default.

use std::fmt;

/// Invalid argument passed to the mapper or its configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum MapperError {
    /// Output mode name that is not `both`, `matched` or `filled`.
    InvalidMode(String),
    /// Scorer name that is not `ratio`, `lcs` or `levenshtein`.
    InvalidScorer(String),
    /// Similarity cutoff outside `[0, 1]` (or NaN).
    InvalidCutoff(f64),
    /// Close-match limit of zero.
    InvalidLimit(usize),
}

impl fmt::Display for MapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapperError::InvalidMode(mode) => {
                write!(
                    f,
                    "invalid mode '{}': expected 'both', 'matched' or 'filled'",
                    mode
                )
            }
            MapperError::InvalidScorer(scorer) => {
                write!(
                    f,
                    "invalid scorer '{}': expected 'ratio', 'lcs' or 'levenshtein'",
                    scorer
                )
            }
            MapperError::InvalidCutoff(cutoff) => {
                write!(f, "cutoff {} is outside [0, 1]", cutoff)
            }
            MapperError::InvalidLimit(limit) => {
                write!(f, "limit must be at least 1, got {}", limit)
            }
        }
    }
}

impl std::error::Error for MapperError {}
