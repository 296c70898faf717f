// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: edit distance and the similarity scores built on it.
//!
//! `levenshtein` is the raw distance, usable on its own. `similarity` turns a
//! pair of strings into a length-normalized score so the mapper can apply one
//! cutoff across a whole reference list.

mod levenshtein;
mod similarity;

pub use levenshtein::*;
pub use similarity::*;
