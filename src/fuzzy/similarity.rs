// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalized similarity scores in `[0, 1]`.
//!
//! Edit distance alone cannot be compared across pairs of different lengths:
//! one typo in a three letter word is worse than one typo in a twelve letter
//! word. Every scorer here divides by length so that a single cutoff works for
//! the whole reference list.
//!
//! | Scorer        | Formula                             | `"Aple"` vs `"Apple"` | `"ddd"` vs `"daadd"` |
//! |---------------|-------------------------------------|-----------------------|----------------------|
//! | `Ratio`       | `2 · M / (m + n)`, M = block total  | 0.889                 | 0.500                |
//! | `Lcs`         | `2 · LCS / (m + n)`                 | 0.889                 | 0.750                |
//! | `Levenshtein` | `1 - distance / max(m, n)`          | 0.800                 | 0.600                |
//!
//! `Ratio` is the Ratcliff/Obershelp "gestalt" score used by sequence-matcher
//! close-match helpers: take the longest common run, then repeat on what is
//! left on either side of it. Greedy runs can miss symbols a subsequence would
//! pair up, so `Ratio <= Lcs` always.
//!
//! Two empty sequences are identical and score 1.0 under every scorer.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{levenshtein_bounded, levenshtein_slice};
use crate::contracts;
use crate::error::MapperError;

/// How two strings are compared when looking for a close match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scorer {
    /// Ratcliff/Obershelp matching blocks: `2 · M / (m + n)`.
    #[default]
    Ratio,
    /// Longest-common-subsequence ratio: `2 · LCS / (m + n)`.
    Lcs,
    /// Normalized edit distance: `1 - distance / max(m, n)`.
    Levenshtein,
}

impl Scorer {
    /// Score a candidate `a` against a query `b`.
    ///
    /// `Lcs` and `Levenshtein` are symmetric. `Ratio` breaks ties between
    /// equally long runs by position in `a`, so swapping the arguments can
    /// change the score.
    pub fn score<T: PartialEq>(self, a: &[T], b: &[T]) -> f64 {
        let score = match self {
            Scorer::Ratio => block_ratio(a, b),
            Scorer::Lcs => lcs_ratio(a, b),
            Scorer::Levenshtein => levenshtein_ratio(a, b),
        };
        contracts::check_score_range(score);
        score
    }

    /// Score `a` against `b`, or `None` if the score is below `cutoff`.
    ///
    /// Returns exactly what [`score`](Self::score) would have. The
    /// Levenshtein scorer turns the cutoff into an edit budget and stops
    /// tabulating once the pair is out of reach.
    pub fn score_at_least<T: PartialEq>(self, a: &[T], b: &[T], cutoff: f64) -> Option<f64> {
        let score = match self {
            Scorer::Levenshtein => {
                let longest = a.len().max(b.len());
                if longest == 0 {
                    1.0
                } else {
                    // One spare edit absorbs rounding; the exact score is compared below
                    let budget = ((1.0 - cutoff) * longest as f64).floor() as usize + 1;
                    let distance = levenshtein_bounded(a, b, budget)?;
                    1.0 - distance as f64 / longest as f64
                }
            }
            _ => self.score(a, b),
        };
        contracts::check_score_range(score);
        (score >= cutoff).then_some(score)
    }
}

impl fmt::Display for Scorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scorer::Ratio => write!(f, "ratio"),
            Scorer::Lcs => write!(f, "lcs"),
            Scorer::Levenshtein => write!(f, "levenshtein"),
        }
    }
}

impl FromStr for Scorer {
    type Err = MapperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ratio" | "gestalt" => Ok(Scorer::Ratio),
            "lcs" => Ok(Scorer::Lcs),
            "levenshtein" | "edit" => Ok(Scorer::Levenshtein),
            _ => Err(MapperError::InvalidScorer(s.to_string())),
        }
    }
}

/// Similarity of candidate `a` and query `b` under `scorer`, compared by `char`.
pub fn similarity(a: &str, b: &str, scorer: Scorer) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    scorer.score(&a, &b)
}

/// Total length of the Ratcliff/Obershelp matching blocks of `a` and `b`.
///
/// The longest common run is taken first (earliest in `a`, then earliest in
/// `b`, among equals), then the same search runs on the unmatched pieces to
/// its left and to its right.
pub fn matching_symbols<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut total = 0;
    let mut pending: Vec<(Range<usize>, Range<usize>)> = vec![(0..a.len(), 0..b.len())];

    while let Some((in_a, in_b)) = pending.pop() {
        let (i, j, len) = longest_run(&a[in_a.clone()], &b[in_b.clone()]);
        if len == 0 {
            continue;
        }
        total += len;

        let (i, j) = (in_a.start + i, in_b.start + j);
        pending.push((in_a.start..i, in_b.start..j));
        pending.push((i + len..in_a.end, j + len..in_b.end));
    }

    total
}

/// Longest common contiguous run as `(start in a, start in b, length)`.
fn longest_run<T: PartialEq>(a: &[T], b: &[T]) -> (usize, usize, usize) {
    // run[j + 1]: length of the common run ending at the current a symbol and b[j]
    let mut run = vec![0usize; b.len() + 1];
    let mut best = (0, 0, 0);

    for (i, x) in a.iter().enumerate() {
        let mut diagonal = 0;
        for (j, y) in b.iter().enumerate() {
            let above = run[j + 1];
            run[j + 1] = if x == y { diagonal + 1 } else { 0 };
            diagonal = above;

            let len = run[j + 1];
            if len > best.2 {
                best = (i + 1 - len, j + 1 - len, len);
            }
        }
    }

    best
}

/// Length of the longest common subsequence.
pub fn lcs_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut row = vec![0usize; short.len() + 1];

    for x in long {
        let mut diagonal = 0;
        for (j, y) in short.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if x == y {
                diagonal + 1
            } else {
                above.max(row[j])
            };
            diagonal = above;
        }
    }

    row[short.len()]
}

fn ratio_of(matched: usize, a_len: usize, b_len: usize) -> f64 {
    let total = a_len + b_len;
    if total == 0 {
        return 1.0;
    }
    2.0 * matched as f64 / total as f64
}

fn block_ratio<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    ratio_of(matching_symbols(a, b), a.len(), b.len())
}

fn lcs_ratio<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    ratio_of(lcs_len(a, b), a.len(), b.len())
}

fn levenshtein_ratio<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein_slice(a, b) as f64 / longest as f64
}
