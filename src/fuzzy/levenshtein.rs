// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance over symbol sequences.
//!
//! The distance is the classic suffix recurrence: past the end of one side the
//! cost is whatever is left of the other, equal symbols cost nothing, and a
//! mismatch costs one plus the cheapest of insertion, deletion or
//! substitution. Solved naively that recursion is exponential, so it is
//! tabulated here one row at a time: O(m·n) time, O(min(m, n)) space.
//!
//! A shared prefix or suffix never changes the distance, so it is stripped
//! before the table is built. When the caller only cares about distances up
//! to some budget, [`levenshtein_bounded`] gives up early: the length
//! difference is a lower bound, and the row minimum never decreases from one
//! row to the next.

use crate::contracts;

/// Edit distance between two strings, counted in `char`s.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_slice(&a, &b)
}

/// Edit distance between two sequences of any comparable symbol.
pub fn levenshtein_slice<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // An unlimited budget always yields the distance
    let distance = tabulate(a, b, usize::MAX).unwrap_or(usize::MAX);
    contracts::check_distance_bounds(a.len(), b.len(), distance);
    distance
}

/// Edit distance if it is at most `max`, `None` otherwise.
///
/// Same result as [`levenshtein_slice`] filtered by `max`, but far-apart
/// pairs are rejected without finishing the table.
pub fn levenshtein_bounded<T: PartialEq>(a: &[T], b: &[T], max: usize) -> Option<usize> {
    let distance = tabulate(a, b, max)?;
    contracts::check_distance_bounds(a.len(), b.len(), distance);
    Some(distance)
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    // Character counts, not byte lengths
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_bounded(&a, &b, max).is_some()
}

/// Two-row table over the shorter side, abandoned once every cell of a row
/// exceeds `budget`.
fn tabulate<T: PartialEq>(a: &[T], b: &[T], budget: usize) -> Option<usize> {
    let (a, b) = strip_common_affixes(a, b);
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if long.len() - short.len() > budget {
        return None;
    }
    if short.is_empty() {
        return Some(long.len());
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, x) in long.iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        let mut cheapest = row[0];

        for (j, y) in short.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if x == y {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
            cheapest = cheapest.min(row[j + 1]);
        }

        if cheapest > budget {
            return None;
        }
    }

    let distance = row[short.len()];
    (distance <= budget).then_some(distance)
}

fn strip_common_affixes<'a, T: PartialEq>(a: &'a [T], b: &'a [T]) -> (&'a [T], &'a [T]) {
    let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let (a, b) = (&a[prefix..], &b[prefix..]);
    let suffix = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    (&a[..a.len() - suffix], &b[..b.len() - suffix])
}
