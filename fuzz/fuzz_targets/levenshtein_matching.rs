// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance.
//!
//! Checks the metric laws on arbitrary UTF-8, and that the bounded check
//! agrees with the full distance. Distances are counted in chars, so
//! multi-byte input is where off-by-one errors live.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lexis::{lcs_len, levenshtein, levenshtein_within, matching_symbols, similarity, Scorer};

/// Fuzz input for edit distance
#[derive(Debug, Arbitrary)]
struct DistanceInput {
    a: String,
    b: String,
    c: String,
    k: u8,
}

fn capped(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts
    let a = capped(&input.a, 64);
    let b = capped(&input.b, 64);
    let c = capped(&input.c, 64);
    let k = usize::from(input.k % 16);

    let ab = levenshtein(&a, &b);
    let len_a = a.chars().count();
    let len_b = b.chars().count();

    // Identity and symmetry
    assert_eq!(levenshtein(&a, &a), 0);
    assert_eq!(ab, levenshtein(&b, &a), "asymmetric for {:?} / {:?}", a, b);

    // Bounds: length difference <= distance <= longer length
    assert!(len_a.abs_diff(len_b) <= ab);
    assert!(ab <= len_a.max(len_b));

    // Triangle inequality
    let ac = levenshtein(&a, &c);
    let cb = levenshtein(&c, &b);
    assert!(ab <= ac + cb, "triangle violated for {:?} {:?} {:?}", a, b, c);

    // Bounded check agrees with the full distance
    assert_eq!(levenshtein_within(&a, &b, k), ab <= k);

    for scorer in [Scorer::Ratio, Scorer::Lcs, Scorer::Levenshtein] {
        let score = similarity(&a, &b, scorer);
        assert!((0.0..=1.0).contains(&score), "{} score {} out of range", scorer, score);
    }

    // Matching blocks are a common subsequence
    let (ac, bc): (Vec<char>, Vec<char>) = (a.chars().collect(), b.chars().collect());
    assert!(matching_symbols(&ac, &bc) <= lcs_len(&ac, &bc));
});
