// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for trie insert/remove scripts.
//!
//! Replays an arbitrary sequence of operations against both the trie and a
//! `BTreeSet` model and checks they never disagree. Removal prunes branches,
//! so a wrong prune shows up as a vanished neighbour.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lexis::Trie;
use std::collections::BTreeSet;

#[derive(Debug, Arbitrary)]
enum Op {
    Insert(String),
    Remove(String),
    Count(String),
    Complete(String),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut trie = Trie::new();
    let mut model: BTreeSet<String> = BTreeSet::new();

    // Cap script length to avoid timeouts
    for op in ops.into_iter().take(256) {
        match op {
            Op::Insert(word) => {
                assert_eq!(trie.insert(&word), model.insert(word.clone()));
            }
            Op::Remove(word) => {
                assert_eq!(
                    trie.remove(&word),
                    model.remove(&word),
                    "remove disagreed for {:?}",
                    word
                );
            }
            Op::Count(prefix) => {
                let expected = model.iter().filter(|w| w.starts_with(&prefix)).count();
                assert_eq!(trie.count_with_prefix(&prefix), expected);
                assert_eq!(trie.starts_with(&prefix), expected > 0);
            }
            Op::Complete(prefix) => {
                let got: BTreeSet<String> = trie.autocomplete(&prefix).into_iter().collect();
                let expected: BTreeSet<String> = model
                    .iter()
                    .filter(|w| w.starts_with(&prefix))
                    .cloned()
                    .collect();
                assert_eq!(got, expected, "autocomplete disagreed for {:?}", prefix);
            }
        }
        assert_eq!(trie.len(), model.len());
    }

    for word in &model {
        assert!(trie.contains(word), "lost word {:?}", word);
    }
});
