//! Test fixtures shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::trie::Trie;

/// The four-word vocabulary used in most trie scenarios.
pub const ANIMALS: [&str; 4] = ["cat", "car", "cart", "dog"];

/// Master list for mapper scenarios.
pub const FRUIT_REFERENCE: [&str; 2] = ["Apple", "Banana"];

/// Misspelled input for mapper scenarios. The last entry has no close match.
pub const FRUIT_QUERY: [&str; 3] = ["Aple", "Bananna", "Cherry"];

/// Build a trie from a word list.
pub fn make_trie(words: &[&str]) -> Trie {
    words.iter().copied().collect()
}

/// Deterministic pseudo-vocabulary of `count` words over `alphabet`.
///
/// Words share prefixes heavily, which is what makes tries interesting.
pub fn synthetic_vocabulary(count: usize, alphabet: &[char]) -> Vec<String> {
    assert!(alphabet.len() > 1, "alphabet needs at least two symbols");
    (0..count)
        .map(|mut n| {
            let mut word = String::new();
            loop {
                word.push(alphabet[n % alphabet.len()]);
                n /= alphabet.len();
                if n == 0 {
                    break;
                }
            }
            word
        })
        .collect()
}

/// Sort a word list for order-insensitive comparison.
pub fn sorted(mut words: Vec<String>) -> Vec<String> {
    words.sort();
    words
}
