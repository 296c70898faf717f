// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix tree over `char` symbols.
//!
//! The trie answers the questions an autocomplete box asks while the user
//! types: is this a word, is it the start of one, how many words start here,
//! and which ones. Absence is never an error. A missing word is `false`, a
//! missing prefix counts zero words and completes to nothing.
//!
//! ```text
//!            (root)
//!           /      \
//!          c        d
//!          |        |
//!          a        o
//!         / \       |
//!       [r]  [t]   [g]          [x] = terminal (a word ends here)
//!        |
//!       [t]
//! ```
//!
//! Removing `car` from the tree above clears the flag on `r` but keeps the
//! node, because `cart` still runs through it. Removing `dog` afterwards
//! prunes `g`, `o` and `d`, since none of them end or lead to another word.
//!
//! # Ordering
//!
//! Enumeration is a depth-first walk and yields words in the order of the
//! child map. Callers that present results should sort them.

mod node;

use std::fmt;

use crate::contracts;
pub(crate) use node::Node;

/// Mutable set of words stored as a prefix tree.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Trie {
    root: Node,
    len: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of words currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every word.
    pub fn clear(&mut self) {
        self.root = Node::default();
        self.len = 0;
    }

    /// Insert `word`, returning `true` if it was not already present.
    ///
    /// The empty word is a valid word: it marks the root.
    pub fn insert(&mut self, word: &str) -> bool {
        let node = self.root.descend_or_create(word);
        let added = !node.terminal;
        node.terminal = true;
        if added {
            self.len += 1;
        }
        added
    }

    /// Is `word` stored as a complete word?
    pub fn contains(&self, word: &str) -> bool {
        self.root.descend(word).is_some_and(|node| node.terminal)
    }

    /// Does any stored word start with `prefix`?
    ///
    /// Only the path matters. After `insert("cart")`, `starts_with("car")` is
    /// true even though `car` itself is not a word.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.root.descend(prefix).is_some()
    }

    /// Count the stored words that start with `prefix`.
    ///
    /// The prefix itself counts when it is a word. The empty prefix counts
    /// everything.
    pub fn count_with_prefix(&self, prefix: &str) -> usize {
        self.root.descend(prefix).map_or(0, Node::count_terminals)
    }

    /// Remove `word`, returning `true` if it was present.
    ///
    /// Nodes left behind with no children and no word ending at them are
    /// pruned. An absent word leaves the trie untouched.
    pub fn remove(&mut self, word: &str) -> bool {
        let removed = self.root.remove(word);
        if removed {
            self.len -= 1;
            tracing::trace!(word, remaining = self.len, "removed word from trie");
        }

        contracts::check_trie_well_formed(&self.root);
        contracts::check_trie_len(&self.root, self.len);

        removed
    }

    /// Every stored word starting with `prefix`, prefix included.
    ///
    /// Returns an empty vector when no word has this prefix.
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        let Some(start) = self.root.descend(prefix) else {
            return Vec::new();
        };

        let mut words = Vec::new();
        let mut buffer = prefix.to_string();
        start.walk(&mut buffer, &mut |word| words.push(word.to_string()));
        words
    }

    /// Every stored word.
    pub fn words(&self) -> Vec<String> {
        self.autocomplete("")
    }

    /// Every stored word, each paired with whether it starts with `prefix`.
    ///
    /// Unlike [`autocomplete`](Self::autocomplete) nothing is filtered out, so
    /// the caller sees the whole vocabulary with matches flagged.
    pub fn words_annotated(&self, prefix: &str) -> Vec<(String, bool)> {
        let mut words = Vec::with_capacity(self.len);
        let mut buffer = String::new();
        self.root.walk(&mut buffer, &mut |word| {
            words.push((word.to_string(), word.starts_with(prefix)));
        });
        words
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.words()).finish()
    }
}

impl<'a> Extend<&'a str> for Trie {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl Extend<String> for Trie {
    fn extend<I: IntoIterator<Item = String>>(&mut self, words: I) {
        for word in words {
            self.insert(&word);
        }
    }
}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(words);
        trie
    }
}

impl FromIterator<String> for Trie {
    fn from_iter<I: IntoIterator<Item = String>>(words: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(words);
        trie
    }
}
