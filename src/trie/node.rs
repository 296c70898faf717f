// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The node type behind [`Trie`](super::Trie).
//!
//! A node is a tagged pair: the outgoing edges keyed by symbol, and a flag that
//! says whether a word ends here. There is no sentinel child standing in for
//! "end of word", so any `char` can appear in a stored word.
//!
//! Children are owned directly by their parent. Dropping a node drops its whole
//! subtree, and no subtree can ever be reached by two paths.
//!
//! Tree depth equals the length of the longest word, which is unbounded. None
//! of the traversals here recurse: walks use an explicit stack, removal is a
//! descent plus a single edge cut, and `Clone`, `PartialEq` and `Drop` are
//! written out by hand because the derived versions recurse per level.

use std::collections::btree_map;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub(crate) struct Node {
    pub(crate) children: BTreeMap<char, Node>,
    pub(crate) terminal: bool,
}

impl Node {
    /// Follow `path` from this node, returning the node it ends at.
    pub(crate) fn descend(&self, path: &str) -> Option<&Node> {
        path.chars()
            .try_fold(self, |node, symbol| node.children.get(&symbol))
    }

    fn descend_mut(&mut self, path: &[char]) -> Option<&mut Node> {
        path.iter()
            .try_fold(self, |node, symbol| node.children.get_mut(symbol))
    }

    /// Follow `path`, creating missing edges on the way.
    pub(crate) fn descend_or_create(&mut self, path: &str) -> &mut Node {
        path.chars()
            .fold(self, |node, symbol| node.children.entry(symbol).or_default())
    }

    /// Number of terminal nodes in this subtree, this node included.
    pub(crate) fn count_terminals(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += usize::from(node.terminal);
            pending.extend(node.children.values());
        }
        count
    }

    /// A node that ends no word and leads nowhere.
    pub(crate) fn is_dangling(&self) -> bool {
        !self.terminal && self.children.is_empty()
    }

    /// Remove the word spelled by `word`, returning `true` if it was present.
    ///
    /// If the word's node still leads to longer words only its flag is
    /// cleared. Otherwise the chain of nodes that existed only for this word
    /// hangs off a single edge below the deepest ancestor that ends another
    /// word or branches, and that one edge is cut.
    pub(crate) fn remove(&mut self, word: &str) -> bool {
        let symbols: Vec<char> = word.chars().collect();

        // Depth of the deepest node on the path that must survive
        let mut anchor = 0;
        let mut node: &Node = self;
        for (depth, symbol) in symbols.iter().enumerate() {
            if node.terminal || node.children.len() > 1 {
                anchor = depth;
            }
            match node.children.get(symbol) {
                Some(child) => node = child,
                None => return false,
            }
        }
        if !node.terminal {
            return false;
        }

        if symbols.is_empty() || !node.children.is_empty() {
            if let Some(target) = self.descend_mut(&symbols) {
                target.terminal = false;
            }
            return true;
        }

        if let Some(keep) = self.descend_mut(&symbols[..anchor]) {
            keep.children.remove(&symbols[anchor]);
        }
        true
    }

    /// Depth-first walk over every word in this subtree, in symbol order.
    ///
    /// `buffer` holds the symbols spelled so far and is restored before
    /// returning. `visit` sees each word with the buffer as its text.
    pub(crate) fn walk<F>(&self, buffer: &mut String, visit: &mut F)
    where
        F: FnMut(&str),
    {
        enum Step<'n> {
            Enter(Option<char>, &'n Node),
            Leave,
        }

        let mut pending = vec![Step::Enter(None, self)];
        while let Some(step) = pending.pop() {
            match step {
                Step::Leave => {
                    buffer.pop();
                }
                Step::Enter(symbol, node) => {
                    if let Some(symbol) = symbol {
                        buffer.push(symbol);
                        pending.push(Step::Leave);
                    }
                    if node.terminal {
                        visit(buffer);
                    }
                    // Reversed so the smallest symbol is popped first
                    for (&symbol, child) in node.children.iter().rev() {
                        pending.push(Step::Enter(Some(symbol), child));
                    }
                }
            }
        }
    }
}

/// A node being copied: its source, the source children not yet visited, and
/// the copies finished so far.
struct CloneFrame<'n> {
    edge: Option<char>,
    source: &'n Node,
    remaining: btree_map::Iter<'n, char, Node>,
    built: BTreeMap<char, Node>,
}

impl<'n> CloneFrame<'n> {
    fn new(edge: Option<char>, source: &'n Node) -> Self {
        Self {
            edge,
            source,
            remaining: source.children.iter(),
            built: BTreeMap::new(),
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        // Post-order: a copy is assembled once all of its children are
        let mut pending = vec![CloneFrame::new(None, self)];
        while let Some(frame) = pending.last_mut() {
            if let Some((&symbol, child)) = frame.remaining.next() {
                pending.push(CloneFrame::new(Some(symbol), child));
                continue;
            }

            let Some(done) = pending.pop() else { break };
            let copy = Node {
                children: done.built,
                terminal: done.source.terminal,
            };
            match (done.edge, pending.last_mut()) {
                (Some(symbol), Some(parent)) => {
                    parent.built.insert(symbol, copy);
                }
                _ => return copy,
            }
        }
        Node::default()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.terminal != right.terminal || left.children.len() != right.children.len() {
                return false;
            }
            for ((a, left_child), (b, right_child)) in left.children.iter().zip(&right.children) {
                if a != b {
                    return false;
                }
                pending.push((left_child, right_child));
            }
        }
        true
    }
}

impl Eq for Node {}

impl Drop for Node {
    fn drop(&mut self) {
        // Detach children before they drop, so each drop sees an empty map
        let mut pending: Vec<Node> = std::mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(std::mem::take(&mut node.children).into_values());
        }
    }
}
