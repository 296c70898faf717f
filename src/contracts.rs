//! Runtime contracts for the trie and the distance functions.
//!
//! These are debug-mode assertions:
//!
//! 1. **Zero-cost in release builds**: the walks are behind
//!    `cfg!(debug_assertions)` and the checks use `debug_assert!`.
//! 2. **Early failure detection**: a broken prune or an off-by-one in the DP
//!    row panics at the call that caused it, not three queries later.
//!
//! | Contract                  | Property                                        |
//! |---------------------------|-------------------------------------------------|
//! | `check_trie_well_formed`  | No reachable non-root node is dangling          |
//! | `check_trie_len`          | Cached word count equals terminal node count    |
//! | `check_distance_bounds`   | `|m - n| <= d <= max(m, n)`                     |
//! | `check_score_range`       | Similarity is a finite value in `[0, 1]`        |

use crate::trie::Node;

// ============================================================================
// TRIE CONTRACTS
// ============================================================================

/// Check that removal left no dangling branch behind.
///
/// The root is exempt: an empty trie is a childless, non-terminal root.
///
/// # Panics (debug builds only)
/// Panics on the first non-root node with no children and no word ending.
#[inline]
pub(crate) fn check_trie_well_formed(root: &Node) {
    if cfg!(debug_assertions) {
        let mut pending: Vec<(&Node, usize)> =
            root.children.values().map(|child| (child, 1)).collect();
        while let Some((node, depth)) = pending.pop() {
            debug_assert!(
                !node.is_dangling(),
                "Contract violation: dangling trie node at depth {}",
                depth
            );
            pending.extend(node.children.values().map(|child| (child, depth + 1)));
        }
    }
}

/// Check that the cached length matches the tree.
///
/// # Panics (debug builds only)
/// Panics if `len` differs from the number of terminal nodes.
#[inline]
pub(crate) fn check_trie_len(root: &Node, len: usize) {
    if cfg!(debug_assertions) {
        let counted = root.count_terminals();
        debug_assert_eq!(
            counted, len,
            "Contract violation: trie len {} but {} terminal nodes",
            len, counted
        );
    }
}

// ============================================================================
// DISTANCE CONTRACTS
// ============================================================================

/// Check the trivial bounds on edit distance.
///
/// The length difference is a lower bound (that many insertions are needed
/// anyway) and the longer length is an upper bound (substitute the overlap,
/// insert the rest).
#[inline]
pub(crate) fn check_distance_bounds(a_len: usize, b_len: usize, distance: usize) {
    debug_assert!(
        distance >= a_len.abs_diff(b_len),
        "Contract violation: distance {} below length difference of {} and {}",
        distance,
        a_len,
        b_len
    );
    debug_assert!(
        distance <= a_len.max(b_len),
        "Contract violation: distance {} above max length of {} and {}",
        distance,
        a_len,
        b_len
    );
}

#[inline]
pub(crate) fn check_score_range(score: f64) {
    debug_assert!(
        (0.0..=1.0).contains(&score),
        "Contract violation: similarity {} outside [0, 1]",
        score
    );
}
