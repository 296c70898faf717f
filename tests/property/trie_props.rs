//! Trie properties against a `BTreeSet` model.

use super::common::{assert_holds_exactly, word_set};
use lexis::Trie;
use proptest::prelude::*;
use std::collections::BTreeSet;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short words over a tiny alphabet so that prefixes collide often.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,5}").unwrap()
}

fn vocabulary_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..40)
}

// ============================================================================
// MEMBERSHIP
// ============================================================================

proptest! {
    /// Property: every inserted word is contained.
    #[test]
    fn prop_inserted_words_contained(words in vocabulary_strategy()) {
        let trie: Trie = words.iter().map(String::as_str).collect();
        for word in &words {
            prop_assert!(trie.contains(word));
        }
    }

    /// Property: a word that was never inserted is not contained.
    #[test]
    fn prop_absent_words_not_contained(
        words in vocabulary_strategy(),
        query in word_strategy()
    ) {
        let trie: Trie = words.iter().map(String::as_str).collect();
        prop_assert_eq!(trie.contains(&query), words.contains(&query));
    }

    /// Property: starts_with is true exactly when some word has the prefix.
    #[test]
    fn prop_starts_with_matches_model(
        words in vocabulary_strategy(),
        prefix in word_strategy()
    ) {
        let trie: Trie = words.iter().map(String::as_str).collect();
        let expected = words.iter().any(|w| w.starts_with(prefix.as_str()));
        prop_assert_eq!(trie.starts_with(&prefix), expected);
    }
}

// ============================================================================
// REMOVAL
// ============================================================================

proptest! {
    /// Property: removing an absent word is a no-op returning false.
    #[test]
    fn prop_remove_absent_is_noop(
        words in vocabulary_strategy(),
        query in word_strategy()
    ) {
        prop_assume!(!words.contains(&query));
        let mut trie: Trie = words.iter().map(String::as_str).collect();
        let before = trie.clone();
        prop_assert!(!trie.remove(&query));
        prop_assert_eq!(trie, before);
    }

    /// Property: removing a present word affects only that word.
    #[test]
    fn prop_remove_present_is_isolated(
        words in prop::collection::vec(word_strategy(), 1..40),
        pick in any::<prop::sample::Index>()
    ) {
        let mut trie: Trie = words.iter().map(String::as_str).collect();
        let target = pick.get(&words).clone();

        prop_assert!(trie.remove(&target));
        prop_assert!(!trie.contains(&target));

        let mut expected: BTreeSet<String> = words.iter().cloned().collect();
        expected.remove(&target);
        assert_holds_exactly(&trie, &expected);
    }

    /// Property: inserting then removing a fresh word restores the trie,
    /// pruned branches included.
    #[test]
    fn prop_insert_remove_roundtrip_restores_structure(
        words in vocabulary_strategy(),
        extra in word_strategy()
    ) {
        prop_assume!(!words.contains(&extra));
        let original: Trie = words.iter().map(String::as_str).collect();
        let mut trie = original.clone();

        trie.insert(&extra);
        prop_assert!(trie.remove(&extra));
        prop_assert_eq!(trie, original);
    }

    /// Property: count("") tracks distinct inserts minus successful removals.
    #[test]
    fn prop_count_tracks_operations(
        script in prop::collection::vec((any::<bool>(), word_strategy()), 0..80)
    ) {
        let mut trie = Trie::new();
        let mut live = BTreeSet::new();
        for (insert, word) in script {
            if insert {
                trie.insert(&word);
                live.insert(word);
            } else if trie.remove(&word) {
                live.remove(&word);
            }
            prop_assert_eq!(trie.count_with_prefix(""), live.len());
        }
    }
}

// ============================================================================
// ENUMERATION
// ============================================================================

proptest! {
    /// Property: autocomplete returns exactly the live words with the prefix.
    #[test]
    fn prop_autocomplete_is_filtered_vocabulary(
        words in vocabulary_strategy(),
        prefix in "[abc]{0,3}"
    ) {
        let trie: Trie = words.iter().map(String::as_str).collect();
        let completed: BTreeSet<String> = trie.autocomplete(&prefix).into_iter().collect();
        let expected: BTreeSet<String> = word_set(&trie)
            .into_iter()
            .filter(|w| w.starts_with(prefix.as_str()))
            .collect();

        prop_assert_eq!(completed.len(), trie.count_with_prefix(&prefix));
        prop_assert_eq!(completed, expected);
    }

    /// Property: enumeration yields no duplicates.
    #[test]
    fn prop_words_are_distinct(words in vocabulary_strategy()) {
        let trie: Trie = words.iter().map(String::as_str).collect();
        let listed = trie.words();
        let distinct: BTreeSet<&String> = listed.iter().collect();
        prop_assert_eq!(listed.len(), distinct.len());
    }
}
