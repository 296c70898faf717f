//! Edit distance and similarity properties.

use lexis::{
    lcs_len, levenshtein, levenshtein_bounded, levenshtein_slice, levenshtein_within,
    matching_symbols, similarity, Scorer,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{0,10}").unwrap()
}

/// Mixed-script words, so that byte and char lengths disagree.
fn unicode_word_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['a', 'b', 'é', 'ï', 'ā', 'త', '東']),
        0..8,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn scorer_strategy() -> impl Strategy<Value = Scorer> {
    prop_oneof![Just(Scorer::Ratio), Just(Scorer::Lcs), Just(Scorer::Levenshtein)]
}

// ============================================================================
// LEVENSHTEIN PROPERTIES
// ============================================================================

proptest! {
    /// Property: distance(a, a) == 0
    #[test]
    fn prop_identity(a in unicode_word_strategy()) {
        prop_assert_eq!(levenshtein(&a, &a), 0);
    }

    /// Property: distance("", b) == len(b), counted in chars
    #[test]
    fn prop_empty_side(b in unicode_word_strategy()) {
        let len = b.chars().count();
        prop_assert_eq!(levenshtein("", &b), len);
        prop_assert_eq!(levenshtein(&b, ""), len);
    }

    /// Property: distance is symmetric
    #[test]
    fn prop_symmetric(a in unicode_word_strategy(), b in unicode_word_strategy()) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
    }

    /// Property: agrees with strsim on every input
    #[test]
    fn prop_matches_oracle(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(levenshtein(&a, &b), strsim::levenshtein(&a, &b));
    }

    /// Property: appending the same symbol to both sides changes nothing
    #[test]
    fn prop_shared_suffix_free(a in word_strategy(), b in word_strategy(), tail in word_strategy()) {
        let with_tail = levenshtein(&format!("{a}{tail}"), &format!("{b}{tail}"));
        prop_assert_eq!(with_tail, levenshtein(&a, &b));
    }

    /// Property: slice and str entry points agree
    #[test]
    fn prop_slice_matches_str(a in unicode_word_strategy(), b in unicode_word_strategy()) {
        let ac: Vec<char> = a.chars().collect();
        let bc: Vec<char> = b.chars().collect();
        prop_assert_eq!(levenshtein_slice(&ac, &bc), levenshtein(&a, &b));
    }

    /// Property: levenshtein_within(a, b, k) <=> distance(a, b) <= k
    #[test]
    fn prop_within_is_threshold(
        a in word_strategy(),
        b in word_strategy(),
        k in 0usize..6
    ) {
        prop_assert_eq!(levenshtein_within(&a, &b, k), levenshtein(&a, &b) <= k);
    }

    /// Property: the bounded distance is the distance, filtered by the budget
    #[test]
    fn prop_bounded_is_filtered_distance(
        a in unicode_word_strategy(),
        b in unicode_word_strategy(),
        k in 0usize..8
    ) {
        let ac: Vec<char> = a.chars().collect();
        let bc: Vec<char> = b.chars().collect();
        let d = levenshtein(&a, &b);
        prop_assert_eq!(levenshtein_bounded(&ac, &bc, k), (d <= k).then_some(d));
    }
}

// ============================================================================
// SIMILARITY PROPERTIES
// ============================================================================

proptest! {
    /// Property: scores stay in [0, 1]
    #[test]
    fn prop_similarity_bounded(
        a in unicode_word_strategy(),
        b in unicode_word_strategy(),
        scorer in scorer_strategy()
    ) {
        let ab = similarity(&a, &b, scorer);
        prop_assert!((0.0..=1.0).contains(&ab));
    }

    /// Property: the subsequence and edit scores ignore argument order
    #[test]
    fn prop_lcs_and_edit_scores_symmetric(
        a in unicode_word_strategy(),
        b in unicode_word_strategy()
    ) {
        for scorer in [Scorer::Lcs, Scorer::Levenshtein] {
            let ab = similarity(&a, &b, scorer);
            prop_assert!((ab - similarity(&b, &a, scorer)).abs() < 1e-12);
        }
    }

    /// Property: matching blocks form a common subsequence, so they never
    /// pair more symbols than the LCS
    #[test]
    fn prop_blocks_bounded_by_lcs(a in word_strategy(), b in word_strategy()) {
        let (ac, bc) = (a.as_bytes(), b.as_bytes());
        prop_assert!(matching_symbols(ac, bc) <= lcs_len(ac, bc));
        prop_assert!(similarity(&a, &b, Scorer::Ratio) <= similarity(&a, &b, Scorer::Lcs));
    }

    /// Property: cutoff-aware scoring returns the plain score or nothing
    #[test]
    fn prop_score_at_least_filters_score(
        a in word_strategy(),
        b in word_strategy(),
        scorer in scorer_strategy(),
        cutoff in 0.0f64..=1.0
    ) {
        let ac: Vec<char> = a.chars().collect();
        let bc: Vec<char> = b.chars().collect();
        let score = scorer.score(&ac, &bc);
        prop_assert_eq!(
            scorer.score_at_least(&ac, &bc, cutoff),
            (score >= cutoff).then_some(score)
        );
    }

    /// Property: a string is perfectly similar to itself
    #[test]
    fn prop_similarity_identity(a in unicode_word_strategy(), scorer in scorer_strategy()) {
        prop_assert_eq!(similarity(&a, &a, scorer), 1.0);
    }

    /// Property: LCS never exceeds the shorter input
    #[test]
    fn prop_lcs_bounded(a in word_strategy(), b in word_strategy()) {
        let lcs = lcs_len(a.as_bytes(), b.as_bytes());
        prop_assert!(lcs <= a.len().min(b.len()));
    }
}
