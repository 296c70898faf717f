//! Mapper output shape properties.

use lexis::{FuzzyMapper, MapMode, MapOutput};
use proptest::prelude::*;

fn list_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[a-dA-D]{0,6}").unwrap(), 0..12)
}

proptest! {
    /// Property: outputs are parallel to the query list, filled falls back to
    /// the query entry exactly where matched is empty, and every match comes
    /// from the reference list.
    #[test]
    fn prop_both_outputs_aligned(reference in list_strategy(), query in list_strategy()) {
        let mapper = FuzzyMapper::default();
        let MapOutput::Both { matched, filled } = mapper.map(&reference, &query, MapMode::Both) else {
            unreachable!("Both mode returns both lists");
        };

        prop_assert_eq!(matched.len(), query.len());
        prop_assert_eq!(filled.len(), query.len());

        for ((q, m), f) in query.iter().zip(&matched).zip(&filled) {
            if m.is_empty() {
                // Either no match, or a match on an empty reference entry
                let empty_match = f.is_empty() && reference.iter().any(String::is_empty);
                prop_assert!(f == q || empty_match);
            } else {
                prop_assert!(reference.contains(m));
                prop_assert_eq!(f, m);
            }
        }
    }

    /// Property: exact members of the reference map to themselves.
    #[test]
    fn prop_exact_members_map_to_themselves(reference in list_strategy()) {
        let mapper = FuzzyMapper::default();
        let output = mapper.map(&reference, &reference, MapMode::Filled);
        prop_assert_eq!(output, MapOutput::Filled(reference.clone()));
    }

    /// Property: the modes are projections of each other.
    #[test]
    fn prop_modes_are_projections(reference in list_strategy(), query in list_strategy()) {
        let mapper = FuzzyMapper::default();
        let both = mapper.map(&reference, &query, MapMode::Both);
        let matched = mapper.map(&reference, &query, MapMode::MatchedOnly);
        let filled = mapper.map(&reference, &query, MapMode::Filled);

        prop_assert_eq!(both.matched(), matched.matched());
        prop_assert_eq!(both.filled(), filled.filled());
    }
}
