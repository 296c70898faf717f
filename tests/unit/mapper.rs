//! Fuzzy mapper behaviour through the public API.

use super::common::{FRUIT_QUERY, FRUIT_REFERENCE};
use lexis::{FuzzyMapper, MapMode, MapOutput, MapperConfig, MapperError, Scorer};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_fruit_filled() {
    let mapper = FuzzyMapper::default();
    let output = mapper.map(&FRUIT_REFERENCE, &FRUIT_QUERY, MapMode::Filled);
    assert_eq!(
        output,
        MapOutput::Filled(strings(&["Apple", "Banana", "Cherry"]))
    );
}

#[test]
fn test_fruit_every_mode() {
    let mapper = FuzzyMapper::default();
    let matched = strings(&["Apple", "Banana", ""]);
    let filled = strings(&["Apple", "Banana", "Cherry"]);

    assert_eq!(
        mapper.map(&FRUIT_REFERENCE, &FRUIT_QUERY, MapMode::Both),
        MapOutput::Both {
            matched: matched.clone(),
            filled: filled.clone(),
        }
    );
    assert_eq!(
        mapper.map(&FRUIT_REFERENCE, &FRUIT_QUERY, MapMode::MatchedOnly),
        MapOutput::Matched(matched)
    );
    assert_eq!(
        mapper.map(&FRUIT_REFERENCE, &FRUIT_QUERY, MapMode::Filled),
        MapOutput::Filled(filled)
    );
}

#[test]
fn test_both_scorers_agree_on_fruit() {
    for scorer in [Scorer::Ratio, Scorer::Lcs, Scorer::Levenshtein] {
        let mapper = FuzzyMapper::new(MapperConfig {
            scorer,
            ..Default::default()
        })
        .unwrap();
        let output = mapper.map(&FRUIT_REFERENCE, &FRUIT_QUERY, MapMode::Filled);
        assert_eq!(
            output.filled(),
            Some(&strings(&["Apple", "Banana", "Cherry"])[..]),
            "scorer {}",
            scorer
        );
    }
}

#[test]
fn test_zero_cutoff_always_matches() {
    let mapper = FuzzyMapper::new(MapperConfig {
        cutoff: 0.0,
        ..Default::default()
    })
    .unwrap();
    let output = mapper.map(&FRUIT_REFERENCE, &["zzz"], MapMode::MatchedOnly);
    // Everything scores 0.0, so the first entry wins the tie
    assert_eq!(output, MapOutput::Matched(strings(&["Apple"])));
}

#[test]
fn test_owned_and_borrowed_inputs() {
    let mapper = FuzzyMapper::default();
    let reference = strings(&FRUIT_REFERENCE);
    let query = strings(&FRUIT_QUERY);
    assert_eq!(
        mapper.map(&reference, &query, MapMode::Both),
        mapper.map(&FRUIT_REFERENCE, &FRUIT_QUERY, MapMode::Both)
    );
}

#[test]
fn test_invalid_mode_name_fails_fast() {
    let err = "tuple".parse::<MapMode>().unwrap_err();
    assert_eq!(err, MapperError::InvalidMode("tuple".to_string()));
    assert!(err.to_string().contains("expected 'both', 'matched' or 'filled'"));
}

#[test]
fn test_close_matches_respects_cutoff() {
    let mapper = FuzzyMapper::default();
    let reference = ["ape", "apple", "peach", "puppy"];
    let found = mapper.close_matches("appel", &reference);
    assert!(found.iter().all(|m| m.score >= 0.6));
    assert_eq!(found[0].candidate, "apple");
    assert!(found.iter().all(|m| m.candidate != "peach"));
}

#[test]
fn test_output_serializes_by_mode() {
    let mapper = FuzzyMapper::default();
    let output = mapper.map(&FRUIT_REFERENCE, &FRUIT_QUERY, MapMode::Filled);
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "filled": ["Apple", "Banana", "Cherry"] })
    );
}

#[test]
fn test_greedy_blocks_reject_scattered_matches() {
    let mapper = FuzzyMapper::default();
    let output = mapper.map(&["ddd"], &["daadd"], MapMode::Both);
    assert_eq!(
        output,
        MapOutput::Both {
            matched: strings(&[""]),
            filled: strings(&["daadd"]),
        }
    );

    let found = mapper.close_matches("abdc", &["dcadc"]);
    assert!(found.is_empty(), "4/9 is below the default cutoff");
}
