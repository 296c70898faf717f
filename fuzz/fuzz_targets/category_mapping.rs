// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for category mapping.
//!
//! Arbitrary reference and query lists must never panic the mapper, and the
//! outputs must stay parallel to the query list with every match drawn from
//! the reference list.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lexis::{FuzzyMapper, MapMode, MapOutput, MapperConfig, Scorer};

#[derive(Debug, Arbitrary)]
struct MappingInput {
    reference: Vec<String>,
    query: Vec<String>,
    cutoff: u8,
    scorer: u8,
}

fuzz_target!(|input: MappingInput| {
    // Cap list sizes to avoid timeouts
    let reference: Vec<String> = input.reference.into_iter().take(32).collect();
    let query: Vec<String> = input.query.into_iter().take(32).collect();

    let config = MapperConfig {
        cutoff: f64::from(input.cutoff) / 255.0,
        scorer: match input.scorer % 3 {
            0 => Scorer::Ratio,
            1 => Scorer::Lcs,
            _ => Scorer::Levenshtein,
        },
        ..MapperConfig::default()
    };
    let mapper = match FuzzyMapper::new(config) {
        Ok(mapper) => mapper,
        Err(_) => return,
    };

    let MapOutput::Both { matched, filled } = mapper.map(&reference, &query, MapMode::Both) else {
        panic!("Both mode must return both lists");
    };

    assert_eq!(matched.len(), query.len());
    assert_eq!(filled.len(), query.len());

    for ((q, m), f) in query.iter().zip(&matched).zip(&filled) {
        if !m.is_empty() {
            assert!(reference.contains(m), "match {:?} not in reference", m);
            assert_eq!(f, m);
        } else if !reference.iter().any(String::is_empty) {
            assert_eq!(f, q);
        }
    }
});
