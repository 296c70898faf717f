// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::error::MapperError;
use crate::fuzzy::Scorer;

/// Default similarity a candidate must reach to count as a match.
pub const DEFAULT_CUTOFF: f64 = 0.6;

/// Default number of candidates returned by `close_matches`.
pub const DEFAULT_LIMIT: usize = 3;

/// Tuning for [`FuzzyMapper`](super::FuzzyMapper).
///
/// Every field has a default, so a JSON config only needs the fields it
/// changes:
///
/// ```json
/// { "cutoff": 0.75, "scorer": "levenshtein" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapperConfig {
    /// Minimum similarity, inclusive, in `[0, 1]`.
    pub cutoff: f64,
    pub scorer: Scorer,
    /// Compare normalized forms (case, diacritics, whitespace). Results are
    /// still the original reference entries.
    pub normalize: bool,
    /// Maximum candidates from `close_matches`.
    pub limit: usize,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            scorer: Scorer::default(),
            normalize: false,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl MapperConfig {
    pub fn validate(&self) -> Result<(), MapperError> {
        if !(0.0..=1.0).contains(&self.cutoff) {
            return Err(MapperError::InvalidCutoff(self.cutoff));
        }
        if self.limit == 0 {
            return Err(MapperError::InvalidLimit(self.limit));
        }
        Ok(())
    }
}
