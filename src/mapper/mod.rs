// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy mapping of one string list onto another.
//!
//! The typical job: a user typed `["Aple", "Bananna", "Cherry"]` and the
//! master list is `["Apple", "Banana"]`. Each query entry is scored against
//! every reference entry, and the best candidate at or above the cutoff wins.
//!
//! ```text
//! query       matched     filled
//! ─────────   ─────────   ─────────
//! "Aple"   →  "Apple"     "Apple"
//! "Bananna"→  "Banana"    "Banana"
//! "Cherry" →  ""          "Cherry"    (nothing close, falls back)
//! ```
//!
//! Ties go to the candidate listed first in the reference list, so the output
//! only depends on the inputs and the configuration.

mod config;

pub use config::{MapperConfig, DEFAULT_CUTOFF, DEFAULT_LIMIT};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::MapperError;
use crate::utils::normalize;

/// Which of the two aligned lists `map` returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MapMode {
    /// Both lists.
    #[default]
    Both,
    /// Best match per query entry, `""` where nothing cleared the cutoff.
    MatchedOnly,
    /// Best match per query entry, the query entry itself where nothing did.
    Filled,
}

impl fmt::Display for MapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapMode::Both => write!(f, "both"),
            MapMode::MatchedOnly => write!(f, "matched"),
            MapMode::Filled => write!(f, "filled"),
        }
    }
}

impl FromStr for MapMode {
    type Err = MapperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "both" => Ok(MapMode::Both),
            "matched" | "matched_only" | "matched-only" | "ans" => Ok(MapMode::MatchedOnly),
            "filled" => Ok(MapMode::Filled),
            _ => Err(MapperError::InvalidMode(s.to_string())),
        }
    }
}

/// Result of [`FuzzyMapper::map`], shaped by the requested [`MapMode`].
///
/// Every list has the length and order of the query list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MapOutput {
    Both {
        matched: Vec<String>,
        filled: Vec<String>,
    },
    Matched(Vec<String>),
    Filled(Vec<String>),
}

impl MapOutput {
    /// The matched list, if this output carries it.
    pub fn matched(&self) -> Option<&[String]> {
        match self {
            MapOutput::Both { matched, .. } | MapOutput::Matched(matched) => Some(matched),
            MapOutput::Filled(_) => None,
        }
    }

    /// The filled list, if this output carries it.
    pub fn filled(&self) -> Option<&[String]> {
        match self {
            MapOutput::Both { filled, .. } | MapOutput::Filled(filled) => Some(filled),
            MapOutput::Matched(_) => None,
        }
    }
}

/// A reference entry that cleared the cutoff.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match<'a> {
    /// Position in the reference list.
    pub index: usize,
    pub candidate: &'a str,
    pub score: f64,
}

/// Reference entries split into symbols once per call, not once per query.
struct Candidates {
    keys: Vec<Vec<char>>,
}

/// Aligns query strings to their closest reference strings.
#[derive(Debug, Clone, Default)]
pub struct FuzzyMapper {
    config: MapperConfig,
}

impl FuzzyMapper {
    pub fn new(config: MapperConfig) -> Result<Self, MapperError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Best reference entry for `query`, or `None` if nothing reaches the
    /// cutoff.
    pub fn best_match<'r, R: AsRef<str>>(
        &self,
        query: &str,
        reference: &'r [R],
    ) -> Option<Match<'r>> {
        let candidates = self.candidates(reference);
        self.best_index(&candidates, query).map(|(index, score)| Match {
            index,
            candidate: reference[index].as_ref(),
            score,
        })
    }

    /// Up to `limit` reference entries at or above the cutoff, best first.
    ///
    /// Equal scores keep their reference order.
    pub fn close_matches<'r, R: AsRef<str>>(
        &self,
        query: &str,
        reference: &'r [R],
    ) -> Vec<Match<'r>> {
        let candidates = self.candidates(reference);
        let symbols = self.symbols(query);

        let mut matches: Vec<Match<'r>> = candidates
            .keys
            .iter()
            .enumerate()
            .filter_map(|(index, key)| {
                let score = self.config.scorer.score_at_least(key, &symbols, self.config.cutoff)?;
                Some(Match {
                    index,
                    candidate: reference[index].as_ref(),
                    score,
                })
            })
            .collect();

        // Stable sort: ties stay in reference order
        matches.sort_by(|a, b| b.score.total_cmp(&a.score));
        matches.truncate(self.config.limit);
        matches
    }

    /// Align every query entry to its closest reference entry.
    pub fn map<R, Q>(&self, reference: &[R], query: &[Q], mode: MapMode) -> MapOutput
    where
        R: AsRef<str>,
        Q: AsRef<str>,
    {
        let candidates = self.candidates(reference);
        let picks: Vec<Option<usize>> = query
            .iter()
            .map(|q| self.pick(&candidates, q.as_ref()))
            .collect();
        assemble(reference, query, &picks, mode)
    }

    /// [`map`](Self::map) with query entries scored on the rayon pool.
    ///
    /// Output is identical to the sequential version.
    #[cfg(feature = "parallel")]
    pub fn map_parallel<R, Q>(&self, reference: &[R], query: &[Q], mode: MapMode) -> MapOutput
    where
        R: AsRef<str> + Sync,
        Q: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        let candidates = self.candidates(reference);
        let picks: Vec<Option<usize>> = query
            .par_iter()
            .map(|q| self.pick(&candidates, q.as_ref()))
            .collect();
        assemble(reference, query, &picks, mode)
    }

    fn symbols(&self, text: &str) -> Vec<char> {
        if self.config.normalize {
            normalize(text).chars().collect()
        } else {
            text.chars().collect()
        }
    }

    fn candidates<R: AsRef<str>>(&self, reference: &[R]) -> Candidates {
        Candidates {
            keys: reference.iter().map(|r| self.symbols(r.as_ref())).collect(),
        }
    }

    fn pick(&self, candidates: &Candidates, query: &str) -> Option<usize> {
        let pick = self.best_index(candidates, query).map(|(index, _)| index);
        if pick.is_none() {
            tracing::trace!(query, "no reference entry reached the cutoff");
        }
        pick
    }

    fn best_index(&self, candidates: &Candidates, query: &str) -> Option<(usize, f64)> {
        let symbols = self.symbols(query);
        let mut best: Option<(usize, f64)> = None;

        for (index, key) in candidates.keys.iter().enumerate() {
            let Some(score) = self.config.scorer.score_at_least(key, &symbols, self.config.cutoff)
            else {
                continue;
            };
            // Strictly greater: the earliest candidate keeps a tie
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((index, score));
                if score >= 1.0 {
                    break;
                }
            }
        }

        best
    }
}

fn assemble<R, Q>(
    reference: &[R],
    query: &[Q],
    picks: &[Option<usize>],
    mode: MapMode,
) -> MapOutput
where
    R: AsRef<str>,
    Q: AsRef<str>,
{
    let chosen = |pick: &Option<usize>| pick.map(|index| reference[index].as_ref().to_string());

    let matched = || -> Vec<String> {
        picks
            .iter()
            .map(|pick| chosen(pick).unwrap_or_default())
            .collect()
    };
    let filled = || -> Vec<String> {
        picks
            .iter()
            .zip(query)
            .map(|(pick, q)| chosen(pick).unwrap_or_else(|| q.as_ref().to_string()))
            .collect()
    };

    let hits = picks.iter().filter(|pick| pick.is_some()).count();
    tracing::debug!(
        queries = query.len(),
        references = reference.len(),
        matched = hits,
        %mode,
        "mapped query list"
    );

    match mode {
        MapMode::Both => MapOutput::Both {
            matched: matched(),
            filled: filled(),
        },
        MapMode::MatchedOnly => MapOutput::Matched(matched()),
        MapMode::Filled => MapOutput::Filled(filled()),
    }
}
