// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lexis command-line interface.
//!
//! Word-list commands (`complete`, `count`, `words`) load a vocabulary into a
//! trie and query it. `distance` compares two strings. `suggest` and `map`
//! reconcile query strings against a reference list with the fuzzy mapper.
//! Results go to stdout, logs to stderr.

pub mod display;
pub mod input;
pub mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lexis::{MapMode, Scorer};

#[derive(Parser)]
#[command(
    name = "lexis",
    about = "Prefix-tree autocomplete and fuzzy list reconciliation",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every word that starts with a prefix
    Complete {
        /// Word list: one word per line, or a JSON array (.json)
        #[arg(short, long)]
        words: PathBuf,

        /// Prefix to complete
        prefix: String,

        /// Sort completions alphabetically
        #[arg(long)]
        sort: bool,

        /// Print a JSON array instead of one word per line
        #[arg(long)]
        json: bool,
    },

    /// Count the words that start with a prefix (all words if omitted)
    Count {
        /// Word list: one word per line, or a JSON array (.json)
        #[arg(short, long)]
        words: PathBuf,

        /// Prefix to count under
        #[arg(default_value = "")]
        prefix: String,
    },

    /// List the whole vocabulary, flagging words that start with a prefix
    Words {
        /// Word list: one word per line, or a JSON array (.json)
        #[arg(short, long)]
        words: PathBuf,

        /// Prefix to flag
        #[arg(short, long, default_value = "")]
        prefix: String,

        /// Print JSON objects instead of a marked listing
        #[arg(long)]
        json: bool,
    },

    /// Print the edit distance between two strings
    Distance {
        a: String,
        b: String,
    },

    /// Rank the closest reference entries for a single query
    Suggest {
        /// Reference list: one entry per line, or a JSON array (.json)
        #[arg(short, long)]
        reference: PathBuf,

        /// String to look up
        query: String,

        #[command(flatten)]
        tuning: Tuning,

        /// Maximum number of suggestions
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Map every query entry to its closest reference entry
    Map {
        /// Reference list: one entry per line, or a JSON array (.json)
        #[arg(short, long)]
        reference: PathBuf,

        /// Query list: one entry per line, or a JSON array (.json)
        #[arg(short, long)]
        query: PathBuf,

        /// Output to produce: both, matched or filled
        #[arg(short, long, default_value = "both")]
        mode: MapMode,

        #[command(flatten)]
        tuning: Tuning,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Mapper settings shared by `suggest` and `map`.
///
/// Flags override values from `--config`, which override the defaults.
#[derive(clap::Args)]
pub struct Tuning {
    /// JSON file with mapper settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Minimum similarity in [0, 1] (default 0.6)
    #[arg(short, long)]
    pub cutoff: Option<f64>,

    /// Similarity measure: ratio, lcs or levenshtein
    #[arg(short, long)]
    pub scorer: Option<Scorer>,

    /// Ignore case, accents and extra whitespace when comparing
    #[arg(long)]
    pub normalize: bool,
}
