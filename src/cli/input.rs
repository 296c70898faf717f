// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading word lists and mapper settings from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lexis::MapperConfig;

use super::Tuning;

/// Read a word list.
///
/// `.json` files must hold an array of strings. Anything else is read as one
/// entry per line, with blank lines skipped and `\r` line endings tolerated.
pub fn load_words(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list {}", path.display()))?;

    let words = if is_json(path) {
        serde_json::from_str::<Vec<String>>(&text)
            .with_context(|| format!("{} is not a JSON array of strings", path.display()))?
    } else {
        text.lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(String::from)
            .collect()
    };

    tracing::info!(path = %path.display(), entries = words.len(), "loaded word list");
    Ok(words)
}

/// Resolve mapper settings: flags, then `--config`, then defaults.
pub fn resolve_config(tuning: &Tuning, limit: Option<usize>) -> Result<MapperConfig> {
    let mut config = match &tuning.config {
        Some(path) => load_config(path)?,
        None => MapperConfig::default(),
    };

    if let Some(cutoff) = tuning.cutoff {
        config.cutoff = cutoff;
    }
    if let Some(scorer) = tuning.scorer {
        config.scorer = scorer;
    }
    if tuning.normalize {
        config.normalize = true;
    }
    if let Some(limit) = limit {
        config.limit = limit;
    }

    tracing::debug!(?config, "resolved mapper config");
    Ok(config)
}

fn load_config(path: &Path) -> Result<MapperConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
