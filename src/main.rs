use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use lexis::{levenshtein, FuzzyMapper, MapMode, MapOutput, Trie};

mod cli;
use cli::display::{self, BOLD};
use cli::input::{load_words, resolve_config};
use cli::{Cli, Commands, Tuning};

#[derive(Serialize)]
struct AnnotatedWord<'a> {
    word: &'a str,
    matches: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::logging::init_logging(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{} {:#}",
                display::paint(display::Tone::Poor, &[BOLD], "error:"),
                e
            );
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Complete {
            words,
            prefix,
            sort,
            json,
        } => run_complete(&words, &prefix, sort, json),
        Commands::Count { words, prefix } => {
            let trie = load_trie(&words)?;
            println!("{}", trie.count_with_prefix(&prefix));
            Ok(())
        }
        Commands::Words {
            words,
            prefix,
            json,
        } => run_words(&words, &prefix, json),
        Commands::Distance { a, b } => {
            println!("{}", levenshtein(&a, &b));
            Ok(())
        }
        Commands::Suggest {
            reference,
            query,
            tuning,
            limit,
            json,
        } => run_suggest(&reference, &query, &tuning, limit, json),
        Commands::Map {
            reference,
            query,
            mode,
            tuning,
            json,
        } => run_map(&reference, &query, mode, &tuning, json),
    }
}

fn load_trie(path: &Path) -> Result<Trie> {
    let words = load_words(path)?;
    let trie: Trie = words.into_iter().collect();
    tracing::debug!(distinct = trie.len(), "built trie");
    Ok(trie)
}

fn run_complete(words: &Path, prefix: &str, sort: bool, json: bool) -> Result<()> {
    let trie = load_trie(words)?;
    let mut completions = trie.autocomplete(prefix);
    if sort {
        completions.sort();
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&completions)?);
    } else {
        for word in &completions {
            println!("{}", word);
        }
    }
    Ok(())
}

fn run_words(words: &Path, prefix: &str, json: bool) -> Result<()> {
    let trie = load_trie(words)?;
    let mut annotated = trie.words_annotated(prefix);
    annotated.sort();

    if json {
        let rows: Vec<AnnotatedWord<'_>> = annotated
            .iter()
            .map(|(word, matches)| AnnotatedWord {
                word,
                matches: *matches,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for (word, matches) in &annotated {
            println!("{} {}", display::flag(*matches), word);
        }
    }
    Ok(())
}

fn run_suggest(
    reference: &Path,
    query: &str,
    tuning: &Tuning,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let reference = load_words(reference)?;
    let mapper = FuzzyMapper::new(resolve_config(tuning, limit)?)?;
    let matches = mapper.close_matches(query, &reference);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("{}", display::no_match());
        return Ok(());
    }

    let width = matches
        .iter()
        .map(|m| m.candidate.chars().count())
        .max()
        .unwrap_or(0);
    for m in &matches {
        println!(
            "{}  {}",
            display::pad_right(m.candidate, width),
            display::score_value(m.score)
        );
    }
    Ok(())
}

fn run_map(
    reference: &Path,
    query: &Path,
    mode: MapMode,
    tuning: &Tuning,
    json: bool,
) -> Result<()> {
    let reference = load_words(reference)?;
    let query = load_words(query)?;
    let mapper = FuzzyMapper::new(resolve_config(tuning, None)?)?;

    #[cfg(feature = "parallel")]
    let output = mapper.map_parallel(&reference, &query, mode);
    #[cfg(not(feature = "parallel"))]
    let output = mapper.map(&reference, &query, mode);

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_mapping(&query, &output);
    }
    Ok(())
}

fn print_mapping(query: &[String], output: &MapOutput) {
    let width = query.iter().map(|q| q.chars().count()).max().unwrap_or(0);
    let arrow = display::paint(display::Tone::Muted, &[], "→");

    match output {
        MapOutput::Both { matched, filled } => {
            println!(
                "{}  {}  {}",
                display::pad_right(&display::heading("query"), width),
                display::pad_right(&display::heading("matched"), width),
                display::heading("filled")
            );
            for ((q, m), f) in query.iter().zip(matched).zip(filled) {
                let shown = if m.is_empty() { display::no_match() } else { m.clone() };
                println!(
                    "{}  {}  {}",
                    display::pad_right(q, width),
                    display::pad_right(&shown, width),
                    f
                );
            }
        }
        MapOutput::Matched(matched) => {
            for (q, m) in query.iter().zip(matched) {
                let shown = if m.is_empty() { display::no_match() } else { m.clone() };
                println!("{} {} {}", display::pad_right(q, width), arrow, shown);
            }
        }
        MapOutput::Filled(filled) => {
            for (q, f) in query.iter().zip(filled) {
                println!("{} {} {}", display::pad_right(q, width), arrow, f);
            }
        }
    }
}
