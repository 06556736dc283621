//! Quotes — a command-line front end over `QuoteStore`. It loads a quote file once and
//! prints a random quote, every quote, the quotes of a given author, or the author list.
//!
//! Usage example (CLI):
//! ```bash
//! quotes --path ./data/quotes.txt random
//! quotes --format json author patton
//! ```
//!
//! The quote file holds one `"<text>" - *<author>*` per line. Malformed lines are skipped
//! with a warning; see `quote_store::quote` for details.
#![warn(missing_docs)]
mod args;
mod render;

use crate::args::{Args, QuoteCommand};
use crate::render::{render_authors, render_quote, render_quotes};
use clap::Parser;
use log::{debug, error};
use quote_store::QuoteError;
use quote_store::QuoteStore;
use quote_store::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();
    let file_path = normalize_path(&args.path);

    let store = QuoteStore::load(&file_path).inspect_err(|e| error!("{}", e))?;
    let output = run(&store, &args.command, args.format).inspect_err(|e| error!("{}", e))?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}

/// Execute one query against a loaded store and return the rendered output.
fn run(store: &QuoteStore, command: &QuoteCommand, format: render::OutputFormat) -> Result<String> {
    match command {
        QuoteCommand::Random { seed } => {
            let quote = match seed {
                Some(seed) => {
                    debug!("Picking with seed {}", seed);
                    store.random_with(&mut StdRng::seed_from_u64(*seed))?
                }
                None => store.random()?,
            };
            render_quote(quote, format)
        }
        QuoteCommand::All => {
            let quotes: Vec<_> = store.all().iter().collect();
            render_quotes(&quotes, format)
        }
        QuoteCommand::Author { substring } => {
            let quotes = store.filter_by_author(substring);
            debug!("{} quotes match author {:?}", quotes.len(), substring);
            render_quotes(&quotes, format)
        }
        QuoteCommand::Authors => render_authors(&store.authors(), format),
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::OutputFormat;
    use quote_store::Quote;

    fn store() -> QuoteStore {
        QuoteStore::from_quotes(vec![
            Quote::new("A good plan violently executed now is better than a perfect plan executed next week.", "General George S. Patton"),
            Quote::new("Fortune favors the bold.", "Virgil"),
        ])
    }

    #[test]
    fn normalize_path_strips_quotes_and_whitespace() {
        assert_eq!(normalize_path("  \"C:\\quotes.txt\" "), PathBuf::from("C:\\quotes.txt"));
        assert_eq!(normalize_path("data/quotes.txt"), PathBuf::from("data/quotes.txt"));
    }

    #[test]
    fn author_without_match_prints_nothing() {
        let out = run(
            &store(),
            &QuoteCommand::Author { substring: "nonexistent-author-xyz".to_string() },
            OutputFormat::Text,
        )
        .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn author_query_filters() {
        let out = run(
            &store(),
            &QuoteCommand::Author { substring: "patton".to_string() },
            OutputFormat::Text,
        )
        .unwrap();
        assert!(out.ends_with("- *General George S. Patton*"));
        assert!(!out.contains("Virgil"));
    }

    #[test]
    fn seeded_random_is_stable() {
        let command = QuoteCommand::Random { seed: Some(42) };
        let first = run(&store(), &command, OutputFormat::Json).unwrap();
        let second = run(&store(), &command, OutputFormat::Json).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn random_on_empty_store_is_an_error() {
        let empty = QuoteStore::default();
        let err = run(&empty, &QuoteCommand::Random { seed: None }, OutputFormat::Text).unwrap_err();
        assert!(matches!(err, QuoteError::EmptyStore));
    }

    #[test]
    fn args_parse_with_defaults() {
        let args = Args::try_parse_from(["quotes", "author", "Patton"]).unwrap();
        assert_eq!(args.format, OutputFormat::Text);
        assert!(matches!(args.command, QuoteCommand::Author { ref substring } if substring == "Patton"));
    }
}
