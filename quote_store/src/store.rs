//! In-memory quote store.
//!
//! A `QuoteStore` is built once from a quote file and never mutated afterwards. It owns
//! plain vectors with no interior mutability, so a loaded store is `Send + Sync` and can
//! be shared by reference (or behind an `Arc`) between concurrent readers without locking.
//!
//! Operations:
//! - `QuoteStore::load(path)` / `QuoteStore::from_reader(reader, name)` — parse a resource.
//! - `QuoteStore::random()` — uniformly random quote, `EmptyStore` if there is none.
//! - `QuoteStore::all()` — every quote in source order.
//! - `QuoteStore::filter_by_author(substring)` — case-insensitive author match.
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::QuoteError;
use crate::quote::{Quote, QuoteParser, RejectedLine};
use crate::result::Result;

/// Immutable, ordered collection of quotes loaded from a single resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
    rejected: Vec<RejectedLine>,
}

impl QuoteStore {
    /// Load quotes from the file at `path`.
    ///
    /// Fails with [`QuoteError::Load`] if the file cannot be opened or read. Malformed
    /// lines do not fail the load; they are skipped and available via [`Self::rejected`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let file = File::open(path).map_err(|e| QuoteError::load(&source_name, e))?;
        Self::from_reader(BufReader::new(file), &source_name)
    }

    /// Load quotes from any buffered reader. `source_name` labels it in logs and errors.
    pub fn from_reader<R: BufRead>(reader: R, source_name: &str) -> Result<Self> {
        let report = Quote::parse_from_file(reader, source_name)?;
        info!(
            "Loaded {} quotes from {} ({} malformed lines skipped)",
            report.quotes.len(),
            source_name,
            report.rejected.len()
        );
        Ok(QuoteStore {
            quotes: report.quotes,
            rejected: report.rejected,
        })
    }

    /// Build a store directly from already-parsed quotes.
    pub fn from_quotes(quotes: Vec<Quote>) -> Self {
        QuoteStore {
            quotes,
            rejected: Vec::new(),
        }
    }

    /// Return one quote chosen uniformly at random.
    pub fn random(&self) -> Result<&Quote> {
        self.random_with(&mut rand::rng())
    }

    /// Like [`Self::random`], drawing from the caller's generator.
    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Quote> {
        self.quotes.choose(rng).ok_or(QuoteError::EmptyStore)
    }

    /// All quotes in source order.
    pub fn all(&self) -> &[Quote] {
        &self.quotes
    }

    /// Quotes whose author contains `substring`, ignoring case. An empty `substring`
    /// matches every quote.
    pub fn filter_by_author(&self, substring: &str) -> Vec<&Quote> {
        let needle = substring.to_lowercase();
        self.quotes
            .iter()
            .filter(|quote| quote.author_contains_lowercase(&needle))
            .collect()
    }

    /// Distinct non-empty authors in first-seen order.
    pub fn authors(&self) -> Vec<&str> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.quotes
            .iter()
            .map(|quote| quote.author.as_str())
            .filter(|author| !author.is_empty() && seen.insert(*author))
            .collect()
    }

    /// Lines skipped during load because they did not match the quote grammar.
    pub fn rejected(&self) -> &[RejectedLine] {
        &self.rejected
    }

    /// Number of loaded quotes.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns `true` if no quotes were loaded.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}
