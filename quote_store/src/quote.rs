//! Quote records and the line parser for quote files.
//!
//! A quote file holds one quotation per line in the form `"<text>" - *<author>*`.
//! A bare `"<text>"` line is accepted as an unattributed quote. Blank lines are
//! ignored. Any other non-blank line is skipped, logged at `warn` level and reported
//! back as a [`RejectedLine`] so callers can inspect data-quality issues.
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::result::Result;

/// Marker between the closing quote of the text and the opening `*` of the author.
const ATTRIBUTION: &str = "\" - *";

/// A single attributed quotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quote {
    /// Quotation body. Never empty for quotes produced by the parser.
    pub text: String,
    /// Free-text attribution, possibly with a note. Empty when unattributed.
    pub author: String,
}

impl Quote {
    /// Creates a quote from its parts.
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Quote {
            text: text.into(),
            author: author.into(),
        }
    }

    /// Returns `true` if no attribution is recorded.
    pub fn is_unattributed(&self) -> bool {
        self.author.is_empty()
    }

    /// Case-insensitive substring match against the author.
    ///
    /// `needle` is expected to be lowercased already.
    pub(crate) fn author_contains_lowercase(&self, needle: &str) -> bool {
        self.author.to_lowercase().contains(needle)
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.author.is_empty() {
            write!(f, "\"{}\"", self.text)
        } else {
            write!(f, "\"{}\" - *{}*", self.text, self.author)
        }
    }
}

impl FromStr for Quote {
    type Err = QuoteError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let body = line
            .strip_prefix('"')
            .ok_or_else(|| QuoteError::Parse("missing opening '\"'".to_string()))?;

        let (text, author) = match body.rfind(ATTRIBUTION) {
            Some(idx) => {
                // The closing `*` must be a different character from the opening one.
                if !body.ends_with('*') || idx + ATTRIBUTION.len() >= body.len() {
                    return Err(QuoteError::Parse(
                        "attribution not closed with '*'".to_string(),
                    ));
                }
                (
                    &body[..idx],
                    &body[idx + ATTRIBUTION.len()..body.len() - 1],
                )
            }
            None => match body.strip_suffix('"') {
                Some(text) => (text, ""),
                None => {
                    return Err(QuoteError::Parse(
                        "expected '\" - *<author>*' or a closing '\"'".to_string(),
                    ));
                }
            },
        };

        let text = text.trim();
        if text.is_empty() {
            return Err(QuoteError::Parse("empty quote text".to_string()));
        }

        Ok(Quote::new(text, author.trim()))
    }
}

/// A non-blank source line that did not match the quote grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedLine {
    /// 1-based line number in the source.
    pub line_number: usize,
    /// The trimmed line content.
    pub content: String,
    /// Why the line was rejected.
    pub reason: String,
}

/// Outcome of parsing a whole quote file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Accepted quotes in source order.
    pub quotes: Vec<Quote>,
    /// Skipped lines in source order.
    pub rejected: Vec<RejectedLine>,
}

/// Trait providing file parsing for quotes.
pub trait QuoteParser {
    /// Parses quotes from a buffered reader.
    ///
    /// Each non-blank line is parsed with `FromStr`. Lines that fail are skipped and
    /// recorded in the report instead of aborting the parse. `source_name` labels the
    /// input in log messages and in [`QuoteError::Load`] if reading fails.
    fn parse_from_file<R: BufRead>(reader: R, source_name: &str) -> Result<ParseReport>;
}

impl QuoteParser for Quote {
    fn parse_from_file<R: BufRead>(reader: R, source_name: &str) -> Result<ParseReport> {
        let mut report = ParseReport::default();

        for (index, line_result) in reader.lines().enumerate() {
            let line = line_result.map_err(|e| QuoteError::load(source_name, e))?;
            let line = match index {
                0 => line.strip_prefix('\u{feff}').unwrap_or(&line),
                _ => line.as_str(),
            };
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() {
                continue;
            }

            match trimmed_line.parse::<Self>() {
                Ok(quote) => report.quotes.push(quote),
                Err(e) => {
                    let line_number = index + 1;
                    warn!("{}:{}: skipping malformed line: {}", source_name, line_number, e);
                    report.rejected.push(RejectedLine {
                        line_number,
                        content: trimmed_line.to_string(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        debug!(
            "Parsed {} quotes from {} ({} rejected)",
            report.quotes.len(),
            source_name,
            report.rejected.len()
        );
        Ok(report)
    }
}
