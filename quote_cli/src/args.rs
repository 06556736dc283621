//! Command-line arguments for the quotes tool.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, Subcommand};

use crate::render::OutputFormat;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the quote file, one `"<text>" - *<author>*` per line.
    #[clap(long, env = "QUOTES_PATH", default_value = "data/quotes.txt")]
    pub path: String,

    /// Output format.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// What to print.
    #[command(subcommand)]
    pub command: QuoteCommand,
}

/// Queries supported by the tool.
#[derive(Debug, Subcommand)]
pub enum QuoteCommand {
    /// Print one quote chosen at random.
    Random {
        /// Seed for a reproducible pick.
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Print every quote in file order.
    All,
    /// Print quotes whose author contains the given text (case-insensitive).
    Author {
        /// Substring to look for in the author field.
        substring: String,
    },
    /// Print the distinct authors.
    Authors,
}
