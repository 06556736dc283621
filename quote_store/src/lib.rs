//!
//! Quote store: loads a flat file of attributed quotations and serves read-only queries.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError`.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the `Quote` record and the line parser for quote files.
//! - `store` — the immutable in-memory `QuoteStore` and its accessors.
#![warn(missing_docs)]
pub mod error;
pub mod quote;
pub mod result;
pub mod store;

pub use error::QuoteError;
pub use quote::{ParseReport, Quote, QuoteParser, RejectedLine};
pub use result::Result;
pub use store::QuoteStore;
