//! Output formatting for query results.
use clap::ValueEnum;
use quote_store::{Quote, Result};
use strum_macros::{Display, EnumString};

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Canonical `"<text>" - *<author>*` lines.
    Text,
    /// serde_json output.
    Json,
}

/// Render a single quote.
pub fn render_quote(quote: &Quote, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(quote.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(quote)?),
    }
}

/// Render a list of quotes, one per line for text or a JSON array.
pub fn render_quotes(quotes: &[&Quote], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(lines(quotes.iter().map(|q| q.to_string()))),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(quotes)?),
    }
}

/// Render author names, one per line for text or a JSON array.
pub fn render_authors(authors: &[&str], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(lines(authors.iter().map(|a| a.to_string()))),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(authors)?),
    }
}

fn lines(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::Text.to_string(), "text");
    }

    #[test]
    fn text_rendering_uses_line_form() {
        let a = Quote::new("Fortune favors the bold.", "Virgil");
        let b = Quote::new("Well begun is half done.", "");
        let out = render_quotes(&[&a, &b], OutputFormat::Text).unwrap();
        assert_eq!(
            out,
            "\"Fortune favors the bold.\" - *Virgil*\n\"Well begun is half done.\""
        );
    }

    #[test]
    fn json_rendering_round_trips() {
        let quote = Quote::new("Fortune favors the bold.", "Virgil");
        let single = render_quote(&quote, OutputFormat::Json).unwrap();
        assert_eq!(serde_json::from_str::<Quote>(&single).unwrap(), quote);

        let list = render_quotes(&[&quote], OutputFormat::Json).unwrap();
        assert_eq!(serde_json::from_str::<Vec<Quote>>(&list).unwrap(), vec![quote]);
    }

    #[test]
    fn empty_text_list_renders_nothing() {
        assert_eq!(render_quotes(&[], OutputFormat::Text).unwrap(), "");
        assert_eq!(render_authors(&[], OutputFormat::Json).unwrap(), "[]");
    }
}
