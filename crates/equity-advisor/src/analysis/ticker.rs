//! Ticker Extractor
//!
//! Heuristic symbol detection: an isolated run of 1-5 uppercase ASCII
//! letters that isn't a common short word. Lowercase symbols are never
//! found, and all-caps words outside the exclusion list are taken as
//! tickers.

use std::sync::LazyLock;

use regex::Regex;

/// Short uppercase words that are never treated as tickers
pub const EXCLUDED_WORDS: &[&str] = &["I", "A", "MY", "THE", "FOR", "AND", "OR"];

static TICKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{1,5}\b").expect("ticker pattern is valid"));

/// Every candidate ticker, left to right
pub fn extract_tickers(text: &str) -> Vec<&str> {
    TICKER_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|candidate| !EXCLUDED_WORDS.contains(candidate))
        .collect()
}

/// First candidate ticker in the text, if any
pub fn extract_ticker(text: &str) -> Option<String> {
    let ticker = extract_tickers(text).first().map(|t| (*t).to_string());
    tracing::debug!(ticker = ?ticker, "extracted ticker");
    ticker
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_ticker() {
        assert_eq!(extract_ticker("What's the price of AAPL?").as_deref(), Some("AAPL"));
        assert_eq!(extract_ticker("Tell me about MSFT").as_deref(), Some("MSFT"));
    }

    #[test]
    fn test_first_of_many() {
        assert_eq!(extract_ticker("Compare AAPL vs MSFT").as_deref(), Some("AAPL"));
        assert_eq!(extract_tickers("AAPL, MSFT and GOOGL"), ["AAPL", "MSFT", "GOOGL"]);
    }

    #[test]
    fn test_no_ticker() {
        assert_eq!(extract_ticker("What's the market doing?"), None);
        assert_eq!(extract_ticker("Tell me about tech stocks"), None);
        assert_eq!(extract_ticker(""), None);
    }

    #[test]
    fn test_common_words_filtered() {
        assert_eq!(extract_ticker("I want to buy a stock"), None);
        assert_eq!(extract_ticker("For the portfolio"), None);
        assert_eq!(extract_ticker("FOR THE AND OR MY"), None);
        assert_eq!(extract_ticker("I think A and THE beat NVDA"), Some("NVDA".into()));
    }

    #[test]
    fn test_runs_must_be_isolated() {
        // Six letters is too long, and a run touching digits or lowercase
        // letters is part of a larger word.
        assert_eq!(extract_ticker("GOOGLE is big"), None);
        assert_eq!(extract_ticker("AAPL2 and 3MSFT"), None);
        assert_eq!(extract_ticker("iPhone and McDonald"), None);
        assert_eq!(extract_ticker("(TSLA)").as_deref(), Some("TSLA"));
    }

    #[test]
    fn test_lowercase_never_matches() {
        assert_eq!(extract_ticker("what about aapl"), None);
    }
}
