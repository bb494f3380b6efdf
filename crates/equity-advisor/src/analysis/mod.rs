//! Message Analysis
//!
//! Keyword intent classification and ticker extraction over raw message text.

mod intent;
mod ticker;

pub use intent::{AnalysisCategory, classify};
pub use ticker::{EXCLUDED_WORDS, extract_ticker, extract_tickers};
