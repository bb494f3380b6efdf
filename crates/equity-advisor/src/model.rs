//! Domain Models
//!
//! Portfolio snapshots supplied by callers and the response record returned
//! for every processed message. Uses `rust_decimal` for share counts and
//! money.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisCategory;
use crate::error::{AdvisorError, Result};

/// An individual stock holding
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol (e.g., "AAPL")
    pub ticker: String,

    /// Number of shares held
    pub shares: Decimal,

    /// Average cost per share
    pub cost_basis: Decimal,

    /// Original purchase date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,
}

impl Holding {
    pub fn new(ticker: impl Into<String>, shares: Decimal, cost_basis: Decimal) -> Self {
        Self {
            ticker: ticker.into(),
            shares,
            cost_basis,
            purchase_date: None,
        }
    }
}

/// A user's portfolio snapshot
///
/// Holdings keep the order the caller supplied; the advisor only reads the
/// leading tickers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Owner identifier
    pub user_id: String,

    /// Holdings in caller order
    #[serde(default)]
    pub holdings: Vec<Holding>,

    /// Current total value, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_value: Option<Decimal>,

    /// Last time the snapshot was refreshed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDate>,
}

impl Portfolio {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            holdings: Vec::new(),
            total_value: None,
            last_updated: None,
        }
    }

    pub fn with_holding(mut self, holding: Holding) -> Self {
        self.holdings.push(holding);
        self
    }

    /// First `n` tickers, in holding order
    pub fn leading_tickers(&self, n: usize) -> impl Iterator<Item = &str> {
        self.holdings.iter().take(n).map(|h| h.ticker.as_str())
    }

    /// Shape checks applied when a snapshot is stored
    pub fn validate(&self) -> Result<()> {
        if self.user_id.trim().is_empty() {
            return Err(AdvisorError::InvalidPortfolio("user_id is empty".into()));
        }

        for holding in &self.holdings {
            if holding.ticker.trim().is_empty() {
                return Err(AdvisorError::InvalidPortfolio(
                    "holding with empty ticker".into(),
                ));
            }
            if holding.shares.is_sign_negative() || holding.cost_basis.is_sign_negative() {
                return Err(AdvisorError::InvalidPortfolio(format!(
                    "{}: shares and cost basis must be non-negative",
                    holding.ticker
                )));
            }
        }

        Ok(())
    }
}

/// Response record for one processed message
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Rendered advisor reply
    pub message: String,

    /// Session the exchange was recorded under
    pub session_id: String,

    /// When the response was produced
    pub timestamp: DateTime<Utc>,

    /// Detected analysis category
    pub analysis_type: AnalysisCategory,

    /// Confidence or data-quality label
    pub confidence: String,

    /// Metrics cited in the reply
    pub citations: Vec<String>,

    /// Risk disclaimer
    pub disclaimer: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_portfolio_accepts_string_decimals() {
        let json = r#"{
            "user_id": "user-456",
            "holdings": [
                {"ticker": "AAPL", "shares": "100", "cost_basis": "150.50", "purchase_date": "2023-01-15"},
                {"ticker": "MSFT", "shares": 50, "cost_basis": 280.0}
            ],
            "total_value": "30000.00",
            "last_updated": "2025-11-24"
        }"#;

        let portfolio: Portfolio = serde_json::from_str(json).unwrap();
        assert_eq!(portfolio.holdings.len(), 2);
        assert_eq!(portfolio.holdings[0].shares, dec!(100));
        assert_eq!(portfolio.holdings[0].cost_basis, dec!(150.50));
        assert_eq!(
            portfolio.holdings[0].purchase_date,
            NaiveDate::from_ymd_opt(2023, 1, 15)
        );
        assert_eq!(portfolio.total_value, Some(dec!(30000.00)));
    }

    #[test]
    fn test_leading_tickers() {
        let portfolio = Portfolio::new("u")
            .with_holding(Holding::new("AAPL", dec!(10), dec!(100)))
            .with_holding(Holding::new("MSFT", dec!(5), dec!(200)))
            .with_holding(Holding::new("GOOGL", dec!(1), dec!(50)))
            .with_holding(Holding::new("TSLA", dec!(2), dec!(25)));

        let tickers: Vec<_> = portfolio.leading_tickers(3).collect();
        assert_eq!(tickers, ["AAPL", "MSFT", "GOOGL"]);
    }

    #[test]
    fn test_validate_rejects_negative_shares() {
        let portfolio =
            Portfolio::new("u").with_holding(Holding::new("AAPL", dec!(-1), dec!(100)));
        assert!(matches!(
            portfolio.validate(),
            Err(AdvisorError::InvalidPortfolio(_))
        ));
        assert!(Portfolio::new("u").validate().is_ok());
        assert!(Portfolio::new(" ").validate().is_err());
    }
}
