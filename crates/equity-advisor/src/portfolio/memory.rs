//! In-Memory Portfolio Source
//!
//! Holds snapshots pushed through the API for the lifetime of the process.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::PortfolioSource;
use crate::error::Result;
use crate::model::Portfolio;

#[derive(Default)]
pub struct MemoryPortfolioSource {
    portfolios: RwLock<HashMap<String, Portfolio>>,
}

impl MemoryPortfolioSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or replace a user's snapshot after validating it.
    ///
    /// Returns the snapshot it replaced, if any.
    pub async fn upsert(&self, portfolio: Portfolio) -> Result<Option<Portfolio>> {
        portfolio.validate()?;

        tracing::info!(
            user_id = %portfolio.user_id,
            holdings = portfolio.holdings.len(),
            "stored portfolio"
        );
        let mut portfolios = self.portfolios.write().await;
        Ok(portfolios.insert(portfolio.user_id.clone(), portfolio))
    }
}

#[async_trait]
impl PortfolioSource for MemoryPortfolioSource {
    async fn get_portfolio(&self, user_id: &str) -> Result<Option<Portfolio>> {
        Ok(self.portfolios.read().await.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisorError;
    use crate::model::Holding;
    use crate::response::ResponseTemplate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_upsert_and_fetch() {
        let source = MemoryPortfolioSource::new();
        let portfolio =
            Portfolio::new("user-1").with_holding(Holding::new("AAPL", dec!(100), dec!(150.50)));

        assert!(source.upsert(portfolio.clone()).await.unwrap().is_none());
        assert_eq!(source.get_portfolio("user-1").await.unwrap(), Some(portfolio));
    }

    #[tokio::test]
    async fn test_upsert_replaces() {
        let source = MemoryPortfolioSource::new();
        source.upsert(Portfolio::new("user-1")).await.unwrap();

        let updated =
            Portfolio::new("user-1").with_holding(Holding::new("MSFT", dec!(5), dec!(280)));
        let previous = source.upsert(updated).await.unwrap();
        assert!(previous.unwrap().holdings.is_empty());
        assert_eq!(source.require_portfolio("user-1").await.unwrap().holdings.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_portfolio() {
        let source = MemoryPortfolioSource::new();
        assert!(source.get_portfolio("ghost").await.unwrap().is_none());
        let err = source.require_portfolio("ghost").await.unwrap_err();
        assert!(matches!(err, AdvisorError::PortfolioNotFound(_)));
    }

    #[tokio::test]
    async fn test_invalid_portfolio_rejected() {
        let source = MemoryPortfolioSource::new();
        let bad = Portfolio::new("user-1").with_holding(Holding::new("", dec!(1), dec!(1)));
        assert!(source.upsert(bad).await.is_err());
        assert!(source.get_portfolio("user-1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_extreme_quantities_are_stored_and_rendered() {
        let source = MemoryPortfolioSource::new();
        let portfolio = Portfolio::new("whale")
            .with_holding(Holding::new("AAPL", Decimal::MAX, Decimal::from(2)))
            .with_holding(Holding::new("MSFT", Decimal::MAX, Decimal::MAX));
        source.upsert(portfolio).await.unwrap();

        let stored = source.require_portfolio("whale").await.unwrap();
        let text = ResponseTemplate::General.render(None, Some(&stored), 3);
        assert!(text.contains("I can see you hold AAPL, MSFT."));
    }
}
