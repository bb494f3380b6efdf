//! Portfolio Sources
//!
//! Where the request layer looks up a user's holdings before handing them to
//! the advisor. The advisor itself never fetches portfolios.

mod memory;

pub use memory::MemoryPortfolioSource;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::Portfolio;

/// Portfolio source trait (Strategy pattern)
///
/// Implement this for each backing store: brokerage API, database, etc.
#[async_trait]
pub trait PortfolioSource: Send + Sync {
    /// Latest snapshot for a user, if one exists
    async fn get_portfolio(&self, user_id: &str) -> Result<Option<Portfolio>>;

    /// Like `get_portfolio`, failing when the user has none
    async fn require_portfolio(&self, user_id: &str) -> Result<Portfolio> {
        self.get_portfolio(user_id)
            .await?
            .ok_or_else(|| crate::AdvisorError::PortfolioNotFound(user_id.to_string()))
    }
}
