//! Application State

use std::sync::Arc;

use equity_advisor::{FinancialAdvisor, MemoryPortfolioSource};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Advisor pipeline with its session store
    pub advisor: Arc<FinancialAdvisor>,

    /// Portfolio snapshots keyed by user ID
    pub portfolios: Arc<MemoryPortfolioSource>,
}

impl AppState {
    pub fn new(advisor: FinancialAdvisor) -> Self {
        Self {
            advisor: Arc::new(advisor),
            portfolios: Arc::new(MemoryPortfolioSource::new()),
        }
    }
}
