//! Error Types for the Equity Advisor

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Portfolio not found for user {0}")]
    PortfolioNotFound(String),

    #[error("Invalid portfolio: {0}")]
    InvalidPortfolio(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AdvisorError {
    /// Get user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            AdvisorError::PortfolioNotFound(user) => format!("No portfolio on file for '{user}'."),
            AdvisorError::InvalidPortfolio(msg) => format!("Portfolio rejected: {msg}"),
            AdvisorError::Config(_) => "Service configuration error.".into(),
        }
    }
}
