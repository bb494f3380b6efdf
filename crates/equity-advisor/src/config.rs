//! Advisor Configuration
//!
//! Values come from the environment, falling back to defaults that mirror
//! the advisor's documented behavior.

use advisor_core::session::DEFAULT_SESSION_PREFIX;

use crate::error::{AdvisorError, Result};

/// Disclaimer attached to every response unless overridden
pub const DEFAULT_DISCLAIMER: &str =
    "This is not financial advice. All analysis is for informational purposes only.";

/// Confidence reported while responses are template-driven
pub const DEFAULT_CONFIDENCE: &str = "medium";

/// Holdings named in the general-help portfolio clause
pub const DEFAULT_CONTEXT_HOLDINGS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvisorConfig {
    /// Risk disclaimer returned with each response
    pub disclaimer: String,

    /// Placeholder confidence label
    pub confidence: String,

    /// Prefix for generated session identifiers
    pub session_prefix: String,

    /// How many leading holdings the general template mentions (at least 1)
    pub context_holdings: usize,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            disclaimer: DEFAULT_DISCLAIMER.into(),
            confidence: DEFAULT_CONFIDENCE.into(),
            session_prefix: DEFAULT_SESSION_PREFIX.into(),
            context_holdings: DEFAULT_CONTEXT_HOLDINGS,
        }
    }
}

impl AdvisorConfig {
    /// Read `ADVISOR_*` variables, keeping defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(disclaimer) = lookup("ADVISOR_DISCLAIMER") {
            config.disclaimer = disclaimer;
        }
        if let Some(confidence) = lookup("ADVISOR_CONFIDENCE") {
            config.confidence = confidence;
        }
        if let Some(prefix) = lookup("ADVISOR_SESSION_PREFIX") {
            if prefix.trim().is_empty() {
                return Err(AdvisorError::Config(
                    "ADVISOR_SESSION_PREFIX must not be empty".into(),
                ));
            }
            config.session_prefix = prefix;
        }
        if let Some(raw) = lookup("ADVISOR_CONTEXT_HOLDINGS") {
            // Zero would hide the holdings clause for non-empty portfolios.
            config.context_holdings = raw
                .trim()
                .parse()
                .ok()
                .filter(|&n: &usize| n > 0)
                .ok_or_else(|| {
                    AdvisorError::Config(format!(
                        "ADVISOR_CONTEXT_HOLDINGS must be a positive integer, got '{raw}'"
                    ))
                })?;
        }

        Ok(config)
    }

    pub fn with_disclaimer(mut self, disclaimer: impl Into<String>) -> Self {
        self.disclaimer = disclaimer.into();
        self
    }
}
