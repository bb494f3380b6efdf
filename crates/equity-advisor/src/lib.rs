//! # equity-advisor
//!
//! Equity research advisor that answers free-text questions with
//! keyword-classified, templated analysis.
//!
//! ## Pipeline
//!
//! ```text
//! message ──▶ SessionStore (resolve + user turn)
//!         ──▶ classify          bull_bear | earnings | comparison | risk | general
//!         ──▶ extract_ticker    "What's the bull case for AAPL?" → AAPL
//!         ──▶ ResponseTemplate  select + render (optional portfolio context)
//!         ──▶ citations         fixed "(mock data)" metrics
//!         ──▶ SessionStore (assistant turn) ──▶ ChatResponse
//! ```
//!
//! Every step is deterministic and total: any text, including the empty
//! string, produces a response. Figures and citations are synthetic until a
//! market-data backend exists.

pub mod advisor;
pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod portfolio;
pub mod response;

pub use advisor::FinancialAdvisor;
pub use analysis::AnalysisCategory;
pub use config::AdvisorConfig;
pub use error::{AdvisorError, Result};
pub use model::{ChatResponse, Holding, Portfolio};
pub use portfolio::{MemoryPortfolioSource, PortfolioSource};

/// Persona prompt for the advisor, for use once an LLM backend replaces the
/// templates
pub const SYSTEM_PROMPT: &str = r"You are a knowledgeable financial advisor assistant helping individual investors.

Your role:
- Provide evidence-backed market insights
- Analyze portfolio holdings with bull/bear perspectives
- Surface relevant metrics and data
- Flag uncertainty and missing data clearly
- Always include appropriate disclaimers

Principles:
- Evidence over hype: cite underlying data and metrics
- Transparency: acknowledge limitations and data gaps
- Risk awareness: highlight potential downsides
- No direct investment advice: provide information for informed decision-making";
