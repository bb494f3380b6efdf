//! Citation Generator
//!
//! Fixed, self-labelled evidence strings per category. Every entry ends in
//! "(mock data)" until a market-data source is wired in.

use crate::analysis::AnalysisCategory;
use crate::model::Portfolio;

const BULL_BEAR: &[&str] = &[
    "P/E Ratio: 22.5 (mock data)",
    "Revenue Growth YoY: +15% (mock data)",
    "Profit Margin: 28% (mock data)",
];

const EARNINGS: &[&str] = &[
    "Q3 EPS: $2.45 vs est. $2.30 (mock data)",
    "Revenue: $12.5B vs est. $12.1B (mock data)",
];

const RISK: &[&str] = &[
    "30-day volatility: 18% (mock data)",
    "Beta: 1.15 (mock data)",
    "Max drawdown (1Y): -22% (mock data)",
];

/// Citations for a category. The portfolio is accepted for future
/// holding-specific metrics and currently ignored.
pub fn citations(category: AnalysisCategory, _portfolio: Option<&Portfolio>) -> Vec<String> {
    let entries: &[&str] = match category {
        AnalysisCategory::BullBear => BULL_BEAR,
        AnalysisCategory::Earnings => EARNINGS,
        AnalysisCategory::Risk => RISK,
        AnalysisCategory::Comparison | AnalysisCategory::General => &[],
    };
    entries.iter().map(|s| (*s).to_string()).collect()
}
