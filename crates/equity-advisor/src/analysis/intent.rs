//! Intent Classifier
//!
//! Maps free text to exactly one [`AnalysisCategory`]. Rules are tested in a
//! fixed order and the first match wins, so "bull case vs MSFT" is a
//! bull/bear request, not a comparison.

use serde::{Deserialize, Serialize};

/// Kind of analysis a message asks for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisCategory {
    BullBear,
    Earnings,
    Comparison,
    Risk,
    General,
}

impl AnalysisCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            AnalysisCategory::BullBear => "bull_bear",
            AnalysisCategory::Earnings => "earnings",
            AnalysisCategory::Comparison => "comparison",
            AnalysisCategory::Risk => "risk",
            AnalysisCategory::General => "general",
        }
    }
}

impl std::fmt::Display for AnalysisCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered keyword rules. Substring matches, so "case" also hits "showcase".
const RULES: &[(AnalysisCategory, &[&str])] = &[
    (AnalysisCategory::BullBear, &["bull", "bear", "case"]),
    (AnalysisCategory::Earnings, &["earnings", "report"]),
    (
        AnalysisCategory::Comparison,
        &["compare", "comparison", "versus", "vs"],
    ),
    (AnalysisCategory::Risk, &["risk", "volatility", "downside"]),
];

/// Classify a message. Total: anything unmatched is `General`.
pub fn classify(text: &str) -> AnalysisCategory {
    let lower = text.to_lowercase();

    let category = RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map_or(AnalysisCategory::General, |(category, _)| *category);

    tracing::debug!(%category, "classified message");
    category
}
