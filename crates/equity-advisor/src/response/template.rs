//! Response Template Engine
//!
//! One variant per reply shape. [`ResponseTemplate::select`] picks the shape
//! from the category and raw text; [`ResponseTemplate::render`] fills it in.
//! All figures are synthetic constants.

use crate::analysis::AnalysisCategory;
use crate::model::Portfolio;

const GENERIC_SUBJECT: &str = "this stock";
const MOCK_NOTE: &str = "Note: This is a mock analysis. Real data integration pending.";

/// Reply shapes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseTemplate {
    BullCase,
    BearCase,
    BalancedView,
    Earnings,
    Risk,
    General,
}

impl ResponseTemplate {
    /// Choose the template for a classified message.
    ///
    /// Bull/bear requests re-check the text on their own: "bull" wins over
    /// "bear", and neither (e.g. "make a case") gives the balanced view.
    /// Comparisons have no template of their own yet and get the general
    /// help text.
    pub fn select(category: AnalysisCategory, text: &str) -> Self {
        match category {
            AnalysisCategory::BullBear => {
                let lower = text.to_lowercase();
                if lower.contains("bull") {
                    ResponseTemplate::BullCase
                } else if lower.contains("bear") {
                    ResponseTemplate::BearCase
                } else {
                    ResponseTemplate::BalancedView
                }
            }
            AnalysisCategory::Earnings => ResponseTemplate::Earnings,
            AnalysisCategory::Risk => ResponseTemplate::Risk,
            AnalysisCategory::Comparison | AnalysisCategory::General => ResponseTemplate::General,
        }
    }

    /// Render the reply. Never empty.
    ///
    /// `context_holdings` bounds how many of the portfolio's leading
    /// tickers the general template mentions; values below 1 are treated
    /// as 1 so a non-empty portfolio is always named.
    pub fn render(
        self,
        ticker: Option<&str>,
        portfolio: Option<&Portfolio>,
        context_holdings: usize,
    ) -> String {
        let ticker = ticker.map(str::to_uppercase);

        match self {
            ResponseTemplate::BullCase => bull_case(&headline_subject(ticker)),
            ResponseTemplate::BearCase => bear_case(&headline_subject(ticker)),
            ResponseTemplate::BalancedView => balanced_view(&headline_subject(ticker)),
            ResponseTemplate::Earnings => format!(
                "Here's an earnings analysis for {}:\n\n\
                 Mock earnings data will be displayed here with YoY comparisons and surprises.",
                ticker.as_deref().unwrap_or("your holdings")
            ),
            ResponseTemplate::Risk => format!(
                "Risk analysis for {}:\n\n\
                 Mock risk metrics including volatility, concentration, and diversification scores.",
                ticker.as_deref().unwrap_or("your portfolio")
            ),
            ResponseTemplate::General => general(portfolio, context_holdings),
        }
    }
}

fn headline_subject(ticker: Option<String>) -> String {
    ticker.unwrap_or_else(|| GENERIC_SUBJECT.to_uppercase())
}

fn bull_case(subject: &str) -> String {
    format!(
        "**Bull Case for {subject}**

**Strengths:**
- Strong revenue growth trajectory (mock: +15% YoY)
- Expanding profit margins (mock: 25% → 28%)
- Market leadership in key segments
- Robust balance sheet with low debt

**Catalysts:**
- New product launches expected in Q2
- Expanding into high-growth markets
- Operational efficiency improvements

**Valuation:**
- Trading at reasonable P/E relative to growth (mock: 22x vs sector 25x)
- Free cash flow generation supports current valuation

{MOCK_NOTE}"
    )
}

fn bear_case(subject: &str) -> String {
    format!(
        "**Bear Case for {subject}**

**Risks:**
- Increasing competition in core markets
- Potential margin compression (mock: concerns about input costs)
- High valuation relative to historical averages
- Regulatory headwinds in key jurisdictions

**Concerns:**
- Customer concentration risk (top 3 customers = 40% revenue)
- Execution risk on new initiatives
- Macroeconomic sensitivity

**Valuation:**
- Premium valuation leaves little room for disappointment
- Multiple expansion may reverse in downturn

{MOCK_NOTE}"
    )
}

fn balanced_view(subject: &str) -> String {
    format!(
        "**Analysis for {subject}**

**Bull Factors:**
- Revenue growth momentum
- Strong competitive position
- Margin expansion potential

**Bear Factors:**
- Valuation concerns
- Market competition intensifying
- Execution risks on growth plans

**Recommendation:**
Monitor upcoming earnings and sector trends. Consider position sizing relative to overall portfolio risk.

{MOCK_NOTE}"
    )
}

fn general(portfolio: Option<&Portfolio>, context_holdings: usize) -> String {
    let held = portfolio
        .map(|p| p.leading_tickers(context_holdings.max(1)).collect::<Vec<_>>())
        .filter(|tickers| !tickers.is_empty())
        .map(|tickers| format!(" I can see you hold {}.", tickers.join(", ")))
        .unwrap_or_default();

    format!(
        "I'm here to help with your investment research.{held} \
         You can ask me about bull/bear cases, earnings analysis, stock comparisons, or risk assessments."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Holding;
    use rust_decimal_macros::dec;

    fn portfolio(tickers: &[&str]) -> Portfolio {
        tickers.iter().fold(Portfolio::new("test-user"), |p, t| {
            p.with_holding(Holding::new(*t, dec!(10), dec!(100)))
        })
    }

    #[test]
    fn test_select_bull_bear_variants() {
        let bb = AnalysisCategory::BullBear;
        assert_eq!(ResponseTemplate::select(bb, "bull case"), ResponseTemplate::BullCase);
        assert_eq!(ResponseTemplate::select(bb, "Bear case"), ResponseTemplate::BearCase);
        assert_eq!(ResponseTemplate::select(bb, "bull or bear?"), ResponseTemplate::BullCase);
        assert_eq!(
            ResponseTemplate::select(bb, "Make a case for buying"),
            ResponseTemplate::BalancedView
        );
    }

    #[test]
    fn test_comparison_falls_back_to_general() {
        assert_eq!(
            ResponseTemplate::select(AnalysisCategory::Comparison, "AAPL vs MSFT"),
            ResponseTemplate::General
        );
    }

    #[test]
    fn test_bull_case_sections() {
        let text = ResponseTemplate::BullCase.render(Some("AAPL"), None, 3);
        assert!(text.starts_with("**Bull Case for AAPL**"));
        for section in ["**Strengths:**", "**Catalysts:**", "**Valuation:**"] {
            assert!(text.contains(section), "missing {section}");
        }
        assert!(text.ends_with(MOCK_NOTE));
    }

    #[test]
    fn test_bear_case_sections() {
        let text = ResponseTemplate::BearCase.render(Some("MSFT"), None, 3);
        assert!(text.starts_with("**Bear Case for MSFT**"));
        for section in ["**Risks:**", "**Concerns:**", "**Valuation:**"] {
            assert!(text.contains(section), "missing {section}");
        }
        assert!(text.ends_with(MOCK_NOTE));
    }

    #[test]
    fn test_balanced_view_without_ticker() {
        let text = ResponseTemplate::BalancedView.render(None, None, 3);
        assert!(text.starts_with("**Analysis for THIS STOCK**"));
        assert!(text.contains("**Bull Factors:**"));
        assert!(text.contains("**Bear Factors:**"));
        assert!(text.contains("**Recommendation:**"));
    }

    #[test]
    fn test_ticker_is_uppercased() {
        let text = ResponseTemplate::BullCase.render(Some("nvda"), None, 3);
        assert!(text.contains("Bull Case for NVDA"));
        let text = ResponseTemplate::Earnings.render(Some("goog"), None, 3);
        assert!(text.contains("GOOG"));
    }

    #[test]
    fn test_earnings_and_risk_fallbacks() {
        let earnings = ResponseTemplate::Earnings.render(None, None, 3);
        assert!(earnings.starts_with("Here's an earnings analysis for your holdings:"));

        let risk = ResponseTemplate::Risk.render(Some("TSLA"), None, 3);
        assert!(risk.starts_with("Risk analysis for TSLA:"));
        let risk = ResponseTemplate::Risk.render(None, None, 3);
        assert!(risk.contains("your portfolio"));
    }

    #[test]
    fn test_general_without_portfolio() {
        let text = ResponseTemplate::General.render(None, None, 3);
        assert_eq!(
            text,
            "I'm here to help with your investment research. You can ask me about bull/bear cases, \
             earnings analysis, stock comparisons, or risk assessments."
        );
    }

    #[test]
    fn test_general_lists_leading_holdings() {
        let p = portfolio(&["AAPL", "MSFT", "GOOGL", "TSLA"]);
        let text = ResponseTemplate::General.render(None, Some(&p), 3);
        assert!(text.contains(" I can see you hold AAPL, MSFT, GOOGL."));
        assert!(!text.contains("TSLA"));
    }

    #[test]
    fn test_general_zero_holdings_limit_still_names_portfolio() {
        let p = portfolio(&["AAPL", "MSFT"]);
        let text = ResponseTemplate::General.render(None, Some(&p), 0);
        assert!(text.contains(" I can see you hold AAPL."));
        assert!(!text.contains("MSFT"));
    }

    #[test]
    fn test_general_with_empty_portfolio_omits_clause() {
        let p = portfolio(&[]);
        let text = ResponseTemplate::General.render(None, Some(&p), 3);
        assert!(!text.contains("I can see you hold"));
    }
}
