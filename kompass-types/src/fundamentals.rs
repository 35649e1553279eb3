//! Normalized fundamentals DTOs consumed by the scoring engine.
//!
//! Conventions
//! -----------
//! Every field is optional: absence means *unknown*, never zero. All
//! rate-like quantities are fractions (a dividend yield of `0.02` is 2%, a
//! one-year performance of `0.15` is +15%). Connectors are responsible for
//! converting provider-specific shapes and units into these conventions at
//! their own boundary; nothing downstream re-interprets units.

use serde::{Deserialize, Serialize};

/// Valuation, profitability, and balance-sheet figures from one provider call.
///
/// This is the raw building block a connector returns; the orchestrator
/// merges it with profile, ESG, and performance data into a
/// [`FundamentalsRecord`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsSnapshot {
    /// Last traded price.
    pub price: Option<f64>,
    /// Trailing price-to-earnings ratio.
    pub pe: Option<f64>,
    /// Trailing earnings per share.
    pub eps: Option<f64>,
    /// Trailing dividend yield as a fraction.
    pub dividend_yield: Option<f64>,
    /// Volatility relative to the overall market (1.0 = market average).
    pub beta: Option<f64>,
    /// Market capitalization in the quote currency.
    pub market_cap: Option<f64>,
    /// Trailing twelve-month revenue.
    pub revenue: Option<f64>,
    /// Net profit margin as a fraction.
    pub profit_margin: Option<f64>,
    /// Return on assets as a fraction.
    pub roa: Option<f64>,
    /// Return on equity as a fraction.
    pub roe: Option<f64>,
    /// Total debt from the most recent balance sheet.
    pub total_debt: Option<f64>,
    /// Total assets from the most recent balance sheet.
    pub total_assets: Option<f64>,
    /// Quarter-over-quarter earnings growth as a fraction.
    pub earnings_quarterly_growth: Option<f64>,
    /// Mean analyst price target.
    pub price_target: Option<f64>,
}

/// Company descriptive data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Display name of the company.
    pub name: Option<String>,
    /// Sector classification, provider spelling preserved.
    pub sector: Option<String>,
    /// Industry classification within the sector.
    pub industry: Option<String>,
}

/// ESG sustainability scores on the provider's 0–100 composite scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EsgScores {
    /// Composite total ESG score.
    pub total: Option<f64>,
    /// Environmental pillar score.
    pub environmental: Option<f64>,
    /// Social pillar score.
    pub social: Option<f64>,
    /// Governance pillar score.
    pub governance: Option<f64>,
}

/// Trailing price performance windows, all fractions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// Six-month price change.
    pub r6m: Option<f64>,
    /// One-year price change.
    pub r1y: Option<f64>,
    /// Compound annual growth rate over (up to) the last five years,
    /// computed over the actually observed window.
    pub cagr_5y: Option<f64>,
}

/// Normalized per-instrument fundamentals record: the scoring engine's input.
///
/// Produced fresh per request by the fetch/normalization layer, consumed once
/// by the scoring engine, and discarded. There is no caching and no mutation
/// across calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalsRecord {
    /// Last traded price.
    pub price: Option<f64>,
    /// Trailing price-to-earnings ratio.
    pub pe: Option<f64>,
    /// Trailing earnings per share.
    pub eps: Option<f64>,
    /// Trailing dividend yield as a fraction.
    pub dividend_yield: Option<f64>,
    /// Volatility relative to the overall market.
    pub beta: Option<f64>,
    /// Sector classification, provider spelling preserved.
    pub sector: Option<String>,
    /// Industry classification within the sector.
    pub industry: Option<String>,
    /// Composite total ESG score (0–100).
    pub esg_total: Option<f64>,
    /// Return on assets as a fraction.
    pub roa: Option<f64>,
    /// Return on equity as a fraction.
    pub roe: Option<f64>,
    /// Net profit margin as a fraction.
    pub profit_margin: Option<f64>,
    /// Quarter-over-quarter earnings growth as a fraction.
    pub earnings_quarterly_growth: Option<f64>,
    /// Total debt from the most recent balance sheet.
    pub total_debt: Option<f64>,
    /// Total assets from the most recent balance sheet.
    pub total_assets: Option<f64>,
    /// Market capitalization in the quote currency.
    pub market_cap: Option<f64>,
    /// Trailing twelve-month revenue.
    pub revenue: Option<f64>,
    /// Mean analyst price target.
    pub price_target: Option<f64>,
    /// Six-month price change as a fraction.
    pub perf_6m: Option<f64>,
    /// One-year price change as a fraction.
    pub perf_1y: Option<f64>,
    /// Compound annual growth rate over the trailing five-year window.
    pub cagr_5y: Option<f64>,
}

impl FundamentalsRecord {
    /// Debt relative to total assets, as a fraction.
    ///
    /// Returns `None` when either operand is unknown or total assets is zero;
    /// the division never faults and never yields infinity.
    #[must_use]
    pub fn debt_ratio(&self) -> Option<f64> {
        match (self.total_debt, self.total_assets) {
            (Some(debt), Some(assets)) if assets != 0.0 => {
                let ratio = debt / assets;
                ratio.is_finite().then_some(ratio)
            }
            _ => None,
        }
    }

    /// Upside to the mean analyst price target, as a fraction of the price.
    ///
    /// Guarded like [`debt_ratio`](Self::debt_ratio): `None` when price or
    /// target is unknown or the price is zero.
    #[must_use]
    pub fn upside(&self) -> Option<f64> {
        match (self.price, self.price_target) {
            (Some(price), Some(target)) if price != 0.0 => {
                let upside = (target - price) / price;
                upside.is_finite().then_some(upside)
            }
            _ => None,
        }
    }
}
