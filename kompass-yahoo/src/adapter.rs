//! Mapping from provider wire shapes onto the normalized DTOs.
//!
//! This is the normalization boundary: provider-specific field names and the
//! `{ raw, fmt }` wrappers stop here. Unknown or non-finite values are
//! null-filled rather than propagated, so scoring never sees provider quirks.

use kompass_core::normalize::{cagr, pct_change, sanitize};
use kompass_core::{CompanyProfile, EsgScores, FundamentalsSnapshot, PerformanceSummary};

use crate::wire::{self, raw};

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_YEAR: f64 = 365.25 * 86_400.0;

pub(crate) fn map_fundamentals(result: &wire::QuoteSummaryResult) -> FundamentalsSnapshot {
    let detail = result.summary_detail.clone().unwrap_or_default();
    let financial = result.financial_data.clone().unwrap_or_default();
    let stats = result.default_key_statistics.clone().unwrap_or_default();

    FundamentalsSnapshot {
        price: sanitize(raw(financial.current_price)),
        pe: sanitize(raw(detail.trailing_pe)),
        eps: sanitize(raw(stats.trailing_eps)),
        dividend_yield: sanitize(raw(detail.dividend_yield)),
        beta: sanitize(raw(detail.beta)),
        market_cap: sanitize(raw(detail.market_cap)),
        revenue: sanitize(raw(financial.total_revenue)),
        profit_margin: sanitize(raw(financial.profit_margins)),
        roa: sanitize(raw(financial.return_on_assets)),
        roe: sanitize(raw(financial.return_on_equity)),
        total_debt: sanitize(raw(financial.total_debt)),
        total_assets: sanitize(raw(stats.total_assets)),
        earnings_quarterly_growth: sanitize(raw(stats.earnings_quarterly_growth)),
        price_target: sanitize(raw(financial.target_mean_price)),
    }
}

pub(crate) fn map_profile(result: &wire::QuoteSummaryResult) -> CompanyProfile {
    let profile = result.asset_profile.clone().unwrap_or_default();
    let price = result.price.clone().unwrap_or_default();

    CompanyProfile {
        name: price.long_name.or(price.short_name),
        sector: profile.sector,
        industry: profile.industry,
    }
}

pub(crate) fn map_esg(result: &wire::QuoteSummaryResult) -> Option<EsgScores> {
    let module = result.esg_scores.as_ref()?;
    Some(EsgScores {
        total: sanitize(raw(module.total_esg)),
        environmental: sanitize(raw(module.environment_score)),
        social: sanitize(raw(module.social_score)),
        governance: sanitize(raw(module.governance_score)),
    })
}

/// Extract an ascending `(timestamp, close)` series from a chart result,
/// skipping null closes.
pub(crate) fn close_series(result: &wire::ChartResult) -> Vec<(i64, f64)> {
    let Some(timestamps) = &result.timestamp else {
        return Vec::new();
    };
    let Some(closes) = result
        .indicators
        .as_ref()
        .and_then(|i| i.quote.first())
        .and_then(|q| q.close.as_ref())
    else {
        return Vec::new();
    };

    timestamps
        .iter()
        .zip(closes.iter())
        .filter_map(|(ts, close)| {
            close
                .filter(|c| c.is_finite())
                .map(|c| (*ts, c))
        })
        .collect()
}

fn window_return(series: &[(i64, f64)], cutoff: i64, last: (i64, f64)) -> Option<f64> {
    let start = series.iter().find(|(ts, _)| *ts >= cutoff)?;
    if start.0 == last.0 {
        return None;
    }
    pct_change(Some(start.1), Some(last.1))
}

/// Compute trailing performance windows from a daily close series.
///
/// Windows are anchored at the series' own last observation rather than the
/// wall clock, and the CAGR denominator is the actually observed span in
/// years: a nominal five-year request over a shorter listing history is
/// annualized over the real window.
pub(crate) fn performance_from_series(series: &[(i64, f64)]) -> PerformanceSummary {
    let Some(&last) = series.last() else {
        return PerformanceSummary::default();
    };
    let first = series[0];

    #[allow(clippy::cast_precision_loss)]
    let years = (last.0 - first.0) as f64 / SECONDS_PER_YEAR;

    PerformanceSummary {
        r6m: window_return(series, last.0 - 183 * SECONDS_PER_DAY, last),
        r1y: window_return(series, last.0 - 365 * SECONDS_PER_DAY, last),
        cagr_5y: cagr(Some(first.1), Some(last.1), years),
    }
}
