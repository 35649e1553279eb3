//! Growth-scan predicate scoring with fair-P/E comparison.

use kompass_types::{
    FundamentalsRecord, GrowthAdviceConfig, GrowthScanConfig, GrowthSignal, Recommendation,
    StarRating,
};

/// Heuristic fair P/E derived from a quarterly earnings-growth estimate.
///
/// Missing or non-finite growth falls back to the configured default estimate
/// so the comparison baseline stays usable.
#[must_use]
pub fn fair_pe(growth: Option<f64>, cfg: &GrowthScanConfig) -> f64 {
    let g = growth
        .filter(|g| g.is_finite())
        .unwrap_or(cfg.default_growth);
    cfg.growth_multiplier.mul_add(g, cfg.base_fair_pe)
}

fn advise(
    record: &FundamentalsRecord,
    upside: Option<f64>,
    cfg: &GrowthAdviceConfig,
) -> Recommendation {
    let (Some(upside), Some(roa), Some(debt_ratio), Some(beta)) =
        (upside, record.roa, record.debt_ratio(), record.beta)
    else {
        return Recommendation::Inconclusive;
    };

    if upside > cfg.upside_buy
        && roa >= cfg.roa_buy
        && debt_ratio < cfg.max_debt_ratio_buy
        && beta < cfg.max_beta_buy
    {
        Recommendation::Buy
    } else if upside > cfg.upside_watch && roa >= cfg.roa_watch {
        Recommendation::Watch
    } else if upside < cfg.max_upside_avoid
        || debt_ratio > cfg.min_debt_ratio_avoid
        || roa < cfg.max_roa_avoid
    {
        Recommendation::Avoid
    } else {
        Recommendation::Hold
    }
}

/// Score a record with the growth-scan rule table.
///
/// Five independent, unweighted predicates each earn one star: one-year
/// performance, six-month performance, P/E below the fair P/E, return on
/// assets, and dividend yield. A predicate with a missing input is false,
/// never an error. The extended recommendation reads raw fields on top of the
/// star count and degrades to [`Recommendation::Inconclusive`] when any of
/// them is unknown.
#[must_use]
pub fn score_growth(record: &FundamentalsRecord, cfg: &GrowthScanConfig) -> GrowthSignal {
    let fair = fair_pe(record.earnings_quarterly_growth, cfg);

    let mut stars = 0u8;
    if record.perf_1y.is_some_and(|v| v > cfg.perf_1y_min) {
        stars += 1;
    }
    if record.perf_6m.is_some_and(|v| v > cfg.perf_6m_min) {
        stars += 1;
    }
    if record.pe.is_some_and(|pe| pe.is_finite() && pe < fair) {
        stars += 1;
    }
    if record.roa.is_some_and(|v| v > cfg.roa_min) {
        stars += 1;
    }
    if record.dividend_yield.is_some_and(|v| v > cfg.dividend_min) {
        stars += 1;
    }

    let upside = record.upside();

    GrowthSignal {
        stars: StarRating::new(stars),
        fair_pe: fair,
        upside,
        recommendation: advise(record, upside, &cfg.advice),
    }
}
