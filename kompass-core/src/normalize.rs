//! Guarded ratio math and normalized-record assembly.
//!
//! Connectors deal with duck-typed provider payloads; everything that crosses
//! into the scoring domain goes through these helpers so that missing
//! operands, zero denominators, and non-finite garbage all collapse to
//! `None` instead of faulting or poisoning downstream arithmetic.

use kompass_types::{
    CompanyProfile, EsgScores, FundamentalsRecord, FundamentalsSnapshot, PerformanceSummary,
};

/// Drop non-finite values at the provider boundary.
#[must_use]
pub fn sanitize(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}

/// Guarded division: `None` when either operand is missing, the denominator
/// is zero, or the result would be non-finite.
#[must_use]
pub fn ratio(num: Option<f64>, den: Option<f64>) -> Option<f64> {
    match (sanitize(num), sanitize(den)) {
        (Some(n), Some(d)) if d != 0.0 => sanitize(Some(n / d)),
        _ => None,
    }
}

/// Fractional change from `start` to `end`, guarded like [`ratio`].
#[must_use]
pub fn pct_change(start: Option<f64>, end: Option<f64>) -> Option<f64> {
    match (sanitize(start), sanitize(end)) {
        (Some(s), Some(e)) if s != 0.0 => sanitize(Some((e - s) / s)),
        _ => None,
    }
}

/// Compound annual growth rate over an observed window, as a fraction.
///
/// `years` must describe the *actual* span between the first and last
/// observation; callers derive it from real timestamps rather than the
/// nominal label of the request window. Returns `None` for non-positive
/// prices or degenerate windows.
#[must_use]
pub fn cagr(start: Option<f64>, end: Option<f64>, years: f64) -> Option<f64> {
    match (sanitize(start), sanitize(end)) {
        (Some(s), Some(e)) if s > 0.0 && e > 0.0 && years > 0.0 => {
            sanitize(Some((e / s).powf(1.0 / years) - 1.0))
        }
        _ => None,
    }
}

/// Merge component DTOs into the normalized scoring input.
///
/// Missing components simply leave their fields unset; the record stays
/// usable by the (total) scoring engine regardless of which legs resolved.
#[must_use]
pub fn assemble(
    snapshot: Option<&FundamentalsSnapshot>,
    profile: Option<&CompanyProfile>,
    esg: Option<&EsgScores>,
    performance: Option<&PerformanceSummary>,
) -> FundamentalsRecord {
    let mut rec = FundamentalsRecord::default();

    if let Some(s) = snapshot {
        rec.price = sanitize(s.price);
        rec.pe = sanitize(s.pe);
        rec.eps = sanitize(s.eps);
        rec.dividend_yield = sanitize(s.dividend_yield);
        rec.beta = sanitize(s.beta);
        rec.market_cap = sanitize(s.market_cap);
        rec.revenue = sanitize(s.revenue);
        rec.profit_margin = sanitize(s.profit_margin);
        rec.roa = sanitize(s.roa);
        rec.roe = sanitize(s.roe);
        rec.total_debt = sanitize(s.total_debt);
        rec.total_assets = sanitize(s.total_assets);
        rec.earnings_quarterly_growth = sanitize(s.earnings_quarterly_growth);
        rec.price_target = sanitize(s.price_target);
    }

    if let Some(p) = profile {
        rec.sector = p.sector.clone();
        rec.industry = p.industry.clone();
    }

    if let Some(e) = esg {
        rec.esg_total = sanitize(e.total);
    }

    if let Some(perf) = performance {
        rec.perf_6m = sanitize(perf.r6m);
        rec.perf_1y = sanitize(perf.r1y);
        rec.cagr_5y = sanitize(perf.cagr_5y);
    }

    rec
}
