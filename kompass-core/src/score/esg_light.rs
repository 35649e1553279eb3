//! Additive ESG-Light threshold scoring.

use kompass_types::{EsgLightConfig, FundamentalsRecord, ScoreResult, SectorRule, StepDown, StepUp};

fn step_down(value: Option<f64>, rule: &StepDown) -> i16 {
    match value {
        Some(v) if v.is_finite() && v < rule.strong_below => rule.strong_pts,
        Some(v) if v.is_finite() && v < rule.ok_below => rule.ok_pts,
        _ => 0,
    }
}

fn step_up(value: Option<f64>, rule: &StepUp) -> i16 {
    match value {
        Some(v) if v.is_finite() && v > rule.strong_above => rule.strong_pts,
        Some(v) if v.is_finite() && v > rule.ok_above => rule.ok_pts,
        _ => 0,
    }
}

fn sector_points(sector: Option<&str>, rule: &SectorRule) -> i16 {
    let Some(sector) = sector else { return 0 };
    if rule.favored.iter().any(|s| s.eq_ignore_ascii_case(sector)) {
        rule.favored_pts
    } else if rule
        .penalized
        .iter()
        .any(|s| s.eq_ignore_ascii_case(sector))
    {
        rule.penalized_pts
    } else {
        0
    }
}

/// Score a record with the ESG-Light additive rule table.
///
/// Each metric contributes its configured points when present and inside a
/// band, and zero when unknown. The sum is clipped to [0, 100], the rating is
/// derived from the configured bands, and the recommendation from the
/// configured table. No hidden state, no history.
#[must_use]
pub fn score_esg_light(record: &FundamentalsRecord, cfg: &EsgLightConfig) -> ScoreResult {
    let sum = step_down(record.pe, &cfg.pe)
        + step_up(record.dividend_yield, &cfg.dividend)
        + step_down(record.beta, &cfg.beta)
        + sector_points(record.sector.as_deref(), &cfg.sector);

    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let score = sum.clamp(0, 100) as u8;
    let rating = cfg.bands.classify(score);

    ScoreResult {
        score,
        rating,
        recommendation: cfg.recommendations.lookup(rating),
    }
}
