//! Configuration types for scoring variants and the orchestrator.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::connector::ConnectorKey;
use crate::instrument::AssetKind;
use crate::rating::{RatingBands, RecommendationTable};

/// Strategy for selecting among eligible data providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FetchStrategy {
    /// Use priority order and fall back to the next provider on failure.
    #[default]
    PriorityWithFallback,
    /// Race all eligible providers concurrently and return the first success.
    Latency,
}

/// Two-step threshold rule for metrics where lower values score better
/// (P/E ratio, beta).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepDown {
    /// Values strictly below this earn `strong_pts`.
    pub strong_below: f64,
    /// Values strictly below this (but not below `strong_below`) earn `ok_pts`.
    pub ok_below: f64,
    /// Points for the strong band.
    pub strong_pts: i16,
    /// Points for the lenient band.
    pub ok_pts: i16,
}

/// Two-step threshold rule for metrics where higher values score better
/// (dividend yield).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepUp {
    /// Values strictly above this earn `strong_pts`.
    pub strong_above: f64,
    /// Values strictly above this (but not above `strong_above`) earn `ok_pts`.
    pub ok_above: f64,
    /// Points for the strong band.
    pub strong_pts: i16,
    /// Points for the lenient band.
    pub ok_pts: i16,
}

/// Sector bonus/penalty rule. Matching is case-insensitive on the exact
/// sector string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorRule {
    /// Sectors earning the bonus.
    pub favored: Vec<String>,
    /// Points for a favored sector.
    pub favored_pts: i16,
    /// Sectors incurring the penalty.
    pub penalized: Vec<String>,
    /// Points for a penalized sector, normally negative.
    pub penalized_pts: i16,
}

/// Rule table for the ESG-Light additive scoring variant.
///
/// Defaults reproduce the production rule set: P/E +25 below 20 / +15 below
/// 40, dividend yield +25 above 2% / +10 above 1%, beta +20 below 1.0 / +10
/// below 1.3, sector +25 for utilities and renewable energy / −10 for
/// oil & gas and coal, rating bands 85/70/50.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsgLightConfig {
    /// Price-to-earnings rule.
    pub pe: StepDown,
    /// Dividend-yield rule (fractions).
    pub dividend: StepUp,
    /// Beta rule.
    pub beta: StepDown,
    /// Sector bonus/penalty rule.
    pub sector: SectorRule,
    /// Score cutoffs for the rating tiers.
    pub bands: RatingBands,
    /// Rating-to-recommendation mapping.
    pub recommendations: RecommendationTable,
}

impl Default for EsgLightConfig {
    fn default() -> Self {
        Self {
            pe: StepDown {
                strong_below: 20.0,
                ok_below: 40.0,
                strong_pts: 25,
                ok_pts: 15,
            },
            dividend: StepUp {
                strong_above: 0.02,
                ok_above: 0.01,
                strong_pts: 25,
                ok_pts: 10,
            },
            beta: StepDown {
                strong_below: 1.0,
                ok_below: 1.3,
                strong_pts: 20,
                ok_pts: 10,
            },
            sector: SectorRule {
                favored: vec!["utilities".to_string(), "renewable energy".to_string()],
                favored_pts: 25,
                penalized: vec!["oil & gas".to_string(), "coal".to_string()],
                penalized_pts: -10,
            },
            bands: RatingBands::default(),
            recommendations: RecommendationTable::default(),
        }
    }
}

/// Raw-field thresholds for the growth scan's extended recommendation.
///
/// All rate-like thresholds are fractions, matching the normalized record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthAdviceConfig {
    /// Minimum upside for a buy verdict.
    pub upside_buy: f64,
    /// Minimum return on assets for a buy verdict.
    pub roa_buy: f64,
    /// Maximum debt ratio for a buy verdict.
    pub max_debt_ratio_buy: f64,
    /// Maximum beta for a buy verdict.
    pub max_beta_buy: f64,
    /// Minimum upside for a watch verdict.
    pub upside_watch: f64,
    /// Minimum return on assets for a watch verdict.
    pub roa_watch: f64,
    /// Upside at or below this forces an avoid verdict.
    pub max_upside_avoid: f64,
    /// Debt ratio above this forces an avoid verdict.
    pub min_debt_ratio_avoid: f64,
    /// Return on assets below this forces an avoid verdict.
    pub max_roa_avoid: f64,
}

impl Default for GrowthAdviceConfig {
    fn default() -> Self {
        Self {
            upside_buy: 0.25,
            roa_buy: 0.12,
            max_debt_ratio_buy: 1.0,
            max_beta_buy: 1.2,
            upside_watch: 0.10,
            roa_watch: 0.06,
            max_upside_avoid: 0.0,
            min_debt_ratio_avoid: 2.0,
            max_roa_avoid: 0.03,
        }
    }
}

/// Rule table for the growth-scan scoring variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthScanConfig {
    /// Base fair P/E before the growth adjustment.
    pub base_fair_pe: f64,
    /// Multiplier applied to the earnings-growth fraction.
    pub growth_multiplier: f64,
    /// Growth estimate used when the provider reports none.
    ///
    /// The one deliberate missing-field default in the engine: the fair-P/E
    /// heuristic needs a baseline to be comparable at all.
    pub default_growth: f64,
    /// Minimum one-year performance to earn a star.
    pub perf_1y_min: f64,
    /// Minimum six-month performance to earn a star.
    pub perf_6m_min: f64,
    /// Minimum return on assets to earn a star.
    pub roa_min: f64,
    /// Minimum dividend yield to earn a star.
    pub dividend_min: f64,
    /// Thresholds for the extended recommendation.
    pub advice: GrowthAdviceConfig,
}

impl Default for GrowthScanConfig {
    fn default() -> Self {
        Self {
            base_fair_pe: 15.0,
            growth_multiplier: 100.0,
            default_growth: 0.1,
            perf_1y_min: 0.10,
            perf_6m_min: 0.05,
            roa_min: 0.10,
            dividend_min: 0.02,
            advice: GrowthAdviceConfig::default(),
        }
    }
}

/// Global configuration for the `Kompass` orchestrator.
#[derive(Debug, Clone)]
pub struct KompassConfig {
    /// Preferred provider order per asset kind.
    pub per_kind_priority: HashMap<AssetKind, Vec<ConnectorKey>>,
    /// Preferred provider order per symbol; takes precedence over kind rules.
    pub per_symbol_priority: HashMap<String, Vec<ConnectorKey>>,
    /// Strategy for fetching from multiple providers.
    pub fetch_strategy: FetchStrategy,
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Optional overall deadline for fan-out aggregations (snapshot/screen).
    pub request_timeout: Option<Duration>,
}

impl Default for KompassConfig {
    fn default() -> Self {
        Self {
            per_kind_priority: HashMap::new(),
            per_symbol_priority: HashMap::new(),
            fetch_strategy: FetchStrategy::default(),
            provider_timeout: Duration::from_secs(5),
            request_timeout: None,
        }
    }
}
