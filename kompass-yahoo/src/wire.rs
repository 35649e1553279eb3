//! Serde models for the provider's quoteSummary and chart payloads.
//!
//! The API wraps most numeric fields in `{ "raw": 1.23, "fmt": "1.23" }`
//! objects and omits whole modules for instruments that lack them. Every
//! field here is therefore optional with a container-level default; unknown
//! fields are ignored. Nothing outside this crate sees these shapes; the
//! adapter converts them into the normalized DTOs at the boundary.

use serde::Deserialize;

/// A `{ raw, fmt }` numeric wrapper. Only the raw value is consumed.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub(crate) struct RawValue {
    pub raw: Option<f64>,
}

/// Unwrap an optional `{ raw, fmt }` field to its numeric payload.
pub(crate) fn raw(v: Option<RawValue>) -> Option<f64> {
    v.and_then(|v| v.raw)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ApiError {
    pub code: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct QuoteSummaryEnvelope {
    pub quote_summary: Option<QuoteSummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct QuoteSummary {
    pub result: Option<Vec<QuoteSummaryResult>>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct QuoteSummaryResult {
    pub summary_detail: Option<SummaryDetail>,
    pub financial_data: Option<FinancialData>,
    pub default_key_statistics: Option<DefaultKeyStatistics>,
    pub asset_profile: Option<AssetProfile>,
    pub esg_scores: Option<EsgScoresModule>,
    pub price: Option<PriceModule>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct SummaryDetail {
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<RawValue>,
    pub dividend_yield: Option<RawValue>,
    pub beta: Option<RawValue>,
    pub market_cap: Option<RawValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct FinancialData {
    pub current_price: Option<RawValue>,
    pub return_on_assets: Option<RawValue>,
    pub return_on_equity: Option<RawValue>,
    pub profit_margins: Option<RawValue>,
    pub total_revenue: Option<RawValue>,
    pub total_debt: Option<RawValue>,
    pub target_mean_price: Option<RawValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct DefaultKeyStatistics {
    pub trailing_eps: Option<RawValue>,
    pub earnings_quarterly_growth: Option<RawValue>,
    pub total_assets: Option<RawValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AssetProfile {
    pub sector: Option<String>,
    pub industry: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct EsgScoresModule {
    pub total_esg: Option<RawValue>,
    pub environment_score: Option<RawValue>,
    pub social_score: Option<RawValue>,
    pub governance_score: Option<RawValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct PriceModule {
    pub long_name: Option<String>,
    pub short_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ChartEnvelope {
    pub chart: Option<Chart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ChartResult {
    pub timestamp: Option<Vec<i64>>,
    pub indicators: Option<Indicators>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct Indicators {
    pub quote: Vec<QuoteBlock>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct QuoteBlock {
    pub close: Option<Vec<Option<f64>>>,
}
