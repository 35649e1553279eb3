//! Report envelopes produced by the orchestrator.

use serde::{Deserialize, Serialize};

use crate::error::KompassError;
use crate::fundamentals::FundamentalsRecord;
use crate::instrument::Instrument;
use crate::rating::{GrowthSignal, ScoreResult};

/// Summary of a normalized-fundamentals snapshot assembly.
///
/// Carries the requested `instrument`, the assembled record if the
/// fundamentals leg succeeded, and any non-fatal warnings from the optional
/// enrichment legs (profile, ESG, performance).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotReport {
    /// Requested instrument.
    pub instrument: Instrument,
    /// Assembled record, if resolvable.
    pub record: Option<FundamentalsRecord>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<KompassError>,
}

/// One scored row of an ESG-Light screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EsgLightRow {
    /// Screened instrument.
    pub instrument: Instrument,
    /// Normalized record the score was computed from.
    pub record: FundamentalsRecord,
    /// Scoring outcome.
    pub result: ScoreResult,
}

/// Result of an ESG-Light batch screen, rows sorted by descending score.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EsgLightReport {
    /// Successfully scored rows.
    pub rows: Vec<EsgLightRow>,
    /// Per-symbol failures that did not abort the batch.
    pub warnings: Vec<KompassError>,
}

/// One scored row of a growth scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthRow {
    /// Screened instrument.
    pub instrument: Instrument,
    /// Normalized record the signal was computed from.
    pub record: FundamentalsRecord,
    /// Scoring outcome.
    pub signal: GrowthSignal,
}

/// Result of a growth batch scan, rows sorted by descending star count.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GrowthScanReport {
    /// Successfully scored rows.
    pub rows: Vec<GrowthRow>,
    /// Per-symbol failures that did not abort the batch.
    pub warnings: Vec<KompassError>,
}
