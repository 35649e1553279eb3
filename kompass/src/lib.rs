//! Kompass orchestrates stock screening across multiple market data providers.
//!
//! Overview
//! - Routes requests to connectors that implement the `kompass_core` contracts.
//! - Applies per-symbol and per-kind priorities to influence provider order.
//! - Assembles normalized fundamentals records from independent data legs and
//!   scores them with the pure engine from `kompass_core::score`.
//! - Normalizes error handling and exposes uniform domain types from `kompass_core`.
//!
//! Key behaviors and trade-offs
//! - Fetch strategy:
//!   - `PriorityWithFallback`: deterministic order, per-provider timeout, aggregates
//!     errors; fewer concurrent requests but potentially higher latency.
//!   - `Latency`: races eligible providers; lowest tail latency but higher request fanout.
//! - Snapshot assembly is best-effort: the profile, ESG, and performance legs
//!   enrich the record when available, and their failures become warnings
//!   instead of aborting the request. The scoring engine is total over
//!   partially-filled records, so a sparse snapshot still screens.
//! - Batch screens score each instrument independently and concurrently;
//!   there is no ordering dependency between records.
//!
//! Examples
//! Building an orchestrator and scoring one instrument:
//! ```rust,ignore
//! use std::sync::Arc;
//! use kompass::{EsgLightConfig, Instrument, Kompass};
//!
//! let yahoo = Arc::new(kompass_yahoo::YahooConnector::new_default());
//! let kompass = Kompass::builder().with_connector(yahoo).build()?;
//!
//! let nee = Instrument::equity("NEE")?;
//! let report = kompass.snapshot(&nee).await?;
//! if let Some(record) = report.record {
//!     let scored = kompass_core::score_esg_light(&record, &EsgLightConfig::default());
//!     println!("{} -> {} ({})", nee, scored.score, scored.rating);
//! }
//! ```
//!
//! Screening a watchlist:
//! ```rust,ignore
//! let report = kompass
//!     .screen()
//!     .instruments(&[Instrument::equity("NEE")?, Instrument::equity("XOM")?])?
//!     .esg_light(&EsgLightConfig::default())
//!     .await?;
//! for row in &report.rows {
//!     println!("{}: {} {}", row.instrument, row.result.score, row.result.recommendation);
//! }
//! ```
//!
//! See `kompass/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Kompass, KompassBuilder};
pub use router::screen::ScreenBuilder;
pub use router::util::{collapse_errors, join_with_deadline};

// Re-export core types for convenience
pub use kompass_core::{
    // Foundational types
    AssetKind,
    Capability,
    // Response types & data structures
    CompanyProfile,
    ConnectorKey,
    EsgLightConfig,
    EsgLightReport,
    EsgLightRow,
    EsgScores,
    FetchStrategy,
    FundamentalsRecord,
    FundamentalsSnapshot,
    GrowthRow,
    GrowthScanConfig,
    GrowthScanReport,
    GrowthSignal,
    Instrument,
    KompassConnector,
    KompassError,
    PerformanceSummary,
    Rating,
    RatingBands,
    Recommendation,
    RecommendationTable,
    ScoreResult,
    SnapshotReport,
    StarRating,
    Symbol,

    // Scoring entry points
    fair_pe,
    score_esg_light,
    score_growth,
};
