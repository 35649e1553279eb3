//! Data transfer objects, scoring configuration tables, and error taxonomy shared
//! across the kompass workspace.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod error;
mod fundamentals;
mod instrument;
mod rating;
mod report;

pub use capability::Capability;
pub use config::{
    EsgLightConfig, FetchStrategy, GrowthAdviceConfig, GrowthScanConfig, KompassConfig, SectorRule,
    StepDown, StepUp,
};
pub use connector::ConnectorKey;
pub use error::KompassError;
pub use fundamentals::{
    CompanyProfile, EsgScores, FundamentalsRecord, FundamentalsSnapshot, PerformanceSummary,
};
pub use instrument::{AssetKind, Instrument, Symbol};
pub use rating::{
    GrowthSignal, Rating, RatingBands, Recommendation, RecommendationTable, ScoreResult, StarRating,
};
pub use report::{EsgLightReport, EsgLightRow, GrowthRow, GrowthScanReport, SnapshotReport};
