//! Re-export of foundational types from `kompass-types`.
// Consolidated re-exports so downstream crates can depend on `kompass-core` only

pub use kompass_types::{Capability, ConnectorKey, KompassError};

pub use kompass_types::{AssetKind, Instrument, Symbol};

pub use kompass_types::{
    CompanyProfile, EsgScores, FundamentalsRecord, FundamentalsSnapshot, PerformanceSummary,
};

pub use kompass_types::{
    GrowthSignal, Rating, RatingBands, Recommendation, RecommendationTable, ScoreResult, StarRating,
};

pub use kompass_types::{
    EsgLightConfig, FetchStrategy, GrowthAdviceConfig, GrowthScanConfig, KompassConfig, SectorRule,
    StepDown, StepUp,
};

pub use kompass_types::{EsgLightReport, EsgLightRow, GrowthRow, GrowthScanReport, SnapshotReport};
