use async_trait::async_trait;

use crate::KompassError;
pub use kompass_types::ConnectorKey;
use kompass_types::{
    AssetKind, CompanyProfile, EsgScores, FundamentalsSnapshot, Instrument, PerformanceSummary,
};

/// Focused role trait for connectors that provide fundamentals snapshots.
#[async_trait]
pub trait FundamentalsProvider: Send + Sync {
    /// Fetch valuation, profitability, and balance-sheet figures for the
    /// given instrument.
    async fn fundamentals(
        &self,
        instrument: &Instrument,
    ) -> Result<FundamentalsSnapshot, KompassError>;
}

/// Focused role trait for connectors that provide company profile data.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Fetch a profile for the given instrument.
    async fn profile(&self, instrument: &Instrument) -> Result<CompanyProfile, KompassError>;
}

/// Focused role trait for connectors that provide ESG scores.
#[async_trait]
pub trait EsgProvider: Send + Sync {
    /// Fetch ESG scores for the given instrument.
    async fn sustainability(&self, instrument: &Instrument) -> Result<EsgScores, KompassError>;
}

/// Focused role trait for connectors that provide trailing price performance.
#[async_trait]
pub trait PerformanceProvider: Send + Sync {
    /// Fetch trailing performance windows for the given instrument.
    async fn performance(&self, instrument: &Instrument)
    -> Result<PerformanceSummary, KompassError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
#[async_trait]
pub trait KompassConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g., "kompass-yahoo", "kompass-mock").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    ///
    /// Use this helper when configuring priorities.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Whether this connector *claims* to support a given asset kind.
    ///
    /// Default: returns `false` for all kinds. Connectors must explicitly
    /// override this method to declare which asset kinds they support.
    fn supports_kind(&self, kind: AssetKind) -> bool {
        let _ = kind;
        false
    }

    /// Advertise fundamentals capability by returning a usable trait object
    /// reference when supported.
    fn as_fundamentals_provider(&self) -> Option<&dyn FundamentalsProvider> {
        None
    }

    /// If implemented, returns a trait object for company profiles.
    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        None
    }

    /// If implemented, returns a trait object for ESG scores.
    fn as_esg_provider(&self) -> Option<&dyn EsgProvider> {
        None
    }

    /// If implemented, returns a trait object for price performance.
    fn as_performance_provider(&self) -> Option<&dyn PerformanceProvider> {
        None
    }
}
