use async_trait::async_trait;
use kompass_core::connector::{
    EsgProvider, FundamentalsProvider, KompassConnector, PerformanceProvider, ProfileProvider,
};
use kompass_core::{
    AssetKind, CompanyProfile, EsgScores, FundamentalsSnapshot, Instrument, KompassError,
    PerformanceSummary,
};

mod fixtures;

/// Mock connector for CI-safe examples. Provides deterministic data from static fixtures.
///
/// Two sentinel symbols tailor failure behavior for orchestrator tests:
/// `FAIL` always returns a connector error, `TIMEOUT` sleeps briefly before
/// resolving so that callers with tight provider timeouts give up first.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Create the connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> KompassError {
        KompassError::not_found(what.to_string())
    }

    async fn maybe_fail_or_timeout(symbol: &str, capability: &'static str) -> Result<(), KompassError> {
        match symbol {
            "FAIL" => Err(KompassError::connector(
                "kompass-mock",
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Keep short to avoid slowing tests excessively
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl KompassConnector for MockConnector {
    fn name(&self) -> &'static str {
        "kompass-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn supports_kind(&self, _kind: AssetKind) -> bool {
        true
    }

    fn as_fundamentals_provider(&self) -> Option<&dyn FundamentalsProvider> {
        Some(self as &dyn FundamentalsProvider)
    }
    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        Some(self as &dyn ProfileProvider)
    }
    fn as_esg_provider(&self) -> Option<&dyn EsgProvider> {
        Some(self as &dyn EsgProvider)
    }
    fn as_performance_provider(&self) -> Option<&dyn PerformanceProvider> {
        Some(self as &dyn PerformanceProvider)
    }
}

#[async_trait]
impl FundamentalsProvider for MockConnector {
    async fn fundamentals(
        &self,
        instrument: &Instrument,
    ) -> Result<FundamentalsSnapshot, KompassError> {
        let s = instrument.symbol_str();
        Self::maybe_fail_or_timeout(s, "fundamentals").await?;
        fixtures::fundamentals::by_symbol(s)
            .ok_or_else(|| Self::not_found(&format!("fundamentals for {s}")))
    }
}

#[async_trait]
impl ProfileProvider for MockConnector {
    async fn profile(&self, instrument: &Instrument) -> Result<CompanyProfile, KompassError> {
        let s = instrument.symbol_str();
        Self::maybe_fail_or_timeout(s, "profile").await?;
        fixtures::profile::by_symbol(s).ok_or_else(|| Self::not_found(&format!("profile for {s}")))
    }
}

#[async_trait]
impl EsgProvider for MockConnector {
    async fn sustainability(&self, instrument: &Instrument) -> Result<EsgScores, KompassError> {
        let s = instrument.symbol_str();
        Self::maybe_fail_or_timeout(s, "esg").await?;
        fixtures::esg::by_symbol(s)
            .ok_or_else(|| Self::not_found(&format!("sustainability for {s}")))
    }
}

#[async_trait]
impl PerformanceProvider for MockConnector {
    async fn performance(
        &self,
        instrument: &Instrument,
    ) -> Result<PerformanceSummary, KompassError> {
        let s = instrument.symbol_str();
        Self::maybe_fail_or_timeout(s, "performance").await?;
        fixtures::performance::by_symbol(s)
            .ok_or_else(|| Self::not_found(&format!("performance for {s}")))
    }
}
