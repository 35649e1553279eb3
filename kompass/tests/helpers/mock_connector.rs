use std::sync::Arc;

use async_trait::async_trait;
use kompass_core::connector::{
    EsgProvider, FundamentalsProvider, KompassConnector, PerformanceProvider, ProfileProvider,
};
use kompass_core::{
    AssetKind, CompanyProfile, EsgScores, FundamentalsSnapshot, Instrument, KompassError,
    PerformanceSummary,
};
use tokio::time::{Duration, sleep};

type FundamentalsFn =
    Arc<dyn Fn(&Instrument) -> Result<FundamentalsSnapshot, KompassError> + Send + Sync>;
type ProfileFn = Arc<dyn Fn(&Instrument) -> Result<CompanyProfile, KompassError> + Send + Sync>;
type EsgFn = Arc<dyn Fn(&Instrument) -> Result<EsgScores, KompassError> + Send + Sync>;
type PerformanceFn =
    Arc<dyn Fn(&Instrument) -> Result<PerformanceSummary, KompassError> + Send + Sync>;

/// Simple in-memory connector used by integration tests.
/// Capabilities are advertised only for the closures a test installs.
pub struct MockConnector {
    pub name: &'static str,
    pub kind_ok: Option<AssetKind>,
    pub delay_ms: u64,
    pub fundamentals_fn: Option<FundamentalsFn>,
    pub profile_fn: Option<ProfileFn>,
    pub esg_fn: Option<EsgFn>,
    pub performance_fn: Option<PerformanceFn>,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self {
            name: "default_mock",
            kind_ok: None,
            delay_ms: 0,
            fundamentals_fn: None,
            profile_fn: None,
            esg_fn: None,
            performance_fn: None,
        }
    }
}

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder {
            inner: Self::default(),
        }
    }

    async fn delay(&self) {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }
}

pub struct MockConnectorBuilder {
    inner: MockConnector,
}

impl MockConnectorBuilder {
    pub fn name(mut self, name: &'static str) -> Self {
        self.inner.name = name;
        self
    }

    pub fn supports_only(mut self, kind: AssetKind) -> Self {
        self.inner.kind_ok = Some(kind);
        self
    }

    pub fn delay_ms(mut self, ms: u64) -> Self {
        self.inner.delay_ms = ms;
        self
    }

    pub fn fundamentals_with(
        mut self,
        f: impl Fn(&Instrument) -> Result<FundamentalsSnapshot, KompassError> + Send + Sync + 'static,
    ) -> Self {
        self.inner.fundamentals_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_fundamentals_ok(self, snap: FundamentalsSnapshot) -> Self {
        self.fundamentals_with(move |_| Ok(snap.clone()))
    }

    pub fn fundamentals_err(self, err: KompassError) -> Self {
        self.fundamentals_with(move |_| Err(err.clone()))
    }

    pub fn profile_with(
        mut self,
        f: impl Fn(&Instrument) -> Result<CompanyProfile, KompassError> + Send + Sync + 'static,
    ) -> Self {
        self.inner.profile_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_profile_ok(self, profile: CompanyProfile) -> Self {
        self.profile_with(move |_| Ok(profile.clone()))
    }

    pub fn esg_with(
        mut self,
        f: impl Fn(&Instrument) -> Result<EsgScores, KompassError> + Send + Sync + 'static,
    ) -> Self {
        self.inner.esg_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_esg_ok(self, esg: EsgScores) -> Self {
        self.esg_with(move |_| Ok(esg))
    }

    pub fn esg_err(self, err: KompassError) -> Self {
        self.esg_with(move |_| Err(err.clone()))
    }

    pub fn performance_with(
        mut self,
        f: impl Fn(&Instrument) -> Result<PerformanceSummary, KompassError> + Send + Sync + 'static,
    ) -> Self {
        self.inner.performance_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_performance_ok(self, perf: PerformanceSummary) -> Self {
        self.performance_with(move |_| Ok(perf))
    }

    pub fn build(self) -> Arc<dyn KompassConnector> {
        Arc::new(self.inner)
    }
}

#[async_trait]
impl KompassConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn supports_kind(&self, kind: AssetKind) -> bool {
        self.kind_ok.is_none_or(|k| k == kind)
    }

    fn as_fundamentals_provider(&self) -> Option<&dyn FundamentalsProvider> {
        self.fundamentals_fn
            .as_ref()
            .map(|_| self as &dyn FundamentalsProvider)
    }
    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        self.profile_fn
            .as_ref()
            .map(|_| self as &dyn ProfileProvider)
    }
    fn as_esg_provider(&self) -> Option<&dyn EsgProvider> {
        self.esg_fn.as_ref().map(|_| self as &dyn EsgProvider)
    }
    fn as_performance_provider(&self) -> Option<&dyn PerformanceProvider> {
        self.performance_fn
            .as_ref()
            .map(|_| self as &dyn PerformanceProvider)
    }
}

#[async_trait]
impl FundamentalsProvider for MockConnector {
    async fn fundamentals(
        &self,
        instrument: &Instrument,
    ) -> Result<FundamentalsSnapshot, KompassError> {
        self.delay().await;
        match &self.fundamentals_fn {
            Some(f) => f(instrument),
            None => Err(KompassError::unsupported("fundamentals")),
        }
    }
}

#[async_trait]
impl ProfileProvider for MockConnector {
    async fn profile(&self, instrument: &Instrument) -> Result<CompanyProfile, KompassError> {
        self.delay().await;
        match &self.profile_fn {
            Some(f) => f(instrument),
            None => Err(KompassError::unsupported("profile")),
        }
    }
}

#[async_trait]
impl EsgProvider for MockConnector {
    async fn sustainability(&self, instrument: &Instrument) -> Result<EsgScores, KompassError> {
        self.delay().await;
        match &self.esg_fn {
            Some(f) => f(instrument),
            None => Err(KompassError::unsupported("esg")),
        }
    }
}

#[async_trait]
impl PerformanceProvider for MockConnector {
    async fn performance(
        &self,
        instrument: &Instrument,
    ) -> Result<PerformanceSummary, KompassError> {
        self.delay().await;
        match &self.performance_fn {
            Some(f) => f(instrument),
            None => Err(KompassError::unsupported("performance")),
        }
    }
}
