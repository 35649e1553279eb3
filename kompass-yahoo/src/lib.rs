//! kompass-yahoo
//!
//! Public connector that implements `KompassConnector` on top of a
//! Yahoo-style quoteSummary/chart JSON API. Exposes fundamentals, company
//! profiles, ESG scores, and trailing price performance.
//!
//! Provider payloads are duck-typed (`{ raw, fmt }` wrappers, optional
//! modules); everything is converted to the normalized kompass DTOs at this
//! crate's boundary and never leaks further.
#![warn(missing_docs)]

mod adapter;
/// Connector construction and deployment configuration.
pub mod builder;
mod client;
mod wire;

use async_trait::async_trait;
use kompass_core::connector::{
    ConnectorKey, EsgProvider, FundamentalsProvider, KompassConnector, PerformanceProvider,
    ProfileProvider,
};
use kompass_core::{
    AssetKind, CompanyProfile, EsgScores, FundamentalsSnapshot, Instrument, KompassError,
    PerformanceSummary,
};

pub use builder::YahooConnectorBuilder;
use client::YahooClient;

/// Public connector type. Production users construct it with
/// [`YahooConnector::new_default`] or via [`YahooConnector::builder`].
pub struct YahooConnector {
    client: YahooClient,
}

impl YahooConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new(client::CONNECTOR_NAME);

    /// Build a connector against the public endpoint with default settings.
    ///
    /// # Panics
    /// Never panics in practice: the defaults are statically known to be
    /// valid builder inputs.
    #[must_use]
    pub fn new_default() -> Self {
        YahooConnectorBuilder::new()
            .build()
            .expect("default configuration is valid")
    }

    /// Start building a connector with custom configuration.
    #[must_use]
    pub fn builder() -> YahooConnectorBuilder {
        YahooConnectorBuilder::new()
    }

    pub(crate) const fn from_client(client: YahooClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FundamentalsProvider for YahooConnector {
    async fn fundamentals(
        &self,
        instrument: &Instrument,
    ) -> Result<FundamentalsSnapshot, KompassError> {
        let s = instrument.symbol_str();
        let result = self
            .client
            .quote_summary(s, &format!("fundamentals for {s}"))
            .await?;
        Ok(adapter::map_fundamentals(&result))
    }
}

#[async_trait]
impl ProfileProvider for YahooConnector {
    async fn profile(&self, instrument: &Instrument) -> Result<CompanyProfile, KompassError> {
        let s = instrument.symbol_str();
        let result = self
            .client
            .quote_summary(s, &format!("profile for {s}"))
            .await?;
        Ok(adapter::map_profile(&result))
    }
}

#[async_trait]
impl EsgProvider for YahooConnector {
    async fn sustainability(&self, instrument: &Instrument) -> Result<EsgScores, KompassError> {
        let s = instrument.symbol_str();
        let what = format!("sustainability for {s}");
        let result = self.client.quote_summary(s, &what).await?;
        adapter::map_esg(&result).ok_or_else(|| KompassError::not_found(what))
    }
}

#[async_trait]
impl PerformanceProvider for YahooConnector {
    async fn performance(
        &self,
        instrument: &Instrument,
    ) -> Result<PerformanceSummary, KompassError> {
        let s = instrument.symbol_str();
        let what = format!("performance for {s}");
        let result = self.client.chart(s, "5y", &what).await?;
        let series = adapter::close_series(&result);
        if series.is_empty() {
            return Err(KompassError::not_found(what));
        }
        Ok(adapter::performance_from_series(&series))
    }
}

#[async_trait]
impl KompassConnector for YahooConnector {
    fn name(&self) -> &'static str {
        client::CONNECTOR_NAME
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn supports_kind(&self, kind: AssetKind) -> bool {
        matches!(
            kind,
            AssetKind::Equity | AssetKind::Etf | AssetKind::Index | AssetKind::Fund
        )
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
