use std::collections::HashMap;
use std::sync::Arc;

use kompass_core::connector::ConnectorKey;
use kompass_core::types::{FetchStrategy, KompassConfig};
use kompass_core::{AssetKind, Capability, Instrument, KompassConnector, KompassError};

/// Orchestrator that routes requests across registered providers.
pub struct Kompass {
    pub(crate) connectors: Vec<Arc<dyn KompassConnector>>,
    pub(crate) cfg: KompassConfig,
}

impl std::fmt::Debug for Kompass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kompass")
            .field(
                "connectors",
                &self.connectors.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing a `Kompass` orchestrator with custom configuration.
pub struct KompassBuilder {
    connectors: Vec<Arc<dyn KompassConnector>>,
    cfg: KompassConfig,
}

impl Default for KompassBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl KompassBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no connectors; you must register at least one via
    ///   [`with_connector`](Self::with_connector).
    /// - Defaults are conservative: priority-with-fallback fetches, a 5s
    ///   per-provider timeout, and no overall request deadline.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: KompassConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Behavior and trade-offs:
    /// - The order in which you register connectors is used only when no
    ///   explicit priorities are set via the `prefer_*` methods.
    /// - Multiple connectors can support the same capability; the
    ///   orchestrator routes based on priorities and the fetch strategy.
    /// - Duplicates are not deduplicated; avoid registering the same
    ///   connector twice.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn KompassConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set preferred providers for an `AssetKind` using connector instances.
    ///
    /// Behavior and trade-offs:
    /// - Influences ordering among eligible providers for the given kind; it
    ///   does not filter out non-listed connectors (they remain after the
    ///   listed ones).
    /// - Per-symbol preferences (see [`prefer_symbol`](Self::prefer_symbol))
    ///   take precedence over kind-level preferences when both are specified.
    #[must_use]
    pub fn prefer_for_kind(
        mut self,
        kind: AssetKind,
        connectors_desc: &[Arc<dyn KompassConnector>],
    ) -> Self {
        let keys: Vec<ConnectorKey> = connectors_desc
            .iter()
            .map(|c| ConnectorKey::new(c.name()))
            .collect();
        self.cfg.per_kind_priority.insert(kind, keys);
        self
    }

    /// Set preferred providers for a symbol using connector instances.
    ///
    /// Behavior and trade-offs:
    /// - Overrides any kind-level preference for the specified symbol.
    /// - The list is an ordering hint; unlisted but capable connectors are
    ///   still considered after the listed ones.
    #[must_use]
    pub fn prefer_symbol(
        mut self,
        symbol: &str,
        connectors_desc: &[Arc<dyn KompassConnector>],
    ) -> Self {
        let keys: Vec<ConnectorKey> = connectors_desc
            .iter()
            .map(|c| ConnectorKey::new(c.name()))
            .collect();
        self.cfg
            .per_symbol_priority
            .insert(symbol.to_string(), keys);
        self
    }

    /// Select the fetch strategy for multi-provider requests.
    ///
    /// Behavior and trade-offs:
    /// - `PriorityWithFallback`: deterministic order, applies per-provider
    ///   timeout, aggregates errors; may be slower but predictable and
    ///   economical on rate limits.
    /// - `Latency`: race all eligible providers and return the first
    ///   success; fastest typical latency but consumes more concurrent
    ///   requests and can add provider load.
    #[must_use]
    pub const fn fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.cfg.fetch_strategy = strategy;
        self
    }

    /// Set the per-provider request timeout.
    ///
    /// Applied in both fetch strategies to bound each provider call.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set an overall request timeout for fan-out aggregations (snapshot/screen).
    ///
    /// Behavior and trade-offs:
    /// - Bounds total latency even when many providers time out sequentially.
    /// - When exceeded, returns a `RequestTimeout` error for the capability.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Build the `Kompass` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via
    /// [`with_connector`](Self::with_connector).
    pub fn build(mut self) -> Result<Kompass, KompassError> {
        // Validate connector keys against registered connectors; drop unknowns and dedup.
        let known: std::collections::HashSet<&'static str> =
            self.connectors.iter().map(|c| c.name()).collect();

        let filter_keys = |v: &mut Vec<ConnectorKey>| {
            let mut out: Vec<ConnectorKey> = Vec::new();
            let mut seen: std::collections::HashSet<&'static str> =
                std::collections::HashSet::new();
            for k in v.iter().copied() {
                let n = k.as_str();
                if known.contains(n) && seen.insert(n) {
                    out.push(k);
                }
            }
            *v = out;
        };

        for v in self.cfg.per_kind_priority.values_mut() {
            filter_keys(v);
        }
        for v in self.cfg.per_symbol_priority.values_mut() {
            filter_keys(v);
        }

        if self.connectors.is_empty() {
            return Err(KompassError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }

        Ok(Kompass {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

pub(crate) fn tag_err(connector: &str, e: KompassError) -> KompassError {
    match e {
        e @ (KompassError::NotFound { .. }
        | KompassError::ProviderTimeout { .. }
        | KompassError::Connector { .. }
        | KompassError::RateLimited { .. }
        | KompassError::Transport { .. }
        | KompassError::RequestTimeout { .. }
        | KompassError::AllProvidersTimedOut { .. }
        | KompassError::AllProvidersFailed(_)) => e,
        other => KompassError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

/// Apply an optional request-level deadline around a future.
pub(crate) async fn with_request_deadline<F, T>(
    deadline: Option<std::time::Duration>,
    fut: F,
) -> Result<T, KompassError>
where
    F: core::future::Future<Output = T>,
{
    match deadline {
        Some(d) => (tokio::time::timeout(d, fut).await)
            .map_err(|_| KompassError::request_timeout("request")),
        None => Ok(fut.await),
    }
}

impl Kompass {
    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kompass::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = %capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: Capability,
        timeout: std::time::Duration,
        fut: Fut,
    ) -> Result<T, KompassError>
    where
        Fut: core::future::Future<Output = Result<T, KompassError>>,
    {
        (tokio::time::timeout(timeout, fut).await).unwrap_or_else(|_| {
            Err(KompassError::provider_timeout(
                connector_name,
                capability.to_string(),
            ))
        })
    }

    /// Start building a new `Kompass` instance.
    ///
    /// Typical usage chains provider registration and preferences, e.g.:
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let yahoo = Arc::new(kompass_yahoo::YahooConnector::new_default());
    /// let kompass = kompass::Kompass::builder()
    ///     .with_connector(yahoo)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> KompassBuilder {
        KompassBuilder::new()
    }

    pub(crate) fn ordered(&self, inst: &Instrument) -> Vec<Arc<dyn KompassConnector>> {
        let out: Vec<(usize, Arc<dyn KompassConnector>)> =
            self.connectors.iter().cloned().enumerate().collect();

        let order_with = |pref: &Vec<ConnectorKey>,
                          mut v: Vec<(usize, Arc<dyn KompassConnector>)>| {
            let pos: HashMap<_, _> = pref
                .iter()
                .enumerate()
                .map(|(i, n)| (n.as_str(), i))
                .collect();
            v.sort_by_key(|(orig_i, c)| {
                (pos.get(c.name()).copied().unwrap_or(usize::MAX), *orig_i)
            });
            v.into_iter().map(|(_, c)| c).collect()
        };

        if let Some(pref) = self.cfg.per_symbol_priority.get(inst.symbol_str()) {
            return order_with(pref, out);
        }
        if let Some(pref) = self.cfg.per_kind_priority.get(&inst.kind()) {
            return order_with(pref, out);
        }
        out.into_iter().map(|(_, c)| c).collect()
    }

    /// Generic single-item fetch helper shared by all router methods.
    ///
    /// - Honors `FetchStrategy::{PriorityWithFallback, Latency}`
    /// - Applies per-provider timeout in both modes
    /// - Aggregates errors and treats `NotFound` specially in fallback mode
    /// - In latency mode, returns the first success; if all attempted
    ///   providers fail, aggregates and returns `AllProvidersFailed`; if no
    ///   providers support the capability, returns a capability error
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "kompass::core::fetch_single",
            skip(self, call),
            fields(symbol = %inst.symbol(), capability = %capability, not_found = %not_found_label),
        )
    )]
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        inst: &Instrument,
        capability: Capability,
        not_found_label: &'static str,
        call: F,
    ) -> Result<T, KompassError>
    where
        T: Send,
        F: Fn(Arc<dyn KompassConnector>, Instrument) -> Option<Fut> + Clone + Send,
        Fut: core::future::Future<Output = Result<T, KompassError>> + Send,
    {
        match self.cfg.fetch_strategy {
            FetchStrategy::PriorityWithFallback => {
                self.fetch_single_priority_with_fallback(inst, capability, not_found_label, call)
                    .await
            }
            FetchStrategy::Latency => {
                self.fetch_single_latency(inst, capability, not_found_label, call)
                    .await
            }
            // Strategies added later default to the deterministic path.
            _ => {
                self.fetch_single_priority_with_fallback(inst, capability, not_found_label, call)
                    .await
            }
        }
    }

    async fn fetch_single_priority_with_fallback<T, F, Fut>(
        &self,
        inst: &Instrument,
        capability: Capability,
        not_found_label: &'static str,
        call: F,
    ) -> Result<T, KompassError>
    where
        T: Send,
        F: Fn(Arc<dyn KompassConnector>, Instrument) -> Option<Fut> + Clone + Send,
        Fut: core::future::Future<Output = Result<T, KompassError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<KompassError> = Vec::new();

        for c in self.ordered(inst) {
            if let Some(fut) = call(c.clone(), inst.clone()) {
                attempted_any = true;
                match Self::provider_call_with_timeout(
                    c.name(),
                    capability,
                    self.cfg.provider_timeout,
                    fut,
                )
                .await
                {
                    Ok(v) => return Ok(v),
                    Err(e @ (KompassError::NotFound { .. } | KompassError::ProviderTimeout { .. })) => {
                        errors.push(e);
                    }
                    Err(e) => {
                        errors.push(tag_err(c.name(), e));
                    }
                }
            }
        }

        Err(crate::router::util::collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(format!("{not_found_label} for {}", inst.symbol())),
        ))
    }

    async fn fetch_single_latency<T, F, Fut>(
        &self,
        inst: &Instrument,
        capability: Capability,
        not_found_label: &'static str,
        call: F,
    ) -> Result<T, KompassError>
    where
        T: Send,
        F: Fn(Arc<dyn KompassConnector>, Instrument) -> Option<Fut> + Clone + Send,
        Fut: core::future::Future<Output = Result<T, KompassError>> + Send,
    {
        use futures::stream::{FuturesUnordered, StreamExt};

        let mut futs = FuturesUnordered::new();
        let mut attempted_any = false;
        for c in self.ordered(inst) {
            if let Some(fut) = call(c.clone(), inst.clone()) {
                let name = c.name();
                let timeout = self.cfg.provider_timeout;
                futs.push(async move {
                    (
                        name,
                        Self::provider_call_with_timeout(name, capability, timeout, fut).await,
                    )
                });
                attempted_any = true;
            }
        }

        let mut errors: Vec<KompassError> = Vec::new();
        while let Some((name, res)) = futs.next().await {
            match res {
                Ok(v) => return Ok(v),
                Err(
                    e @ (KompassError::ProviderTimeout { .. } | KompassError::NotFound { .. }),
                ) => {
                    errors.push(e);
                }
                Err(e) => errors.push(tag_err(name, e)),
            }
        }

        Err(crate::router::util::collapse_errors(
            capability,
            attempted_any,
            errors,
            Some(format!("{not_found_label} for {}", inst.symbol())),
        ))
    }
}
