/// Generate a router async method that selects providers, applies kind filters,
/// and calls a single-provider method. Handles not-found fallbacks via the
/// orchestrator.
///
/// Notes on `not_found` label:
/// - Pass a noun only (e.g., "fundamentals", "esg").
/// - The orchestrator formats the final error as "{label} for {SYMBOL}".
/// - Do not include the word "for" in the label.
#[macro_export]
macro_rules! kompass_router_method {
    (
        $(#[$meta:meta])*
        method: $name:ident( $inst_ident:ident : $inst_ty:ty ) -> $ret:ty,
        provider: $provider:ident,
        accessor: $accessor:ident,
        capability: $capability:expr,
        not_found: $not_found:expr,
        call: $call_name:ident( $call_first:ident )
    ) => {
        $(#[$meta])*
        #[cfg_attr(
            feature = "tracing",
            tracing::instrument(
                target = "kompass::router",
                skip(self),
                fields(symbol = %$inst_ident.symbol()),
            )
        )]
        ///
        /// # Errors
        /// Returns an error if no eligible provider succeeds or none support the capability.
        pub async fn $name(
            &self,
            $inst_ident: $inst_ty,
        ) -> Result<$ret, kompass_core::KompassError> {
            self.fetch_single(
                $inst_ident,
                $capability,
                $not_found,
                move |c, i| {
                    if !c.supports_kind(i.kind()) {
                        return None;
                    }
                    let c2 = c.clone();
                    if c2.$accessor().is_some() {
                        Some({
                            let i2 = i.clone();
                            async move {
                                if let Some(p) = c2.$accessor() {
                                    p.$call_name(&i2).await
                                } else {
                                    Err(kompass_core::KompassError::connector(
                                        c2.name(),
                                        format!("missing {} capability during call", $capability),
                                    ))
                                }
                            }
                        })
                    } else {
                        None
                    }
                },
            )
            .await
        }
    };
}
