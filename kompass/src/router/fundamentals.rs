use crate::Kompass;
use crate::kompass_router_method;

impl Kompass {
    kompass_router_method! {
        /// Fetch valuation, profitability, and balance-sheet fundamentals for
        /// an instrument.
        ///
        /// Notes: all fields are optional; providers differ in coverage and
        /// values are surfaced after unit normalization but without
        /// cross-provider reconciliation.
        method: fundamentals(inst: &kompass_core::Instrument) -> kompass_core::FundamentalsSnapshot,
        provider: FundamentalsProvider,
        accessor: as_fundamentals_provider,
        capability: kompass_core::Capability::Fundamentals,
        not_found: "fundamentals",
        call: fundamentals(inst)
    }
}
