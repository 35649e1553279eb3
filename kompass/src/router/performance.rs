use crate::Kompass;
use crate::kompass_router_method;

impl Kompass {
    kompass_router_method! {
        /// Fetch trailing price performance windows for an instrument.
        method: performance(inst: &kompass_core::Instrument) -> kompass_core::PerformanceSummary,
        provider: PerformanceProvider,
        accessor: as_performance_provider,
        capability: kompass_core::Capability::Performance,
        not_found: "performance",
        call: performance(inst)
    }
}
