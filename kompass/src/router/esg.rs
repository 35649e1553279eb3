use crate::Kompass;
use crate::kompass_router_method;

impl Kompass {
    kompass_router_method! {
        /// Fetch ESG sustainability scores for an instrument.
        ///
        /// Notes: scoring methodologies vary by provider; values are surfaced
        /// as-is without cross-provider normalization.
        method: sustainability(inst: &kompass_core::Instrument) -> kompass_core::EsgScores,
        provider: EsgProvider,
        accessor: as_esg_provider,
        capability: kompass_core::Capability::Esg,
        not_found: "esg",
        call: sustainability(inst)
    }
}
