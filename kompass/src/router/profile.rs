use crate::Kompass;
use crate::kompass_router_method;

impl Kompass {
    kompass_router_method! {
        /// Fetch the company profile (name, sector, industry) for an instrument.
        method: profile(inst: &kompass_core::Instrument) -> kompass_core::CompanyProfile,
        provider: ProfileProvider,
        accessor: as_profile_provider,
        capability: kompass_core::Capability::Profile,
        not_found: "profile",
        call: profile(inst)
    }
}
