use crate::helpers::{MockConnector, instrument};
use kompass::Kompass;
use kompass_core::{AssetKind, CompanyProfile};

#[tokio::test]
async fn profile_succeeds() {
    let ok = MockConnector::builder()
        .name("ok_profile")
        .returns_profile_ok(CompanyProfile {
            name: Some("NextEra Energy, Inc.".to_string()),
            sector: Some("Utilities".to_string()),
            industry: Some("Utilities - Regulated Electric".to_string()),
        })
        .build();
    let kompass = Kompass::builder().with_connector(ok).build().unwrap();

    let inst = instrument("NEE", AssetKind::Equity);
    let profile = kompass.profile(&inst).await.unwrap();
    assert_eq!(profile.sector.as_deref(), Some("Utilities"));
}
