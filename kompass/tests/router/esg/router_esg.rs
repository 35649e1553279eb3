use crate::helpers::{MockConnector, instrument};
use kompass::Kompass;
use kompass_core::{AssetKind, EsgScores, KompassError};

#[tokio::test]
async fn esg_succeeds() {
    let ok = MockConnector::builder()
        .name("ok_esg")
        .returns_esg_ok(EsgScores {
            total: Some(24.1),
            environmental: Some(10.0),
            social: Some(10.0),
            governance: Some(5.0),
        })
        .build();
    let kompass = Kompass::builder().with_connector(ok).build().unwrap();

    let inst = instrument("MSFT", AssetKind::Equity);
    let scores = kompass.sustainability(&inst).await.unwrap();
    assert_eq!(scores.total, Some(24.1));
    assert_eq!(scores.environmental, Some(10.0));
}

#[tokio::test]
async fn esg_not_found_propagates() {
    let missing = MockConnector::builder()
        .name("missing_esg")
        .esg_err(KompassError::not_found("sustainability for BRK-B"))
        .build();
    let kompass = Kompass::builder().with_connector(missing).build().unwrap();

    let inst = instrument("BRK-B", AssetKind::Equity);
    let err = kompass.sustainability(&inst).await.unwrap_err();
    assert!(matches!(err, KompassError::NotFound { .. }));
}
