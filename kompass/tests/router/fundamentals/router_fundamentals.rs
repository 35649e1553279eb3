use crate::helpers::{MockConnector, instrument};
use kompass::Kompass;
use kompass_core::{AssetKind, FundamentalsSnapshot};

#[tokio::test]
async fn fundamentals_succeeds() {
    let ok = MockConnector::builder()
        .name("ok_fundamentals")
        .returns_fundamentals_ok(FundamentalsSnapshot {
            price: Some(71.0),
            pe: Some(18.9),
            dividend_yield: Some(0.028),
            beta: Some(0.55),
            ..FundamentalsSnapshot::default()
        })
        .build();
    let kompass = Kompass::builder().with_connector(ok).build().unwrap();

    let inst = instrument("NEE", AssetKind::Equity);
    let snap = kompass.fundamentals(&inst).await.unwrap();
    assert_eq!(snap.pe, Some(18.9));
    assert_eq!(snap.dividend_yield, Some(0.028));
}

#[tokio::test]
async fn fundamentals_sees_requested_symbol() {
    let echo = MockConnector::builder()
        .name("echo")
        .fundamentals_with(|inst| {
            assert_eq!(inst.symbol_str(), "XOM");
            Ok(FundamentalsSnapshot::default())
        })
        .build();
    let kompass = Kompass::builder().with_connector(echo).build().unwrap();

    kompass
        .fundamentals(&instrument("XOM", AssetKind::Equity))
        .await
        .unwrap();
}
