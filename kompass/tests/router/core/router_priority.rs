use crate::helpers::{MockConnector, instrument};
use kompass::Kompass;
use kompass_core::{AssetKind, FundamentalsSnapshot};

fn snap(pe: f64) -> FundamentalsSnapshot {
    FundamentalsSnapshot {
        pe: Some(pe),
        ..FundamentalsSnapshot::default()
    }
}

#[tokio::test]
async fn registration_order_wins_without_preferences() {
    let first = MockConnector::builder()
        .name("first")
        .returns_fundamentals_ok(snap(1.0))
        .build();
    let second = MockConnector::builder()
        .name("second")
        .returns_fundamentals_ok(snap(2.0))
        .build();

    let kompass = Kompass::builder()
        .with_connector(first)
        .with_connector(second)
        .build()
        .unwrap();

    let got = kompass
        .fundamentals(&instrument("AAPL", AssetKind::Equity))
        .await
        .unwrap();
    assert_eq!(got.pe, Some(1.0));
}

#[tokio::test]
async fn kind_preference_reorders_providers() {
    let first = MockConnector::builder()
        .name("first")
        .returns_fundamentals_ok(snap(1.0))
        .build();
    let second = MockConnector::builder()
        .name("second")
        .returns_fundamentals_ok(snap(2.0))
        .build();

    let kompass = Kompass::builder()
        .with_connector(first.clone())
        .with_connector(second.clone())
        .prefer_for_kind(AssetKind::Equity, &[second, first])
        .build()
        .unwrap();

    let got = kompass
        .fundamentals(&instrument("AAPL", AssetKind::Equity))
        .await
        .unwrap();
    assert_eq!(got.pe, Some(2.0));
}

#[tokio::test]
async fn symbol_preference_overrides_kind_preference() {
    let first = MockConnector::builder()
        .name("first")
        .returns_fundamentals_ok(snap(1.0))
        .build();
    let second = MockConnector::builder()
        .name("second")
        .returns_fundamentals_ok(snap(2.0))
        .build();

    let kompass = Kompass::builder()
        .with_connector(first.clone())
        .with_connector(second.clone())
        .prefer_for_kind(AssetKind::Equity, &[second.clone(), first.clone()])
        .prefer_symbol("AAPL", &[first, second])
        .build()
        .unwrap();

    let got = kompass
        .fundamentals(&instrument("AAPL", AssetKind::Equity))
        .await
        .unwrap();
    assert_eq!(got.pe, Some(1.0));

    let got = kompass
        .fundamentals(&instrument("MSFT", AssetKind::Equity))
        .await
        .unwrap();
    assert_eq!(got.pe, Some(2.0));
}

#[tokio::test]
async fn kind_filter_excludes_providers() {
    let etf_only = MockConnector::builder()
        .name("etf_only")
        .supports_only(AssetKind::Etf)
        .returns_fundamentals_ok(snap(1.0))
        .build();
    let any = MockConnector::builder()
        .name("any")
        .returns_fundamentals_ok(snap(2.0))
        .build();

    let kompass = Kompass::builder()
        .with_connector(etf_only)
        .with_connector(any)
        .build()
        .unwrap();

    let got = kompass
        .fundamentals(&instrument("AAPL", AssetKind::Equity))
        .await
        .unwrap();
    assert_eq!(got.pe, Some(2.0));
}
