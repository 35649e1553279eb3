use std::time::Duration;

use crate::helpers::{MockConnector, instrument};
use kompass::Kompass;
use kompass_core::{AssetKind, FetchStrategy, FundamentalsSnapshot, KompassError};

fn snap(pe: f64) -> FundamentalsSnapshot {
    FundamentalsSnapshot {
        pe: Some(pe),
        ..FundamentalsSnapshot::default()
    }
}

#[tokio::test]
async fn fallback_skips_failing_provider() {
    let bad = MockConnector::builder()
        .name("bad")
        .fundamentals_err(KompassError::connector("bad", "boom"))
        .build();
    let good = MockConnector::builder()
        .name("good")
        .returns_fundamentals_ok(snap(7.0))
        .build();

    let kompass = Kompass::builder()
        .with_connector(bad)
        .with_connector(good)
        .build()
        .unwrap();

    let got = kompass
        .fundamentals(&instrument("AAPL", AssetKind::Equity))
        .await
        .unwrap();
    assert_eq!(got.pe, Some(7.0));
}

#[tokio::test]
async fn latency_races_past_a_slow_provider() {
    let slow = MockConnector::builder()
        .name("slow")
        .delay_ms(150)
        .returns_fundamentals_ok(snap(1.0))
        .build();
    let fast = MockConnector::builder()
        .name("fast")
        .returns_fundamentals_ok(snap(2.0))
        .build();

    let kompass = Kompass::builder()
        .with_connector(slow)
        .with_connector(fast)
        .fetch_strategy(FetchStrategy::Latency)
        .build()
        .unwrap();

    let got = kompass
        .fundamentals(&instrument("AAPL", AssetKind::Equity))
        .await
        .unwrap();
    assert_eq!(got.pe, Some(2.0));
}

#[tokio::test]
async fn all_timeouts_collapse() {
    let sleepy = MockConnector::builder()
        .name("sleepy")
        .delay_ms(200)
        .returns_fundamentals_ok(snap(1.0))
        .build();

    let kompass = Kompass::builder()
        .with_connector(sleepy)
        .provider_timeout(Duration::from_millis(10))
        .build()
        .unwrap();

    let err = kompass
        .fundamentals(&instrument("AAPL", AssetKind::Equity))
        .await
        .unwrap_err();
    assert!(matches!(err, KompassError::AllProvidersTimedOut { .. }));
}

#[tokio::test]
async fn all_not_found_collapses_to_not_found() {
    let a = MockConnector::builder()
        .name("a")
        .fundamentals_err(KompassError::not_found("fundamentals for GONE"))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .fundamentals_err(KompassError::not_found("fundamentals for GONE"))
        .build();

    let kompass = Kompass::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let err = kompass
        .fundamentals(&instrument("GONE", AssetKind::Equity))
        .await
        .unwrap_err();
    match err {
        KompassError::NotFound { what } => assert_eq!(what, "fundamentals for GONE"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn unsupported_capability_is_reported() {
    // Advertises ESG only; fundamentals goes unanswered.
    let esg_only = MockConnector::builder()
        .name("esg_only")
        .returns_esg_ok(kompass_core::EsgScores::default())
        .build();

    let kompass = Kompass::builder().with_connector(esg_only).build().unwrap();

    let err = kompass
        .fundamentals(&instrument("AAPL", AssetKind::Equity))
        .await
        .unwrap_err();
    assert!(matches!(err, KompassError::Unsupported { .. }));
}

#[tokio::test]
async fn mixed_failures_aggregate() {
    let bad = MockConnector::builder()
        .name("bad")
        .fundamentals_err(KompassError::connector("bad", "boom"))
        .build();
    let missing = MockConnector::builder()
        .name("missing")
        .fundamentals_err(KompassError::not_found("fundamentals for AAPL"))
        .build();

    let kompass = Kompass::builder()
        .with_connector(bad)
        .with_connector(missing)
        .build()
        .unwrap();

    let err = kompass
        .fundamentals(&instrument("AAPL", AssetKind::Equity))
        .await
        .unwrap_err();
    match err {
        KompassError::AllProvidersFailed(errors) => assert_eq!(errors.len(), 2),
        other => panic!("unexpected: {other:?}"),
    }
}
