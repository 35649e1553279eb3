use std::time::Duration;

use crate::helpers::{MockConnector, instrument};
use kompass::Kompass;
use kompass_core::{
    AssetKind, EsgLightConfig, FundamentalsSnapshot, GrowthScanConfig, KompassError,
};

fn by_symbol_provider() -> std::sync::Arc<dyn kompass_core::KompassConnector> {
    MockConnector::builder()
        .name("by_symbol")
        .fundamentals_with(|inst| match inst.symbol_str() {
            // 25 + 25 + 20 = 70 -> B
            "GOOD" => Ok(FundamentalsSnapshot {
                pe: Some(10.0),
                dividend_yield: Some(0.03),
                beta: Some(0.5),
                ..FundamentalsSnapshot::default()
            }),
            // 15 -> D
            "SOSO" => Ok(FundamentalsSnapshot {
                pe: Some(30.0),
                ..FundamentalsSnapshot::default()
            }),
            s => Err(KompassError::not_found(format!("fundamentals for {s}"))),
        })
        .build()
}

#[tokio::test]
async fn screen_scores_and_sorts_rows() {
    let kompass = Kompass::builder()
        .with_connector(by_symbol_provider())
        .build()
        .unwrap();

    let report = kompass
        .screen()
        .instruments(&[
            instrument("SOSO", AssetKind::Equity),
            instrument("GOOD", AssetKind::Equity),
        ])
        .unwrap()
        .esg_light(&EsgLightConfig::default())
        .await
        .unwrap();

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].instrument.symbol_str(), "GOOD");
    assert_eq!(report.rows[0].result.score, 70);
    assert_eq!(report.rows[1].result.score, 15);
}

#[tokio::test]
async fn screen_reports_unresolvable_symbols_as_warnings() {
    let kompass = Kompass::builder()
        .with_connector(by_symbol_provider())
        .build()
        .unwrap();

    let report = kompass
        .screen()
        .instruments(&[
            instrument("GOOD", AssetKind::Equity),
            instrument("GONE", AssetKind::Equity),
        ])
        .unwrap()
        .esg_light(&EsgLightConfig::default())
        .await
        .unwrap();

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.warnings.len(), 1);
    match &report.warnings[0] {
        KompassError::NotFound { what } => assert_eq!(what, "snapshot for GONE"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn screen_rejects_duplicates_and_empty_lists() {
    let kompass = Kompass::builder()
        .with_connector(by_symbol_provider())
        .build()
        .unwrap();

    let err = kompass
        .screen()
        .instruments(&[
            instrument("GOOD", AssetKind::Equity),
            instrument("GOOD", AssetKind::Equity),
        ])
        .unwrap_err();
    assert!(matches!(err, KompassError::InvalidArg(_)));

    let err = kompass
        .screen()
        .esg_light(&EsgLightConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, KompassError::InvalidArg(_)));
}

#[tokio::test]
async fn add_instrument_rejects_existing_symbol() {
    let kompass = Kompass::builder()
        .with_connector(by_symbol_provider())
        .build()
        .unwrap();

    let builder = kompass
        .screen()
        .add_instrument(instrument("GOOD", AssetKind::Equity))
        .unwrap();
    let err = builder
        .add_instrument(instrument("GOOD", AssetKind::Equity))
        .unwrap_err();
    assert!(matches!(err, KompassError::InvalidArg(_)));
}

#[tokio::test]
async fn screen_honors_the_request_deadline() {
    let sleepy = MockConnector::builder()
        .name("sleepy")
        .delay_ms(250)
        .returns_fundamentals_ok(FundamentalsSnapshot::default())
        .build();

    let kompass = Kompass::builder()
        .with_connector(sleepy)
        .request_timeout(Duration::from_millis(20))
        .build()
        .unwrap();

    let err = kompass
        .screen()
        .instruments(&[instrument("SLOW", AssetKind::Equity)])
        .unwrap()
        .growth_scan(&GrowthScanConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, KompassError::RequestTimeout { .. }));
}
