use kompass::Kompass;
use kompass_core::{AssetKind, EsgLightConfig, GrowthScanConfig, Rating, Recommendation};
use kompass_mock::MockConnector;
use std::sync::Arc;

use crate::helpers::instrument;

fn kompass_with_fixtures() -> Kompass {
    Kompass::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn esg_light_screen_over_fixture_universe() {
    let kompass = kompass_with_fixtures();

    let report = kompass
        .screen()
        .instruments(&[
            instrument("AAPL", AssetKind::Equity),
            instrument("MSFT", AssetKind::Equity),
            instrument("NEE", AssetKind::Equity),
            instrument("XOM", AssetKind::Equity),
        ])
        .unwrap()
        .esg_light(&EsgLightConfig::default())
        .await
        .unwrap();

    assert!(report.warnings.is_empty());
    let scores: Vec<(&str, u8)> = report
        .rows
        .iter()
        .map(|r| (r.instrument.symbol_str(), r.result.score))
        .collect();
    assert_eq!(
        scores,
        vec![("NEE", 95), ("XOM", 50), ("MSFT", 35), ("AAPL", 25)]
    );

    assert_eq!(report.rows[0].result.rating, Rating::A);
    assert_eq!(report.rows[0].result.recommendation, Recommendation::Buy);
    assert_eq!(report.rows[1].result.rating, Rating::C);
    assert_eq!(report.rows[3].result.recommendation, Recommendation::Review);
}

#[tokio::test]
async fn growth_scan_over_fixture_universe() {
    let kompass = kompass_with_fixtures();

    let report = kompass
        .screen()
        .instruments(&[
            instrument("AAPL", AssetKind::Equity),
            instrument("MSFT", AssetKind::Equity),
            instrument("NEE", AssetKind::Equity),
            instrument("XOM", AssetKind::Equity),
        ])
        .unwrap()
        .growth_scan(&GrowthScanConfig::default())
        .await
        .unwrap();

    let stars: Vec<(&str, u8)> = report
        .rows
        .iter()
        .map(|r| (r.instrument.symbol_str(), r.signal.stars.count()))
        .collect();
    // NEE earns fair-P/E, both performance windows, and the dividend star;
    // ties between AAPL and MSFT keep input order.
    assert_eq!(
        stars,
        vec![("NEE", 4), ("AAPL", 3), ("MSFT", 3), ("XOM", 1)]
    );

    let nee = &report.rows[0];
    assert_eq!(nee.signal.fair_pe, 20.0);
    assert_eq!(nee.signal.recommendation, Recommendation::Hold);

    let aapl = &report.rows[1];
    assert_eq!(aapl.signal.recommendation, Recommendation::Watch);
}

#[tokio::test]
async fn failing_symbol_does_not_abort_the_batch() {
    let kompass = kompass_with_fixtures();

    let report = kompass
        .screen()
        .instruments(&[
            instrument("NEE", AssetKind::Equity),
            instrument("FAIL", AssetKind::Equity),
        ])
        .unwrap()
        .esg_light(&EsgLightConfig::default())
        .await
        .unwrap();

    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].instrument.symbol_str(), "NEE");
    assert!(!report.warnings.is_empty());
}
