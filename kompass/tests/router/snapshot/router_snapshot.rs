use crate::helpers::{MockConnector, instrument};
use kompass::Kompass;
use kompass_core::{
    AssetKind, CompanyProfile, EsgScores, FundamentalsSnapshot, KompassError, PerformanceSummary,
};

fn full_provider() -> std::sync::Arc<dyn kompass_core::KompassConnector> {
    MockConnector::builder()
        .name("full")
        .returns_fundamentals_ok(FundamentalsSnapshot {
            price: Some(71.0),
            pe: Some(18.9),
            dividend_yield: Some(0.028),
            beta: Some(0.55),
            ..FundamentalsSnapshot::default()
        })
        .returns_profile_ok(CompanyProfile {
            name: Some("NextEra Energy, Inc.".to_string()),
            sector: Some("Utilities".to_string()),
            industry: None,
        })
        .returns_esg_ok(EsgScores {
            total: Some(24.1),
            ..EsgScores::default()
        })
        .returns_performance_ok(PerformanceSummary {
            r6m: Some(0.10),
            r1y: Some(0.15),
            cagr_5y: Some(0.06),
        })
        .build()
}

#[tokio::test]
async fn snapshot_assembles_all_legs() {
    let kompass = Kompass::builder()
        .with_connector(full_provider())
        .build()
        .unwrap();

    let report = kompass
        .snapshot(&instrument("NEE", AssetKind::Equity))
        .await
        .unwrap();

    assert!(report.warnings.is_empty());
    let record = report.record.expect("assembled record");
    assert_eq!(record.pe, Some(18.9));
    assert_eq!(record.sector.as_deref(), Some("Utilities"));
    assert_eq!(record.esg_total, Some(24.1));
    assert_eq!(record.perf_1y, Some(0.15));
}

#[tokio::test]
async fn snapshot_survives_a_failing_leg() {
    let flaky = MockConnector::builder()
        .name("flaky")
        .returns_fundamentals_ok(FundamentalsSnapshot {
            pe: Some(12.0),
            ..FundamentalsSnapshot::default()
        })
        .esg_err(KompassError::connector("flaky", "esg backend down"))
        .build();

    let kompass = Kompass::builder().with_connector(flaky).build().unwrap();
    let report = kompass
        .snapshot(&instrument("AAPL", AssetKind::Equity))
        .await
        .unwrap();

    let record = report.record.expect("record without esg");
    assert_eq!(record.pe, Some(12.0));
    assert_eq!(record.esg_total, None);
    // The connector failure is actionable and surfaces as a warning.
    assert_eq!(report.warnings.len(), 1);
    assert!(matches!(
        report.warnings[0],
        KompassError::Connector { .. }
    ));
}

#[tokio::test]
async fn snapshot_swallows_benign_absences() {
    // Fundamentals only; the other capabilities are not advertised at all.
    let sparse = MockConnector::builder()
        .name("sparse")
        .returns_fundamentals_ok(FundamentalsSnapshot {
            pe: Some(9.0),
            ..FundamentalsSnapshot::default()
        })
        .build();

    let kompass = Kompass::builder().with_connector(sparse).build().unwrap();
    let report = kompass
        .snapshot(&instrument("AAPL", AssetKind::Equity))
        .await
        .unwrap();

    // Unsupported capabilities are benign, not warnings.
    assert!(report.warnings.is_empty());
    assert_eq!(report.record.expect("sparse record").pe, Some(9.0));
}

#[tokio::test]
async fn snapshot_reports_nothing_resolvable() {
    let dead = MockConnector::builder()
        .name("dead")
        .fundamentals_err(KompassError::not_found("fundamentals for ZZZQ"))
        .esg_err(KompassError::not_found("sustainability for ZZZQ"))
        .build();

    let kompass = Kompass::builder().with_connector(dead).build().unwrap();
    let report = kompass
        .snapshot(&instrument("ZZZQ", AssetKind::Equity))
        .await
        .unwrap();

    assert!(report.record.is_none());
    // Pure not-found outcomes are benign.
    assert!(report.warnings.is_empty());
}
