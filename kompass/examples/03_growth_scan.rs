mod common;
use kompass::Kompass;
use kompass_core::{GrowthScanConfig, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let connector = common::get_connector();
    let kompass = Kompass::builder().with_connector(connector).build()?;

    let universe = [
        Instrument::equity("AAPL")?,
        Instrument::equity("MSFT")?,
        Instrument::equity("NEE")?,
        Instrument::equity("XOM")?,
    ];

    let report = kompass
        .screen()
        .instruments(&universe)?
        .growth_scan(&GrowthScanConfig::default())
        .await?;

    println!(
        "{:<8} {:<6} {:>8} {:>8}  {}",
        "Ticker", "Stars", "Fair P/E", "Upside", "Recommendation"
    );
    for row in &report.rows {
        let upside = row
            .signal
            .upside
            .map_or_else(|| "n/a".to_string(), |u| format!("{:.1}%", u * 100.0));
        println!(
            "{:<8} {:<6} {:>8.1} {:>8}  {}",
            row.instrument.symbol_str(),
            row.signal.stars,
            row.signal.fair_pe,
            upside,
            row.signal.recommendation
        );
    }

    Ok(())
}
