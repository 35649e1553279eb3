mod common;
use kompass::Kompass;
use kompass_core::{EsgLightConfig, Instrument};

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
        .esg_light(&EsgLightConfig::default())
        .await?;

    println!("{:<8} {:>5}  {:<6} {}", "Ticker", "Score", "Rating", "Recommendation");
    for row in &report.rows {
        println!(
            "{:<8} {:>5}  {:<6} {}",
            row.instrument.symbol_str(),
            row.result.score,
            row.result.rating,
            row.result.recommendation
        );
    }

    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }

    Ok(())
}
