mod common;
use kompass::Kompass;
use kompass_core::Instrument;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let connector = common::get_connector();
    let kompass = Kompass::builder().with_connector(connector).build()?;

    let inst = Instrument::equity("NEE")?;
    println!("Assembling fundamentals snapshot for {inst}...");

    let report = kompass.snapshot(&inst).await?;
    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }

    match report.record {
        Some(record) => {
            println!("P/E:            {:?}", record.pe);
            println!("Dividend yield: {:?}", record.dividend_yield);
            println!("Beta:           {:?}", record.beta);
            println!("Sector:         {:?}", record.sector);
            println!("ESG total:      {:?}", record.esg_total);
            println!("Perf 1Y:        {:?}", record.perf_1y);
            println!("Debt ratio:     {:?}", record.debt_ratio());
        }
        None => eprintln!("no data available for {inst}"),
    }

    Ok(())
}
