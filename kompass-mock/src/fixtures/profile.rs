use kompass_core::CompanyProfile;

pub fn by_symbol(s: &str) -> Option<CompanyProfile> {
    let (name, sector, industry) = match s {
        "AAPL" => ("Apple Inc.", "Technology", "Consumer Electronics"),
        "MSFT" => ("Microsoft Corporation", "Technology", "Software - Infrastructure"),
        "NEE" => ("NextEra Energy, Inc.", "Utilities", "Utilities - Regulated Electric"),
        "XOM" => ("Exxon Mobil Corporation", "Oil & Gas", "Oil & Gas Integrated"),
        _ => return None,
    };
    Some(CompanyProfile {
        name: Some(name.to_string()),
        sector: Some(sector.to_string()),
        industry: Some(industry.to_string()),
    })
}
