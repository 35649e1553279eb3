use kompass_core::EsgScores;

pub fn by_symbol(s: &str) -> Option<EsgScores> {
    let (total, environmental, social, governance) = match s {
        "AAPL" => (17.2, 0.6, 7.2, 9.4),
        "MSFT" => (14.6, 2.0, 6.1, 6.5),
        "NEE" => (24.1, 11.0, 6.4, 6.7),
        "XOM" => (41.5, 20.4, 12.6, 8.5),
        _ => return None,
    };
    Some(EsgScores {
        total: Some(total),
        environmental: Some(environmental),
        social: Some(social),
        governance: Some(governance),
    })
}
