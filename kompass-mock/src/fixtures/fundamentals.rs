use kompass_core::FundamentalsSnapshot;

pub fn by_symbol(s: &str) -> Option<FundamentalsSnapshot> {
    match s {
        "AAPL" => Some(FundamentalsSnapshot {
            price: Some(178.5),
            pe: Some(28.5),
            eps: Some(6.42),
            dividend_yield: Some(0.0055),
            beta: Some(1.25),
            market_cap: Some(2.8e12),
            revenue: Some(383.0e9),
            profit_margin: Some(0.25),
            roa: Some(0.21),
            roe: Some(1.45),
            total_debt: Some(110.0e9),
            total_assets: Some(352.0e9),
            earnings_quarterly_growth: Some(0.07),
            price_target: Some(200.0),
        }),
        "MSFT" => Some(FundamentalsSnapshot {
            price: Some(410.0),
            pe: Some(35.1),
            eps: Some(11.8),
            dividend_yield: Some(0.008),
            beta: Some(0.9),
            market_cap: Some(3.0e12),
            revenue: Some(236.0e9),
            profit_margin: Some(0.34),
            roa: Some(0.15),
            roe: Some(0.39),
            total_debt: Some(79.0e9),
            total_assets: Some(470.0e9),
            earnings_quarterly_growth: Some(0.12),
            price_target: Some(500.0),
        }),
        "NEE" => Some(FundamentalsSnapshot {
            price: Some(71.0),
            pe: Some(18.9),
            eps: Some(3.6),
            dividend_yield: Some(0.028),
            beta: Some(0.55),
            market_cap: Some(146.0e9),
            revenue: Some(28.0e9),
            profit_margin: Some(0.26),
            roa: Some(0.04),
            roe: Some(0.09),
            total_debt: Some(78.0e9),
            total_assets: Some(177.0e9),
            earnings_quarterly_growth: Some(0.05),
            price_target: Some(85.0),
        }),
        "XOM" => Some(FundamentalsSnapshot {
            price: Some(105.0),
            pe: Some(10.5),
            eps: Some(9.5),
            dividend_yield: Some(0.033),
            beta: Some(1.05),
            market_cap: Some(420.0e9),
            revenue: Some(335.0e9),
            profit_margin: Some(0.10),
            roa: Some(0.09),
            roe: Some(0.15),
            total_debt: Some(41.0e9),
            total_assets: Some(376.0e9),
            earnings_quarterly_growth: Some(-0.25),
            price_target: Some(123.0),
        }),
        _ => None,
    }
}
