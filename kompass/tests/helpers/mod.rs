#![allow(dead_code)]

pub mod mock_connector;

pub use mock_connector::MockConnector;

use kompass_core::{AssetKind, Instrument};

pub fn instrument(symbol: &str, kind: AssetKind) -> Instrument {
    Instrument::from_symbol(symbol, kind).expect("valid test instrument")
}
