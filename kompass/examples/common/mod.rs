use kompass_core::KompassConnector;
use std::sync::Arc;

#[must_use]
pub fn get_connector() -> Arc<dyn KompassConnector> {
    if std::env::var("KOMPASS_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        Arc::new(kompass_mock::MockConnector::new())
    } else {
        Arc::new(kompass_yahoo::YahooConnector::new_default())
    }
}
