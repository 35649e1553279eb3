use crate::helpers::MockConnector;
use kompass::Kompass;
use kompass_core::KompassError;

#[test]
fn build_requires_at_least_one_connector() {
    let err = Kompass::builder().build().unwrap_err();
    assert!(matches!(err, KompassError::InvalidArg(_)));
}

#[test]
fn build_accepts_a_single_connector() {
    let ok = MockConnector::builder().name("solo").build();
    assert!(Kompass::builder().with_connector(ok).build().is_ok());
}
