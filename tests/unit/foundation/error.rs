use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WeblayerError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        WeblayerError::surface("x")
            .to_string()
            .contains("surface error:")
    );
    assert!(
        WeblayerError::composite("x")
            .to_string()
            .contains("composite error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WeblayerError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
