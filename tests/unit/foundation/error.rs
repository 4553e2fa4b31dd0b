use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WireframeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        WireframeError::layout("x")
            .to_string()
            .contains("layout error:")
    );
    assert!(
        WireframeError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        WireframeError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WireframeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn anyhow_context_converts_through_other() {
    use anyhow::Context as _;

    let res: anyhow::Result<()> = Err(std::io::Error::other("disk full")).context("write png");
    let err = WireframeError::from(res.unwrap_err());
    assert!(matches!(err, WireframeError::Other(_)));
    assert_eq!(err.to_string(), "write png");
}
