use super::*;

#[test]
fn missing_block_uses_defaults() {
    assert_eq!(parse(None), ExportConfig::default());
    assert_eq!(parse(Some("  \n ")), ExportConfig::default());
}

#[test]
fn overrides_are_applied_over_defaults() {
    let config = parse(Some(r#"{ "filename": "poem.png", "scale": 3 }"#));
    assert_eq!(config.filename, "poem.png");
    assert_eq!(config.scale, 3.0);
    assert_eq!(config.padding, ExportConfig::default().padding);
}

#[test]
fn malformed_json_falls_back_to_defaults() {
    assert_eq!(parse(Some("{ not json")), ExportConfig::default());
}

#[test]
fn invalid_scale_falls_back_to_defaults() {
    assert_eq!(parse(Some(r#"{ "scale": 0 }"#)), ExportConfig::default());
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_without_browser_uses_defaults() {
    assert_eq!(load(), ExportConfig::default());
}
