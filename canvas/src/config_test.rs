#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_reference_behavior() {
    let config = ExportConfig::default();
    assert_eq!(config.padding, 32.0);
    assert_eq!(config.scale, 2.0);
    assert_eq!(config.filename, "my_poetry.png");
    assert_eq!(config.background_src, "/wood.jpg");
}

#[test]
fn partial_json_keeps_other_defaults() {
    let config = ExportConfig::from_json(r#"{ "share_title": "Woods", "padding": 16 }"#);
    let Ok(config) = config else {
        panic!("partial config should parse");
    };
    assert_eq!(config.share_title, "Woods");
    assert_eq!(config.padding, 16.0);
    assert_eq!(config.filename, "my_poetry.png");
}

#[test]
fn empty_object_is_default() {
    let config = ExportConfig::from_json("{}");
    assert!(matches!(config, Ok(c) if c == ExportConfig::default()));
}

#[test]
fn malformed_json_is_an_error() {
    assert!(matches!(ExportConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
}

#[test]
fn non_positive_scale_is_rejected() {
    assert!(matches!(ExportConfig::from_json(r#"{ "scale": 0 }"#), Err(ConfigError::Scale(_))));
}
