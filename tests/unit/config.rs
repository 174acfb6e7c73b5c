use super::*;

#[test]
fn default_is_uhd_on_pale_green() {
    let cfg = RenderConfig::default();
    assert_eq!(cfg.size().unwrap(), CanvasSize::UHD);
    assert_eq!(cfg.background, Rgb8::new(224, 240, 224));
    assert_eq!(cfg.out_dir, PathBuf::from("backgrounds"));
    assert_eq!(cfg.font_candidates.len(), DEFAULT_FONT_CANDIDATES.len());
}

#[test]
fn empty_object_yields_defaults() {
    let cfg = RenderConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, RenderConfig::default());
}

#[test]
fn partial_config_overrides_fields() {
    let cfg = RenderConfig::from_json_str(
        r#"{ "width": 320, "height": 180, "out_dir": "target/x", "font_candidates": [] }"#,
    )
    .unwrap();
    assert_eq!(cfg.size().unwrap(), CanvasSize::new(320, 180).unwrap());
    assert!(cfg.font_candidates.is_empty());
    assert_eq!(cfg.background, RenderConfig::default().background);
}

#[test]
fn json_roundtrip() {
    let cfg = RenderConfig {
        width: 64,
        height: 32,
        background: Rgb8::new(1, 2, 3),
        out_dir: PathBuf::from("out"),
        font_candidates: vec![PathBuf::from("/nope.ttf")],
    };
    let s = serde_json::to_string(&cfg).unwrap();
    assert_eq!(RenderConfig::from_json_str(&s).unwrap(), cfg);
}

#[test]
fn zero_dimension_is_rejected() {
    let err = RenderConfig::from_json_str(r#"{ "width": 0 }"#).unwrap_err();
    assert!(matches!(err, GlyphfallError::Validation(_)));
}

#[test]
fn oversize_dimension_is_rejected() {
    let err = RenderConfig::from_json_str(r#"{ "height": 70000 }"#).unwrap_err();
    assert!(matches!(err, GlyphfallError::Validation(_)));
}

#[test]
fn malformed_and_unknown_fields_are_serde_errors() {
    assert!(matches!(
        RenderConfig::from_json_str("{ width: }").unwrap_err(),
        GlyphfallError::Serde(_)
    ));
    assert!(matches!(
        RenderConfig::from_json_str(r#"{ "colour": 1 }"#).unwrap_err(),
        GlyphfallError::Serde(_)
    ));
}

#[test]
fn missing_file_carries_path_context() {
    let err = RenderConfig::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(err.to_string().contains("here.json"));
}
