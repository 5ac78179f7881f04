use switchplot::render::Easing;
use switchplot::{AttributeKey, AxisRole, ColorScheme, ConfigError, ScatterConfig};

#[test]
fn defaults_match_the_reference_layout() {
    let cfg = ScatterConfig::default();
    assert_eq!(cfg.viewport.width, 900.0);
    assert_eq!(cfg.viewport.height, 500.0);
    assert_eq!(cfg.viewport.plot_width(), 785.0);
    assert_eq!(cfg.viewport.plot_height(), 385.0);
    assert_eq!(cfg.transition.duration_ms, 800);
    assert_eq!(cfg.markers.radius, 13.0);
    assert_eq!(cfg.markers.label_offset_y, 3.0);
    assert_eq!(cfg.tooltip.offset, [5.0, 20.0]);
    assert_eq!(cfg.initial_attribute(AxisRole::X), AttributeKey::PovertyRate);
    assert_eq!(cfg.initial_attribute(AxisRole::Y), AttributeKey::HealthcareUninsuredRate);
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_yaml_fills_in_defaults() {
    let cfg = ScatterConfig::from_yaml_str(
        "transition:\n  duration_ms: 300\n  easing: Linear\ninitial_x: medianIncome\ncolor_scheme: Dark\n",
    )
    .unwrap();
    assert_eq!(cfg.transition.duration_ms, 300);
    assert_eq!(cfg.transition.easing, Easing::Linear);
    assert_eq!(cfg.initial_attribute(AxisRole::X), AttributeKey::MedianIncome);
    assert_eq!(cfg.color_scheme, ColorScheme::Dark);
    assert_eq!(cfg.viewport, ScatterConfig::default().viewport);
}

#[test]
fn yaml_and_json_files_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = ScatterConfig::default();
    cfg.title = "Health vs. demographics".to_string();
    cfg.initial_y = Some(AttributeKey::ObesityRate);
    cfg.viewport.margin.left = 90.0;

    for name in ["nested/plot.yaml", "plot.json"] {
        let path = dir.path().join(name);
        cfg.save_to_path(&path).unwrap();
        let loaded = ScatterConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, cfg, "{name}");
    }
}

#[test]
fn unknown_extension_is_rejected() {
    let err = ScatterConfig::default().save_to_path("plot.toml").unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(ext) if ext == "toml"));
}

#[test]
fn misplaced_initial_attribute_is_invalid() {
    let err = ScatterConfig::from_json_str(r#"{"initial_x": "smokingRate"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn margins_must_leave_a_plot_area() {
    let err = ScatterConfig::from_yaml_str("viewport:\n  width: 100\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}
