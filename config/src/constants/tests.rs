//! Tests for the centralized configuration constants.

use super::*;

#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.default_segments >= 3);
}

#[test]
fn tessellation_defaults_match_dsl_contract() {
    // The DSL fixes both resolutions at 20 segments.
    assert_eq!(DEFAULT_SEGMENTS, 20);
    assert_eq!(SPHERE_SEGMENTS, 20);
}

#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 24).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, 2).unwrap_err(),
        ConfigError::InvalidSegments(2)
    );
}

#[test]
fn config_error_messages_name_the_field() {
    let err = ConfigError::InvalidTolerance(-1.0);
    assert!(err.to_string().contains("tolerance"));
    let err = ConfigError::InvalidSegments(2);
    assert!(err.to_string().contains("default_segments"));
}
