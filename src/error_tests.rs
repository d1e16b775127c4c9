//! Tests for HoverpopError type

use super::*;

#[test]
fn test_invalid_scenario_error_display() {
    let error = HoverpopError::InvalidScenario("duplicate id 'tip'".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Invalid scenario"));
    assert!(msg.contains("duplicate id 'tip'"));
}

#[test]
fn test_unknown_element_error_display() {
    let error = HoverpopError::UnknownElement("badge-9".to_string());
    assert_eq!(
        error.to_string(),
        "Unknown element 'badge-9' referenced in scenario"
    );
}

#[test]
fn test_json_error_from_serde() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error = HoverpopError::from(json_err);
    assert!(matches!(error, HoverpopError::Json(_)));
    assert!(error.to_string().contains("Invalid JSON"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let error = HoverpopError::from(io_err);
    assert!(matches!(error, HoverpopError::Io(_)));
    assert!(error.to_string().contains("test error"));
}
