//! Error case tests
//!
//! Verifies classification and messages across the failure taxonomy.

use agriscan::scanner;
use agriscan_common::{parse_analysis_response, AgriScanError, USER_FACING_ERROR};
use std::path::Path;
use tempfile::tempdir;

/// Diagnosing a path that does not exist
#[test]
fn test_diagnose_nonexistent_path() {
    let result = scanner::collect_images(Path::new("/nonexistent/path/12345"));
    assert!(matches!(result, Err(AgriScanError::NotFound(_))));
}

/// Diagnosing a non-image file fails before any request is made
#[test]
fn test_diagnose_non_image_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let file = dir.path().join("report.pdf");
    std::fs::write(&file, "%PDF-1.4").unwrap();

    let result = scanner::collect_images(&file);
    assert!(matches!(result, Err(AgriScanError::InvalidImage(_))));
}

/// An empty folder yields an empty list, not an error
#[test]
fn test_diagnose_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::collect_images(dir.path());

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

/// Malformed model output classifies as a parse failure
#[test]
fn test_malformed_response_is_parse_error() {
    let result = parse_analysis_response("{\"isPlant\": tru");
    let err = result.unwrap_err();
    assert!(matches!(err, AgriScanError::Parse(_)));
    assert!(!format!("{}", err).is_empty());
}

/// Display output for every variant carries its context
#[test]
fn test_error_display() {
    let errors = vec![
        AgriScanError::EmptyResponse,
        AgriScanError::Parse("bad json".to_string()),
        AgriScanError::Api("HTTP 500".to_string()),
        AgriScanError::MissingApiKey,
        AgriScanError::InvalidImage("corrupt.jpg".to_string()),
        AgriScanError::NotFound("/path/to/photo".to_string()),
        AgriScanError::NoImagesFound("/path/to/folder".to_string()),
        AgriScanError::Config("bad config".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty());
    }
}

/// The user-facing message never leaks variant details
#[test]
fn test_user_facing_message_is_generic() {
    assert!(!USER_FACING_ERROR.contains("HTTP"));
    assert!(!USER_FACING_ERROR.contains("JSON"));
    assert!(!USER_FACING_ERROR.contains("parse"));
}
