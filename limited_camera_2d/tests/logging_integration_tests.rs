//! Integration tests for the logging system
//!
//! The logger is global, so every test here runs serially.
//!
//! Run with: cargo test --test logging_integration_tests

use limited_camera_2d::camera2d::controller::{CameraController, ControllerConfig, LimitMode};
use limited_camera_2d::camera2d::geometry::{grid_cell, Rect};
use limited_camera_2d::camera2d::log::{Log, LogEntry, LogSeverity, Logger};
use limited_camera_2d::camera2d::Camera;
use limited_camera_2d::glam::Vec2;
use serial_test::serial;
use std::sync::{Arc, Mutex};

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (test_logger, entries) = TestLogger::new();
    Log::set_logger(test_logger);

    Log::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    Log::log_detailed(
        LogSeverity::Error,
        "test::module",
        "Test error message".to_string(),
        "test_file.rs",
        42,
    );

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].severity, LogSeverity::Info);
    assert_eq!(captured[0].message, "Test info message");
    assert!(captured[0].file.is_none());
    assert_eq!(captured[1].severity, LogSeverity::Error);
    assert_eq!(captured[1].file, Some("test_file.rs"));
    assert_eq!(captured[1].line, Some(42));
    drop(captured);

    Log::reset_logger();
}

#[test]
#[serial]
fn test_integration_camera_limit_changes_are_logged() {
    let (test_logger, entries) = TestLogger::new();
    Log::set_logger(test_logger);

    let mut camera = Camera::new(Vec2::new(800.0, 800.0));
    camera.set_limits(Some(Rect::new(0.0, 0.0, 512.0, 512.0)));
    camera.set_limits(None);

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert!(captured.iter().all(|e| e.severity == LogSeverity::Debug));
    assert!(captured.iter().all(|e| e.source == "camera2d::Camera"));
    assert!(captured[0].message.contains("512x512"));
    assert_eq!(captured[1].message, "Limits cleared");
    drop(captured);

    Log::reset_logger();
}

#[test]
#[serial]
fn test_integration_zoom_floor_is_logged() {
    let (test_logger, entries) = TestLogger::new();
    Log::set_logger(test_logger);

    let mut camera = Camera::new(Vec2::new(800.0, 800.0));
    camera.set_zoom(2.0);
    camera.set_zoom(0.0);
    camera.set_zoom(f32::NAN);

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].severity, LogSeverity::Debug);
    assert_eq!(captured[1].severity, LogSeverity::Warn);
    drop(captured);

    Log::reset_logger();
}

#[test]
#[serial]
fn test_integration_mode_switch_is_logged() {
    let (test_logger, entries) = TestLogger::new();
    Log::set_logger(test_logger);

    let mut camera = Camera::new(Vec2::new(800.0, 800.0));
    let mut controller = CameraController::default();
    controller.select_mode(&mut camera, LimitMode::Coarse).unwrap();

    let captured = entries.lock().unwrap();
    let info: Vec<_> = captured
        .iter()
        .filter(|e| e.severity == LogSeverity::Info)
        .collect();
    assert_eq!(info.len(), 1);
    assert_eq!(info[0].source, "camera2d::Controller");
    assert_eq!(info[0].message, "Mode: Limit camera to 128x128 regions (1)");
    drop(captured);

    Log::reset_logger();
}

#[test]
#[serial]
fn test_integration_errors_are_logged_with_location() {
    let (test_logger, entries) = TestLogger::new();
    Log::set_logger(test_logger);

    let world = Rect::new(0.0, 0.0, 512.0, 512.0);
    assert!(grid_cell(&world, 0, 4, 0).is_err());

    let config = ControllerConfig { zoom_rate: 0.0, ..ControllerConfig::default() };
    assert!(CameraController::new(config).is_err());

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 2);
    for entry in captured.iter() {
        assert_eq!(entry.severity, LogSeverity::Error);
        assert!(entry.file.is_some());
        assert!(entry.line.is_some());
    }
    assert!(captured[0].message.contains("Invalid grid"));
    assert!(captured[1].message.contains("zoom_rate"));
    drop(captured);

    Log::reset_logger();
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let (test_logger, entries) = TestLogger::new();
    Log::set_logger(test_logger);
    Log::reset_logger();

    Log::log(LogSeverity::Info, "test::reset", "Goes to the default logger".to_string());

    assert!(entries.lock().unwrap().is_empty());
}
