//! Tests for the process-wide factory
//!
//! The global factory installs the process panic hook, so only
//! `test_create_reports_panics_to_global_logger` may panic in this binary.

use logbridge::prelude::*;
use logbridge::{LoggerFactory, PanicHookChannel};

fn noop(_record: &LogRecord) {}

#[test]
fn test_create_defaults_level_to_zero() {
    let log = logbridge::create("no_loglevel_test", None::<&str>, noop).unwrap();

    assert_eq!(log.level(), 0);
}

#[test]
fn test_create_parses_level_string() {
    let log = logbridge::create("logLevel_test", "3", noop).unwrap();

    assert_eq!(log.level(), 3);
}

#[test]
fn test_create_installs_panic_bridge() {
    let _log = logbridge::create("global_bridge", "1", noop).unwrap();

    assert_eq!(LoggerFactory::global().bridge_state(), BridgeState::Installed);
    assert!(PanicHookChannel::global().is_hooked());
    assert!(LoggerFactory::global().capabilities().has_error_channel());
}

#[test]
fn test_create_rejects_empty_name() {
    let result = logbridge::create("", "1", noop);

    assert!(matches!(result, Err(LoggerError::MissingName)));
}

#[test]
fn test_create_reports_panics_to_global_logger() {
    let sink = MemorySink::new();
    let _log = logbridge::create("global_panic", "1", sink.clone()).unwrap();

    let result = std::panic::catch_unwind(|| panic!("Test error"));
    assert!(result.is_err());

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, 1);
    assert_eq!(records[0].name, "global_panic");
    assert!(records[0].time > 0);
    assert!(records[0].msg.starts_with("Test error ("));
    assert!(records[0].msg.contains("global_tests.rs"));
}
